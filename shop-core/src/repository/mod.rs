//! Repository Module
//!
//! One repository per persisted collection. Each hydrates from its JSON
//! document at startup (seed defaults when nothing was persisted) and
//! writes through on every mutation. Mutations build the next state,
//! persist it, and only then commit it to memory, so a failed write
//! leaves the previous state intact.

pub mod carousel;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod settings;
pub mod singleton;

// Re-exports
pub use carousel::CarouselRepository;
pub use cart::CartRepository;
pub use category::CategoryRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use settings::SettingsRepository;
pub use singleton::SingletonRepository;
