//! Data models
//!
//! Shared between the storefront core and any embedding shell.
//! All IDs are `String` (time-derived, generated by `shared::util::time_id`).
//! Entities relate by id reference only; there is no foreign-key
//! enforcement, so cascading operations must clear references themselves.

pub mod carousel;
pub mod cart;
pub mod category;
pub mod content;
pub mod order;
pub mod product;

// Re-exports
pub use carousel::*;
pub use cart::*;
pub use category::*;
pub use content::*;
pub use order::*;
pub use product::*;
