//! Storefront core for the GK Uncle collectibles shop
//!
//! Everything an embedding shell needs to run the shop: the product
//! catalog with its hierarchical categories, the shopping cart, checkout,
//! the order log, site content and admin settings. All state lives in
//! flat JSON documents under a local data directory; there is no server
//! and no network protocol.
//!
//! # Module structure
//!
//! - [`config`] - Data directory configuration
//! - [`storage`] - JSON document persistence and file layout
//! - [`repository`] - One repository per persisted collection
//! - [`catalog`] - Category forest and descendant-set utilities
//! - [`cart`] - Cart aggregate operations and totals
//! - [`checkout`] - Order placement
//! - [`reports`] - Sales summary and CSV export
//! - [`auth`] - Admin credential rules
//! - [`images`] - Embedding uploaded images as data URLs
//! - [`state`] - The [`AppState`] container wiring it all together
//! - [`seed`] - First-run defaults

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod images;
pub mod reports;
pub mod repository;
pub mod seed;
pub mod state;
pub mod storage;

pub use config::ShopConfig;
pub use state::AppState;
