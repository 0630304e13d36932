//! Cart Repository
//!
//! Thin persistence wrapper over the pure [`crate::cart`] aggregate
//! operations.

use crate::cart;
use crate::storage;
use parking_lot::RwLock;
use shared::models::CartItem;
use shared::AppResult;
use std::path::PathBuf;

pub struct CartRepository {
    file: PathBuf,
    items: RwLock<Vec<CartItem>>,
}

impl CartRepository {
    /// Hydrate from the persisted document; a fresh cart starts empty
    pub fn open(file: PathBuf) -> AppResult<Self> {
        let items = storage::load(&file)?.unwrap_or_default();
        Ok(Self {
            file,
            items: RwLock::new(items),
        })
    }

    /// Current cart lines
    pub fn items(&self) -> Vec<CartItem> {
        self.items.read().clone()
    }

    /// Total quantity across all lines (cart badge)
    pub fn item_count(&self) -> u64 {
        cart::item_count(&self.items.read())
    }

    /// Add a quantity of a product, merging with any existing line
    pub fn add_item(&self, product_id: &str, quantity: u32) -> AppResult<()> {
        self.apply(|items| cart::add_item(items, product_id, quantity))
    }

    /// Replace a line's quantity; zero removes the line
    pub fn set_quantity(&self, product_id: &str, new_quantity: u32) -> AppResult<()> {
        self.apply(|items| cart::set_quantity(items, product_id, new_quantity))
    }

    /// Drop a line from the cart
    pub fn remove_item(&self, product_id: &str) -> AppResult<()> {
        self.apply(|items| cart::remove_item(items, product_id))
    }

    /// Empty the cart (order placement)
    pub fn clear(&self) -> AppResult<()> {
        self.apply(|_| Vec::new())
    }

    fn apply(&self, op: impl FnOnce(&[CartItem]) -> Vec<CartItem>) -> AppResult<()> {
        let mut items = self.items.write();
        let next = op(&items);
        if next != *items {
            storage::save(&self.file, &next)?;
            *items = next;
        }
        Ok(())
    }
}
