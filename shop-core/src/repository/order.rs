//! Order Repository
//!
//! Append-only log of placed orders, newest first. Status is the only
//! field ever mutated; orders are never deleted.

use crate::storage;
use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::{Order, OrderStatus};
use shared::{AppError, AppResult};
use std::path::PathBuf;

pub struct OrderRepository {
    file: PathBuf,
    items: RwLock<Vec<Order>>,
}

impl OrderRepository {
    /// Hydrate from the persisted document; no orders on first run
    pub fn open(file: PathBuf) -> AppResult<Self> {
        let items = storage::load(&file)?.unwrap_or_default();
        Ok(Self {
            file,
            items: RwLock::new(items),
        })
    }

    /// Order log, newest first
    pub fn list(&self) -> Vec<Order> {
        self.items.read().clone()
    }

    /// Find an order by id
    pub fn find(&self, id: &str) -> Option<Order> {
        self.items.read().iter().find(|o| o.id == id).cloned()
    }

    /// Most recent order (order confirmation screen)
    pub fn latest(&self) -> Option<Order> {
        self.items.read().first().cloned()
    }

    /// Prepend a freshly placed order to the log
    pub fn insert(&self, order: Order) -> AppResult<()> {
        let mut items = self.items.write();
        let mut next = items.clone();
        next.insert(0, order);
        storage::save(&self.file, &next)?;
        *items = next;
        Ok(())
    }

    /// Assign a new status to an order
    ///
    /// Any status may be assigned at any time; the dashboard sets them by
    /// direct selection.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut items = self.items.write();
        if !items.iter().any(|o| o.id == id) {
            return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id));
        }
        let next: Vec<Order> = items
            .iter()
            .map(|o| {
                if o.id == id {
                    Order {
                        status,
                        ..o.clone()
                    }
                } else {
                    o.clone()
                }
            })
            .collect();
        storage::save(&self.file, &next)?;
        let updated = next.iter().find(|o| o.id == id).cloned();
        *items = next;
        updated.ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id))
    }
}
