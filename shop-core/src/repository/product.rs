//! Product Repository

use crate::storage;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{Product, ProductCreate};
use shared::{util, AppError, AppResult};
use std::collections::HashSet;
use std::path::PathBuf;

pub struct ProductRepository {
    file: PathBuf,
    items: RwLock<Vec<Product>>,
}

impl ProductRepository {
    /// Hydrate from the persisted document, falling back to the seed
    pub fn open(file: PathBuf, seed: Vec<Product>) -> AppResult<Self> {
        let items = storage::load(&file)?.unwrap_or(seed);
        Ok(Self {
            file,
            items: RwLock::new(items),
        })
    }

    /// Current catalog, newest first
    pub fn list(&self) -> Vec<Product> {
        self.items.read().clone()
    }

    /// Find a product by id
    pub fn find(&self, id: &str) -> Option<Product> {
        self.items.read().iter().find(|p| p.id == id).cloned()
    }

    /// Add a new product with a freshly generated id, newest first
    pub fn add(&self, data: ProductCreate) -> AppResult<Product> {
        if data.price < Decimal::ZERO {
            return Err(AppError::validation("product price must be non-negative")
                .with_detail("price", data.price.to_string()));
        }
        let product = Product {
            id: util::time_id("p"),
            name: data.name,
            price: data.price,
            image_url: data.image_url,
            description: data.description,
            category_id: data.category_id,
        };

        let mut items = self.items.write();
        let mut next = items.clone();
        next.insert(0, product.clone());
        storage::save(&self.file, &next)?;
        *items = next;
        Ok(product)
    }

    /// Delete a product; returns whether anything was removed
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let mut items = self.items.write();
        let next: Vec<Product> = items.iter().filter(|p| p.id != id).cloned().collect();
        let removed = next.len() != items.len();
        if removed {
            storage::save(&self.file, &next)?;
            *items = next;
        }
        Ok(removed)
    }

    /// Null out `category_id` on every product referencing one of `ids`
    ///
    /// Part of the category cascade delete; returns how many products were
    /// uncategorized.
    pub fn clear_category_refs(&self, ids: &HashSet<String>) -> AppResult<usize> {
        let mut items = self.items.write();
        let mut cleared = 0;
        let next: Vec<Product> = items
            .iter()
            .map(|p| {
                if p.category_id.as_deref().is_some_and(|c| ids.contains(c)) {
                    cleared += 1;
                    Product {
                        category_id: None,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();
        if cleared > 0 {
            storage::save(&self.file, &next)?;
            *items = next;
        }
        Ok(cleared)
    }
}
