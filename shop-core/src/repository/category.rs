//! Category Repository

use crate::storage;
use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::Category;
use shared::{util, AppError, AppResult};
use std::collections::HashSet;
use std::path::PathBuf;

pub struct CategoryRepository {
    file: PathBuf,
    items: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Hydrate from the persisted document, falling back to the seed
    pub fn open(file: PathBuf, seed: Vec<Category>) -> AppResult<Self> {
        let items = storage::load(&file)?.unwrap_or(seed);
        Ok(Self {
            file,
            items: RwLock::new(items),
        })
    }

    /// Current category list (flat adjacency list)
    pub fn list(&self) -> Vec<Category> {
        self.items.read().clone()
    }

    /// Find a category by id
    pub fn find(&self, id: &str) -> Option<Category> {
        self.items.read().iter().find(|c| c.id == id).cloned()
    }

    /// Create a category under the given parent
    ///
    /// The name is trimmed and must not be blank; the parent, when given,
    /// must exist. The parent link is never mutated afterwards, which keeps
    /// the forest acyclic.
    pub fn add(&self, name: &str, parent_id: Option<&str>) -> AppResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::BlankCategoryName));
        }

        let mut items = self.items.write();
        if let Some(parent) = parent_id {
            if !items.iter().any(|c| c.id == parent) {
                return Err(AppError::new(ErrorCode::CategoryNotFound)
                    .with_detail("parent_id", parent));
            }
        }
        let category = Category {
            id: util::time_id("c"),
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
        };
        let mut next = items.clone();
        next.push(category.clone());
        storage::save(&self.file, &next)?;
        *items = next;
        Ok(category)
    }

    /// Rename a category in place
    pub fn rename(&self, id: &str, new_name: &str) -> AppResult<Category> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::new(ErrorCode::BlankCategoryName));
        }

        let mut items = self.items.write();
        if !items.iter().any(|c| c.id == id) {
            return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id));
        }
        let next: Vec<Category> = items
            .iter()
            .map(|c| {
                if c.id == id {
                    Category {
                        name: new_name.to_string(),
                        ..c.clone()
                    }
                } else {
                    c.clone()
                }
            })
            .collect();
        storage::save(&self.file, &next)?;
        let renamed = next.iter().find(|c| c.id == id).cloned();
        *items = next;
        renamed.ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))
    }

    /// Remove every category whose id is in `ids`
    ///
    /// Used by the cascade delete; the id set comes from one
    /// `catalog::descendant_ids` pass. Returns how many were removed.
    pub fn remove_ids(&self, ids: &HashSet<String>) -> AppResult<usize> {
        let mut items = self.items.write();
        let next: Vec<Category> = items.iter().filter(|c| !ids.contains(&c.id)).cloned().collect();
        let removed = items.len() - next.len();
        if removed > 0 {
            storage::save(&self.file, &next)?;
            *items = next;
        }
        Ok(removed)
    }
}
