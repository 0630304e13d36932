//! Carousel Repository
//!
//! Homepage carousel images, capacity-bounded at
//! [`CAROUSEL_CAPACITY`](shared::models::CAROUSEL_CAPACITY) entries.

use crate::storage;
use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::{CarouselImage, CAROUSEL_CAPACITY};
use shared::{util, AppError, AppResult};
use std::path::PathBuf;

pub struct CarouselRepository {
    file: PathBuf,
    items: RwLock<Vec<CarouselImage>>,
}

impl CarouselRepository {
    /// Hydrate from the persisted document, falling back to the seed
    pub fn open(file: PathBuf, seed: Vec<CarouselImage>) -> AppResult<Self> {
        let items = storage::load(&file)?.unwrap_or(seed);
        Ok(Self {
            file,
            items: RwLock::new(items),
        })
    }

    /// Current carousel images in display order
    pub fn list(&self) -> Vec<CarouselImage> {
        self.items.read().clone()
    }

    /// Append an image, rejecting inserts past the capacity
    pub fn add(&self, image_url: &str) -> AppResult<CarouselImage> {
        let mut items = self.items.write();
        if items.len() >= CAROUSEL_CAPACITY {
            return Err(AppError::new(ErrorCode::CarouselFull)
                .with_detail("capacity", CAROUSEL_CAPACITY as u64));
        }
        let image = CarouselImage {
            id: util::time_id("ci"),
            image_url: image_url.to_string(),
        };
        let mut next = items.clone();
        next.push(image.clone());
        storage::save(&self.file, &next)?;
        *items = next;
        Ok(image)
    }

    /// Delete an image; returns whether anything was removed
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let mut items = self.items.write();
        let next: Vec<CarouselImage> = items.iter().filter(|i| i.id != id).cloned().collect();
        let removed = next.len() != items.len();
        if removed {
            storage::save(&self.file, &next)?;
            *items = next;
        }
        Ok(removed)
    }
}
