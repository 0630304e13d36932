//! Carousel Image Model

use serde::{Deserialize, Serialize};

/// Maximum number of carousel images the storefront will hold
pub const CAROUSEL_CAPACITY: usize = 10;

/// Homepage carousel image entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselImage {
    pub id: String,
    pub image_url: String,
}
