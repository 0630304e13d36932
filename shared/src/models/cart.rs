//! Cart Model

use serde::{Deserialize, Serialize};

/// A single cart line, unique by `product_id` within a cart
///
/// Re-adding a product merges into the existing line instead of inserting a
/// duplicate. Quantity is always positive; a line whose quantity would drop
/// to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}
