//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price in the shop currency, non-negative
    pub price: Decimal,
    pub image_url: String,
    pub description: String,
    /// Category reference (None = uncategorized)
    ///
    /// Nulled out by a cascading category delete.
    pub category_id: Option<String>,
}

/// Create product payload (id is generated on insert)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub description: String,
    pub category_id: Option<String>,
}
