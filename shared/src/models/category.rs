//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Categories form a forest linked by `parent_id` (adjacency list). The
/// relation is acyclic by construction: a category is only ever created with
/// a parent chosen from existing categories and the parent link is never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Parent reference (None = top-level)
    pub parent_id: Option<String>,
}
