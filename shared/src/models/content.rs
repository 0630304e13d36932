//! Site Content Models
//!
//! Key-value style singletons backing the informational pages. No
//! relationships to other entities.

use serde::{Deserialize, Serialize};

/// Contact details shown in the footer and on the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook_url: String,
    pub instagram_url: String,
}

/// Generic title/content/image page body
///
/// Backs the About, Contact, Shopping Guide, Payment and Shipping pages,
/// which all share the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub content: String,
    pub image_url: String,
}
