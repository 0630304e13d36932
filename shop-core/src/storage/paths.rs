//! ShopPaths - data directory layout
//!
//! Centralizes every path under the shop data directory, one file per
//! persisted collection.
//!
//! ## Directory structure
//!
//! ```text
//! {data_dir}/
//! ├── products.json            # Product catalog
//! ├── categories.json          # Category forest (adjacency list)
//! ├── cart_items.json          # Current cart lines
//! ├── orders.json              # Order log, newest first
//! ├── carousel_images.json     # Homepage carousel (max 10)
//! ├── contact_info.json        # Footer/contact details
//! ├── about_info.json          # About page body
//! ├── contact_page_info.json   # Contact page body
//! ├── shopping_guide_info.json # Shopping guide page body
//! ├── payment_info.json        # Payment page body
//! ├── shipping_info.json       # Shipping page body
//! ├── shop_name.txt            # Shop name (raw string)
//! └── admin_password.txt       # Admin credential (raw string)
//! ```

use std::path::{Path, PathBuf};

/// Path accessor for the shop data directory
#[derive(Debug, Clone)]
pub struct ShopPaths {
    base: PathBuf,
}

impl ShopPaths {
    /// Create a new ShopPaths rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: data_dir.into(),
        }
    }

    /// Data directory root
    pub fn base(&self) -> &Path {
        &self.base
    }

    // ============ Collections ============

    /// Product catalog: {data_dir}/products.json
    pub fn products_file(&self) -> PathBuf {
        self.base.join("products.json")
    }

    /// Category forest: {data_dir}/categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.base.join("categories.json")
    }

    /// Cart lines: {data_dir}/cart_items.json
    pub fn cart_file(&self) -> PathBuf {
        self.base.join("cart_items.json")
    }

    /// Order log: {data_dir}/orders.json
    pub fn orders_file(&self) -> PathBuf {
        self.base.join("orders.json")
    }

    /// Carousel images: {data_dir}/carousel_images.json
    pub fn carousel_file(&self) -> PathBuf {
        self.base.join("carousel_images.json")
    }

    // ============ Content singletons ============

    /// Contact details: {data_dir}/contact_info.json
    pub fn contact_info_file(&self) -> PathBuf {
        self.base.join("contact_info.json")
    }

    /// About page: {data_dir}/about_info.json
    pub fn about_file(&self) -> PathBuf {
        self.base.join("about_info.json")
    }

    /// Contact page: {data_dir}/contact_page_info.json
    pub fn contact_page_file(&self) -> PathBuf {
        self.base.join("contact_page_info.json")
    }

    /// Shopping guide page: {data_dir}/shopping_guide_info.json
    pub fn shopping_guide_file(&self) -> PathBuf {
        self.base.join("shopping_guide_info.json")
    }

    /// Payment page: {data_dir}/payment_info.json
    pub fn payment_file(&self) -> PathBuf {
        self.base.join("payment_info.json")
    }

    /// Shipping page: {data_dir}/shipping_info.json
    pub fn shipping_file(&self) -> PathBuf {
        self.base.join("shipping_info.json")
    }

    // ============ String settings ============

    /// Shop name: {data_dir}/shop_name.txt
    pub fn shop_name_file(&self) -> PathBuf {
        self.base.join("shop_name.txt")
    }

    /// Admin credential: {data_dir}/admin_password.txt
    pub fn admin_password_file(&self) -> PathBuf {
        self.base.join("admin_password.txt")
    }
}
