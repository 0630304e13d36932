//! Application state container
//!
//! [`AppState`] owns every repository and exposes the operations that span
//! more than one collection: the category cascade delete and order
//! placement. Everything else is reached through the repository accessors.

use crate::catalog;
use crate::checkout;
use crate::config::ShopConfig;
use crate::repository::{
    CarouselRepository, CartRepository, CategoryRepository, OrderRepository, ProductRepository,
    SettingsRepository, SingletonRepository,
};
use crate::reports;
use crate::seed;
use crate::storage::ShopPaths;
use shared::error::ErrorCode;
use shared::models::{ContactInfo, CustomerInfo, Order, PageContent, Product};
use shared::{AppError, AppResult};
use tracing::info;

/// Result of a cascading category delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCascade {
    /// Categories removed (the seed and all its descendants)
    pub removed_categories: usize,
    /// Products whose category reference was cleared
    pub uncategorized_products: usize,
}

/// The state container: one repository per persisted collection
///
/// Single-process state scoped to one running shop session. Repositories
/// lock internally, so the container is freely shareable with an embedding
/// shell.
pub struct AppState {
    pub products: ProductRepository,
    pub categories: CategoryRepository,
    pub cart: CartRepository,
    pub orders: OrderRepository,
    pub carousel: CarouselRepository,
    pub contact_info: SingletonRepository<ContactInfo>,
    pub about: SingletonRepository<PageContent>,
    pub contact_page: SingletonRepository<PageContent>,
    pub shopping_guide: SingletonRepository<PageContent>,
    pub payment: SingletonRepository<PageContent>,
    pub shipping: SingletonRepository<PageContent>,
    pub settings: SettingsRepository,
}

impl AppState {
    /// Open the shop state rooted at the configured data directory
    ///
    /// Creates the directory if needed and hydrates every collection from
    /// its persisted document, seeding defaults on first run.
    pub fn open(config: &ShopConfig) -> AppResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let paths = ShopPaths::new(&config.data_dir);
        info!(data_dir = %paths.base().display(), "opening shop state");

        let state = Self {
            products: ProductRepository::open(paths.products_file(), seed::products())?,
            categories: CategoryRepository::open(paths.categories_file(), seed::categories())?,
            cart: CartRepository::open(paths.cart_file())?,
            orders: OrderRepository::open(paths.orders_file())?,
            carousel: CarouselRepository::open(paths.carousel_file(), seed::carousel_images())?,
            contact_info: SingletonRepository::open(
                paths.contact_info_file(),
                seed::contact_info(),
            )?,
            about: SingletonRepository::open(paths.about_file(), seed::about_info())?,
            contact_page: SingletonRepository::open(
                paths.contact_page_file(),
                seed::contact_page_info(),
            )?,
            shopping_guide: SingletonRepository::open(
                paths.shopping_guide_file(),
                seed::shopping_guide_info(),
            )?,
            payment: SingletonRepository::open(paths.payment_file(), seed::payment_info())?,
            shipping: SingletonRepository::open(paths.shipping_file(), seed::shipping_info())?,
            settings: SettingsRepository::open(
                paths.shop_name_file(),
                paths.admin_password_file(),
                seed::SHOP_NAME,
                seed::ADMIN_PASSWORD,
            )?,
        };
        Ok(state)
    }

    // ==================== Cross-collection operations ====================

    /// Delete a category and its whole subtree
    ///
    /// One descendant pass drives both effects: the matching categories are
    /// removed and every product pointing into the subtree is
    /// uncategorized. Atomic from the caller's perspective.
    pub fn delete_category(&self, id: &str) -> AppResult<CategoryCascade> {
        if self.categories.find(id).is_none() {
            return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id));
        }
        let ids = catalog::descendant_ids(id, &self.categories.list());
        let removed_categories = self.categories.remove_ids(&ids)?;
        let uncategorized_products = self.products.clear_category_refs(&ids)?;
        info!(
            category = id,
            removed_categories, uncategorized_products, "cascade deleted category subtree"
        );
        Ok(CategoryCascade {
            removed_categories,
            uncategorized_products,
        })
    }

    /// Place an order from the current cart and clear the cart
    ///
    /// One logical transaction: validation or storage failure while
    /// creating the order leaves the cart untouched; on success the order
    /// is prepended to the log and the cart emptied.
    pub fn place_order(&self, customer_info: CustomerInfo) -> AppResult<Order> {
        let order = checkout::place_order(
            &self.cart.items(),
            &self.products.list(),
            customer_info,
        )?;
        self.orders.insert(order.clone())?;
        self.cart.clear()?;
        info!(order_id = %order.id, total = %order.total, "order placed");
        Ok(order)
    }

    // ==================== Storefront helpers ====================

    /// Products shown for a category filter
    ///
    /// `None` lists the whole catalog; `Some(id)` lists the category and
    /// everything under it.
    pub fn storefront_products(&self, category_id: Option<&str>) -> Vec<Product> {
        let products = self.products.list();
        match category_id {
            None => products,
            Some(id) => catalog::products_in_subtree(id, &products, &self.categories.list())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Admin login: compare the attempt against the stored credential
    pub fn login(&self, password: &str) -> bool {
        self.settings.verify_password(password)
    }

    /// Dashboard sales overview
    pub fn sales_summary(&self) -> reports::SalesSummary {
        reports::summarize(&self.orders.list(), &self.products.list())
    }

    /// Order history CSV export
    pub fn export_orders_csv(&self) -> AppResult<String> {
        reports::export_csv(&self.orders.list(), &self.products.list())
    }
}
