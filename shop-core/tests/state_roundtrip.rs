//! Integration tests for the state container: hydration, write-through
//! persistence, the cascade delete and the checkout transaction.

use rust_decimal_macros::dec;
use shared::error::ErrorCode;
use shared::models::{CustomerInfo, OrderStatus, ProductCreate, CAROUSEL_CAPACITY};
use shop_core::{AppState, ShopConfig};
use tempfile::TempDir;

fn open_shop(dir: &TempDir) -> AppState {
    AppState::open(&ShopConfig::with_data_dir(dir.path())).expect("open state")
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "王小明".to_string(),
        email: "ming@example.com".to_string(),
        phone: "0912-345-678".to_string(),
        address: "台北市玩具街123號".to_string(),
    }
}

#[test]
fn first_run_seeds_defaults() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    assert_eq!(state.products.list().len(), 5);
    assert_eq!(state.categories.list().len(), 5);
    assert_eq!(state.carousel.list().len(), 3);
    assert!(state.cart.items().is_empty());
    assert!(state.orders.list().is_empty());
    assert_eq!(state.settings.shop_name(), "GK公仔玩具專賣店");
    assert!(state.login("admin"));
    assert!(!state.login("wrong"));
    assert_eq!(state.about.get().title, "關於GK公仔玩具專賣店");
}

#[test]
fn mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let product_id;
    {
        let state = open_shop(&dir);
        let product = state
            .products
            .add(ProductCreate {
                name: "【新世紀福音戰士】初號機".to_string(),
                price: dec!(12000),
                image_url: "https://example.com/eva.jpg".to_string(),
                description: "限定塗裝版".to_string(),
                category_id: None,
            })
            .unwrap();
        product_id = product.id.clone();
        state.settings.set_shop_name("新店名").unwrap();
        state.cart.add_item(&product_id, 2).unwrap();
    }

    let state = open_shop(&dir);
    let reloaded = state.products.find(&product_id).expect("product persisted");
    assert_eq!(reloaded.price, dec!(12000));
    // newest first
    assert_eq!(state.products.list()[0].id, product_id);
    assert_eq!(state.settings.shop_name(), "新店名");
    assert_eq!(state.cart.items().len(), 1);
    assert_eq!(state.cart.item_count(), 2);
}

#[test]
fn cascade_delete_removes_subtree_and_uncategorizes_products() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    // seed tree: 七龍珠 (3) -> { 孫悟空 (c-goku), 達爾 (c-vegeta) };
    // p1 lives under c-vegeta, p5 under c-goku
    let cascade = state.delete_category("3").unwrap();
    assert_eq!(cascade.removed_categories, 3);
    assert_eq!(cascade.uncategorized_products, 2);

    let remaining: Vec<String> = state.categories.list().into_iter().map(|c| c.id).collect();
    assert_eq!(remaining, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(state.products.find("p1").unwrap().category_id, None);
    assert_eq!(state.products.find("p5").unwrap().category_id, None);
    // unrelated products untouched
    assert_eq!(state.products.find("p2").unwrap().category_id.as_deref(), Some("2"));

    // survives reopen
    let state = open_shop(&dir);
    assert_eq!(state.categories.list().len(), 2);
    assert_eq!(state.products.find("p1").unwrap().category_id, None);

    // deleting a missing category is an error, not a crash
    let err = state.delete_category("3").unwrap_err();
    assert_eq!(err.code, ErrorCode::CategoryNotFound);
}

#[test]
fn storefront_filter_includes_descendants() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    let ids: Vec<String> = state
        .storefront_products(Some("3"))
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["p1".to_string(), "p5".to_string()]);
    assert_eq!(state.storefront_products(None).len(), 5);
}

#[test]
fn place_order_freezes_total_and_clears_cart() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    state.cart.add_item("p1", 2).unwrap(); // 8800 each
    let order = state.place_order(customer()).unwrap();
    assert_eq!(order.total, dec!(17600));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert!(state.cart.items().is_empty());

    // order log survives reopen, newest first
    let state = open_shop(&dir);
    let reloaded = state.orders.latest().expect("order persisted");
    assert_eq!(reloaded.id, order.id);
    assert_eq!(reloaded.total, dec!(17600));
    // deleting the product later never touches the frozen total
    state.products.delete("p1").unwrap();
    assert_eq!(state.orders.latest().unwrap().total, dec!(17600));
}

#[test]
fn failed_checkout_leaves_cart_untouched() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    state.cart.add_item("p1", 2).unwrap();
    let mut info = customer();
    info.name = "  ".to_string();
    let err = state.place_order(info).unwrap_err();
    assert_eq!(err.code, ErrorCode::CustomerInfoIncomplete);
    assert_eq!(state.cart.item_count(), 2);
    assert!(state.orders.list().is_empty());
}

#[test]
fn order_status_is_freely_assignable() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    state.cart.add_item("p2", 1).unwrap();
    let order = state.place_order(customer()).unwrap();

    // direct selection may jump anywhere, including backwards
    state.orders.update_status(&order.id, OrderStatus::Shipped).unwrap();
    state.orders.update_status(&order.id, OrderStatus::Processing).unwrap();
    let updated = state.orders.update_status(&order.id, OrderStatus::Cancelled).unwrap();
    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert_eq!(updated.total, order.total);

    let err = state
        .orders
        .update_status("order-missing", OrderStatus::Shipped)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderNotFound);
}

#[test]
fn carousel_rejects_insert_past_capacity() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    // seed has 3; fill up to the cap
    for i in 0..(CAROUSEL_CAPACITY - 3) {
        state.carousel.add(&format!("https://example.com/{i}.jpg")).unwrap();
    }
    assert_eq!(state.carousel.list().len(), CAROUSEL_CAPACITY);

    let err = state.carousel.add("https://example.com/over.jpg").unwrap_err();
    assert_eq!(err.code, ErrorCode::CarouselFull);
    assert_eq!(state.carousel.list().len(), CAROUSEL_CAPACITY);
}

#[test]
fn password_change_rules_and_persistence() {
    let dir = TempDir::new().unwrap();
    {
        let state = open_shop(&dir);

        let err = state.settings.change_password("wrong", "s3cret", "s3cret").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        let err = state.settings.change_password("admin", "abc", "abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordTooShort);
        let err = state.settings.change_password("admin", "s3cret", "typo").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordMismatch);
        assert!(state.login("admin"));

        state.settings.change_password("admin", "s3cret", "s3cret").unwrap();
        assert!(state.login("s3cret"));
    }

    let state = open_shop(&dir);
    assert!(state.login("s3cret"));
    assert!(!state.login("admin"));
}

#[test]
fn corrupt_document_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("products.json"), "{ not json at all").unwrap();

    let state = open_shop(&dir);
    assert_eq!(state.products.list().len(), 5);
}

#[test]
fn csv_export_covers_order_history() {
    let dir = TempDir::new().unwrap();
    let state = open_shop(&dir);

    state.cart.add_item("p1", 2).unwrap();
    state.cart.add_item("p2", 1).unwrap();
    state.place_order(customer()).unwrap();

    let csv = state.export_orders_csv().unwrap();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("訂單ID,日期,顧客姓名,總金額,狀態,商品列表"));
    assert!(csv.contains("王小明"));
    assert!(csv.contains("25100"));
    assert!(csv.contains("x2"));

    let summary = state.sales_summary();
    assert_eq!(summary.total_orders, 1);
    assert_eq!(summary.total_revenue, dec!(25100));
    assert_eq!(summary.total_items_sold, 3);
}
