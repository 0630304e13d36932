//! Sales reporting
//!
//! Aggregates over the order log for the admin dashboard, plus the CSV
//! export. Cancelled orders count toward the order total but not toward
//! revenue or units sold.

use chrono::DateTime;
use rust_decimal::Decimal;
use shared::models::{Order, OrderStatus, Product};
use shared::{AppError, AppResult};
use std::collections::HashMap;

/// Fallback product name for orders referencing a deleted product
const UNKNOWN_PRODUCT: &str = "未知商品";

/// How many products the top-sellers list holds
const TOP_SELLERS: usize = 5;

/// One row of the top-sellers ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSeller {
    pub name: String,
    pub quantity: u64,
}

/// Dashboard sales overview
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Revenue across non-cancelled orders
    pub total_revenue: Decimal,
    /// Order count across all statuses
    pub total_orders: usize,
    /// Units sold across non-cancelled orders
    pub total_items_sold: u64,
    /// Best selling products by quantity, at most five
    pub top_sellers: Vec<TopSeller>,
}

/// Compute the sales overview from the order log
pub fn summarize(orders: &[Order], products: &[Product]) -> SalesSummary {
    let valid: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let total_revenue = valid.iter().map(|o| o.total).sum();
    let total_items_sold = valid
        .iter()
        .flat_map(|o| o.items.iter())
        .map(|item| item.quantity as u64)
        .sum();

    let mut sold: HashMap<&str, u64> = HashMap::new();
    for order in &valid {
        for item in &order.items {
            *sold.entry(item.product_id.as_str()).or_insert(0) += item.quantity as u64;
        }
    }
    let mut ranking: Vec<(&str, u64)> = sold.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let top_sellers = ranking
        .into_iter()
        .take(TOP_SELLERS)
        .map(|(product_id, quantity)| TopSeller {
            name: products
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            quantity,
        })
        .collect();

    SalesSummary {
        total_revenue,
        total_orders: orders.len(),
        total_items_sold,
        top_sellers,
    }
}

/// Export the order history as a CSV table
///
/// Columns: order id, formatted creation timestamp, customer name, total,
/// status, and a semicolon-joined "name x quantity" product list. The
/// output starts with a UTF-8 BOM so spreadsheet tools decode the CJK
/// content correctly.
pub fn export_csv(orders: &[Order], products: &[Product]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["訂單ID", "日期", "顧客姓名", "總金額", "狀態", "商品列表"])
        .map_err(|e| AppError::storage(e.to_string()))?;

    for order in orders {
        let product_list = order
            .items
            .iter()
            .map(|item| {
                let name = products
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .map(|p| p.name.as_str())
                    .unwrap_or("N/A");
                format!("{} x{}", name, item.quantity)
            })
            .collect::<Vec<_>>()
            .join("; ");

        writer
            .write_record([
                order.id.as_str(),
                &format_timestamp(&order.created_at),
                order.customer_info.name.as_str(),
                &order.total.to_string(),
                order.status.label(),
                &product_list,
            ])
            .map_err(|e| AppError::storage(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::storage(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(format!("\u{feff}{}", body))
}

/// Render an RFC 3339 timestamp as a local-style date string
///
/// Falls back to the raw stored value if it does not parse.
fn format_timestamp(rfc3339: &str) -> String {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}
