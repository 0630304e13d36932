//! Order placement
//!
//! Builds an immutable [`Order`] from the current cart. The caller
//! ([`crate::state::AppState::place_order`]) pairs this with clearing the
//! cart; a failure here must leave the cart untouched, which holds
//! trivially since this function only reads.

use crate::cart;
use shared::error::ErrorCode;
use shared::models::{CartItem, CustomerInfo, Order, OrderStatus, Product};
use shared::{util, AppError, AppResult};
use validator::Validate;

/// Create an order from the current cart and catalog
///
/// Validates the customer info (all fields required, whitespace is blank),
/// rejects a cart with nothing purchasable in it, then freezes the cart
/// snapshot and the total computed from current prices. The snapshot keeps
/// every cart line, including lines whose product was deleted; only the
/// total excludes them, matching the cart display.
pub fn place_order(
    cart_items: &[CartItem],
    products: &[Product],
    customer_info: CustomerInfo,
) -> AppResult<Order> {
    if let Err(errors) = customer_info.validate() {
        let mut err = AppError::new(ErrorCode::CustomerInfoIncomplete);
        for field in errors.field_errors().keys() {
            err = err.with_detail(field.to_string(), "blank");
        }
        return Err(err);
    }

    let totals = cart::totals(cart_items, products);
    if totals.line_items.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyCart));
    }

    Ok(Order {
        id: util::time_id("order-"),
        items: cart_items.to_vec(),
        total: totals.subtotal,
        customer_info,
        created_at: util::now_rfc3339(),
        status: OrderStatus::Pending,
    })
}
