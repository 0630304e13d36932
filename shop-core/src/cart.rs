//! Cart aggregate
//!
//! Pure operations over a list of cart lines. The cart is unique by
//! product id; all mutating operations return a new vector and never
//! produce a non-positive quantity.

use rust_decimal::Decimal;
use shared::models::{CartItem, Product};

/// Add `quantity` of a product to the cart
///
/// Merges into the existing line when the product is already present.
/// A zero quantity is a silent no-op.
pub fn add_item(cart: &[CartItem], product_id: &str, quantity: u32) -> Vec<CartItem> {
    if quantity == 0 {
        return cart.to_vec();
    }
    let mut next = cart.to_vec();
    match next.iter_mut().find(|item| item.product_id == product_id) {
        Some(item) => item.quantity += quantity,
        None => next.push(CartItem {
            product_id: product_id.to_string(),
            quantity,
        }),
    }
    next
}

/// Replace a line's quantity; zero removes the line
pub fn set_quantity(cart: &[CartItem], product_id: &str, new_quantity: u32) -> Vec<CartItem> {
    if new_quantity == 0 {
        return remove_item(cart, product_id);
    }
    cart.iter()
        .map(|item| {
            if item.product_id == product_id {
                CartItem {
                    product_id: item.product_id.clone(),
                    quantity: new_quantity,
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop a line from the cart; no-op when absent
pub fn remove_item(cart: &[CartItem], product_id: &str) -> Vec<CartItem> {
    cart.iter()
        .filter(|item| item.product_id != product_id)
        .cloned()
        .collect()
}

/// Total quantity across all lines (cart badge)
pub fn item_count(cart: &[CartItem]) -> u64 {
    cart.iter().map(|item| item.quantity as u64).sum()
}

/// A cart line joined against the product catalog
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Cart totals after joining against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub line_items: Vec<LineItem>,
}

/// Join the cart against the product catalog and total it
///
/// Lines whose product no longer exists are excluded from both the line
/// items and the subtotal; carts can outlive product deletions and that is
/// not an error.
pub fn totals(cart: &[CartItem], products: &[Product]) -> CartTotals {
    let mut subtotal = Decimal::ZERO;
    let mut line_items = Vec::with_capacity(cart.len());
    for item in cart {
        let Some(product) = products.iter().find(|p| p.id == item.product_id) else {
            continue;
        };
        let line_total = product.price * Decimal::from(item.quantity);
        subtotal += line_total;
        line_items.push(LineItem {
            product: product.clone(),
            quantity: item.quantity,
            line_total,
        });
    }
    CartTotals {
        subtotal,
        line_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {}", id),
            price,
            image_url: String::new(),
            description: String::new(),
            category_id: None,
        }
    }

    #[test]
    fn test_add_item_merges_same_product() {
        let cart = add_item(&[], "p1", 2);
        let cart = add_item(&cart, "p1", 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn test_add_item_zero_is_noop() {
        let cart = add_item(&[], "p1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let cart = add_item(&[], "p1", 2);
        let via_set = set_quantity(&cart, "p1", 0);
        let via_remove = remove_item(&cart, "p1");
        assert_eq!(via_set, via_remove);
        assert!(via_set.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces() {
        let cart = add_item(&[], "p1", 2);
        let cart = set_quantity(&cart, "p1", 7);
        assert_eq!(cart[0].quantity, 7);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = add_item(&[], "p1", 2);
        let next = remove_item(&cart, "p9");
        assert_eq!(next, cart);
    }

    #[test]
    fn test_item_count() {
        let cart = add_item(&add_item(&[], "p1", 2), "p2", 3);
        assert_eq!(item_count(&cart), 5);
    }

    #[test]
    fn test_totals_joins_and_sums() {
        let products = vec![product("p1", dec!(8800)), product("p2", dec!(100))];
        let cart = add_item(&add_item(&[], "p1", 2), "p2", 1);
        let t = totals(&cart, &products);
        assert_eq!(t.subtotal, dec!(17700));
        assert_eq!(t.line_items.len(), 2);
        assert_eq!(t.line_items[0].line_total, dec!(17600));
    }

    #[test]
    fn test_totals_excludes_deleted_products() {
        let products = vec![product("p1", dec!(8800))];
        let cart = add_item(&add_item(&[], "p1", 2), "ghost", 4);
        let t = totals(&cart, &products);
        assert_eq!(t.subtotal, dec!(17600));
        assert_eq!(t.line_items.len(), 1);
    }
}
