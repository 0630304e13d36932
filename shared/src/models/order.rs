//! Order Model

use super::cart::CartItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order status
///
/// The admin dashboard may assign any status directly; no transition order
/// is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Display label for report output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "待處理",
            Self::Processing => "處理中",
            Self::Shipped => "已出貨",
            Self::Cancelled => "已取消",
        }
    }
}

/// Customer details captured at checkout, all fields required
///
/// Whitespace-only input counts as blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(custom(function = non_blank, message = "name must not be blank"))]
    pub name: String,
    #[validate(custom(function = non_blank, message = "email must not be blank"))]
    pub email: String,
    #[validate(custom(function = non_blank, message = "phone must not be blank"))]
    pub phone: String,
    #[validate(custom(function = non_blank, message = "address must not be blank"))]
    pub address: String,
}

fn non_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Order entity
///
/// `items` is an independent snapshot of the cart at placement time and
/// `total` is frozen then; neither is recomputed when product prices change
/// later. `status` is the only field ever mutated. Orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub customer_info: CustomerInfo,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "王小明".to_string(),
            email: "ming@example.com".to_string(),
            phone: "0912-345-678".to_string(),
            address: "台北市玩具街123號".to_string(),
        }
    }

    #[test]
    fn test_customer_info_valid() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn test_customer_info_blank_field_rejected() {
        let mut c = customer();
        c.phone = "".to_string();
        assert!(c.validate().is_err());

        let mut c = customer();
        c.address = "   ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let back: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }
}
