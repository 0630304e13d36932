//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 4xxx: Order errors
/// - 6xxx: Catalog errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Order errors (4xxx)
    Order,
    /// Catalog errors (6xxx)
    Catalog,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            4000..5000 => Self::Order,
            6000..7000 => Self::Catalog,
            _ => Self::System,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(
            ErrorCategory::from(ErrorCode::ValidationFailed),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::InvalidCredentials),
            ErrorCategory::Auth
        );
        assert_eq!(ErrorCategory::from(ErrorCode::EmptyCart), ErrorCategory::Order);
        assert_eq!(
            ErrorCategory::from(ErrorCode::CarouselFull),
            ErrorCategory::Catalog
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::StorageError),
            ErrorCategory::System
        );
    }
}
