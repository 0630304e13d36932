//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and stable persistence across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 4,
    /// Required field missing or blank
    RequiredField = 5,

    // ==================== 1xxx: Auth ====================
    /// Invalid admin credentials
    InvalidCredentials = 1001,
    /// New password does not meet the minimum length
    PasswordTooShort = 1002,
    /// New password and confirmation do not match
    PasswordMismatch = 1003,

    // ==================== 4xxx: Order ====================
    /// Cannot place an order from an empty cart
    EmptyCart = 4001,
    /// Customer info has blank required fields
    CustomerInfoIncomplete = 4002,
    /// Order not found
    OrderNotFound = 4003,

    // ==================== 6xxx: Catalog ====================
    /// Category name must not be blank
    BlankCategoryName = 6001,
    /// Category not found
    CategoryNotFound = 6002,
    /// Product not found
    ProductNotFound = 6003,
    /// Carousel already holds the maximum number of images
    CarouselFull = 6004,

    // ==================== 9xxx: System ====================
    /// Persistent storage read/write failed
    StorageError = 9001,
    /// Persisted document could not be decoded
    CorruptDocument = 9002,
    /// Image file could not be read or embedded
    ImageReadError = 9003,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::InvalidCredentials => "Incorrect password",
            Self::PasswordTooShort => "New password is too short",
            Self::PasswordMismatch => "Password confirmation does not match",
            Self::EmptyCart => "Cart is empty",
            Self::CustomerInfoIncomplete => "Customer info has blank fields",
            Self::OrderNotFound => "Order not found",
            Self::BlankCategoryName => "Category name must not be blank",
            Self::CategoryNotFound => "Category not found",
            Self::ProductNotFound => "Product not found",
            Self::CarouselFull => "Carousel image limit reached",
            Self::StorageError => "Storage error",
            Self::CorruptDocument => "Persisted document is corrupt",
            Self::ImageReadError => "Image could not be read",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.as_u16())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::InvalidRequest,
            5 => Self::RequiredField,
            1001 => Self::InvalidCredentials,
            1002 => Self::PasswordTooShort,
            1003 => Self::PasswordMismatch,
            4001 => Self::EmptyCart,
            4002 => Self::CustomerInfoIncomplete,
            4003 => Self::OrderNotFound,
            6001 => Self::BlankCategoryName,
            6002 => Self::CategoryNotFound,
            6003 => Self::ProductNotFound,
            6004 => Self::CarouselFull,
            9001 => Self::StorageError,
            9002 => Self::CorruptDocument,
            9003 => Self::ImageReadError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::EmptyCart,
            ErrorCode::CarouselFull,
            ErrorCode::StorageError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }
}
