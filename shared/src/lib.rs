//! Shared types for the GK Uncle storefront
//!
//! Common types used across the workspace: entity models, error types
//! and id/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
