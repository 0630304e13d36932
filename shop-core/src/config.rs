//! Shop configuration

use std::path::PathBuf;

/// Configuration for the storefront core
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | SHOP_DATA_DIR | ./data | Directory holding the persisted collections |
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Data directory, one file per persisted collection
    pub data_dir: PathBuf,
}

impl ShopConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file when present; unset variables use defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = std::env::var("SHOP_DATA_DIR").unwrap_or_else(|_| "./data".into());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    /// Configuration rooted at an explicit data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
