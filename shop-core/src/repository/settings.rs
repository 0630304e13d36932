//! Settings Repository
//!
//! The two raw-string settings: the shop name and the admin credential.
//! Each is persisted as a plain text file (not JSON), matching the
//! storefront's historical storage format.

use crate::auth;
use crate::storage;
use parking_lot::RwLock;
use shared::AppResult;
use std::path::PathBuf;

pub struct SettingsRepository {
    shop_name_file: PathBuf,
    password_file: PathBuf,
    shop_name: RwLock<String>,
    password: RwLock<String>,
}

impl SettingsRepository {
    /// Hydrate both settings, falling back to the given defaults
    pub fn open(
        shop_name_file: PathBuf,
        password_file: PathBuf,
        default_shop_name: &str,
        default_password: &str,
    ) -> AppResult<Self> {
        let shop_name =
            storage::load_string(&shop_name_file)?.unwrap_or_else(|| default_shop_name.to_string());
        let password =
            storage::load_string(&password_file)?.unwrap_or_else(|| default_password.to_string());
        Ok(Self {
            shop_name_file,
            password_file,
            shop_name: RwLock::new(shop_name),
            password: RwLock::new(password),
        })
    }

    /// Current shop name
    pub fn shop_name(&self) -> String {
        self.shop_name.read().clone()
    }

    /// Replace the shop name
    pub fn set_shop_name(&self, name: &str) -> AppResult<()> {
        let mut shop_name = self.shop_name.write();
        storage::save_string(&self.shop_name_file, name)?;
        *shop_name = name.to_string();
        Ok(())
    }

    /// Check a login attempt against the stored credential
    pub fn verify_password(&self, attempt: &str) -> bool {
        auth::verify(&self.password.read(), attempt)
    }

    /// Change the admin credential
    ///
    /// Applies the [`auth`] rules (current must match, minimum length,
    /// confirmation); on any failure the stored credential is unchanged.
    pub fn change_password(&self, current: &str, new: &str, confirm: &str) -> AppResult<()> {
        let mut password = self.password.write();
        let accepted = auth::validate_change(&password, current, new, confirm)?;
        storage::save_string(&self.password_file, accepted)?;
        *password = accepted.to_string();
        Ok(())
    }
}
