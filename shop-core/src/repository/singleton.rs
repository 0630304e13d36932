//! Singleton Repository
//!
//! Generic repository for the key-value style content records (contact
//! info and the five informational page bodies). Each instance owns one
//! document holding one value.

use crate::storage;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::AppResult;
use std::path::PathBuf;

pub struct SingletonRepository<T> {
    file: PathBuf,
    value: RwLock<T>,
}

impl<T> SingletonRepository<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Hydrate from the persisted document, falling back to the seed
    pub fn open(file: PathBuf, seed: T) -> AppResult<Self> {
        let value = storage::load(&file)?.unwrap_or(seed);
        Ok(Self {
            file,
            value: RwLock::new(value),
        })
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Replace the value wholesale and persist it
    pub fn update(&self, new_value: T) -> AppResult<()> {
        let mut value = self.value.write();
        storage::save(&self.file, &new_value)?;
        *value = new_value;
        Ok(())
    }
}
