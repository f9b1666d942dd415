use std::collections::VecDeque;

use fitterone_app::{Settings, SettingsRepository, log};
use gloo_storage::{Storage as _, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::flat_storage::{FlatStorage, FlatStorageError};

/// Local storage of the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl FlatStorage for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FlatStorageError> {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), FlatStorageError> {
        gloo_storage::LocalStorage::set(key, value).map_err(FlatStorageError::from)
    }

    fn delete(&self, key: &str) -> Result<(), FlatStorageError> {
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }
}

impl From<StorageError> for FlatStorageError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::SerdeError(err) => FlatStorageError::Serialization(err),
            err => FlatStorageError::Unavailable(err.to_string()),
        }
    }
}

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

pub struct UI<S> {
    storage: S,
}

impl<S> UI<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: FlatStorage> SettingsRepository for UI<S> {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.storage
            .get(KEY_SETTINGS)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.storage
            .set(KEY_SETTINGS, &settings)
            .map_err(|err| err.to_string())
    }
}

pub struct Log<S> {
    storage: S,
}

impl<S> Log<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: FlatStorage + Send + Sync + 'static> log::Repository for Log<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.storage
            .get(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.storage
            .set(KEY_LOG, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
