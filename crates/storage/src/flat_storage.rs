use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use serde::{Serialize, de::DeserializeOwned};

/// String-keyed store holding JSON values, such as the local storage of a browser.
pub trait FlatStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FlatStorageError>;
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), FlatStorageError>;
    fn delete(&self, key: &str) -> Result<(), FlatStorageError>;
}

#[derive(thiserror::Error, Debug)]
pub enum FlatStorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// In-memory flat storage.
///
/// Clones share the same entries. An optional quota limits the total size of all keys and
/// values in bytes, writes exceeding it are rejected like in a full browser storage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                quota: Some(bytes),
                ..Inner::default()
            })),
        }
    }

    /// Storage that rejects every operation.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                disabled: true,
                ..Inner::default()
            })),
        }
    }

    pub fn keys(&self) -> Result<Vec<String>, FlatStorageError> {
        Ok(self.lock()?.entries.keys().cloned().collect())
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>, FlatStorageError> {
        Ok(self.lock()?.entries.get(key).cloned())
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), FlatStorageError> {
        let mut inner = self.lock()?;

        if let Some(quota) = inner.quota {
            let used = inner
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum::<usize>();
            if used + key.len() + value.len() > quota {
                return Err(FlatStorageError::Unavailable(format!(
                    "quota of {quota} bytes exceeded"
                )));
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, FlatStorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|err| FlatStorageError::Unavailable(err.to_string()))?;
        if inner.disabled {
            return Err(FlatStorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(inner)
    }
}

impl FlatStorage for MemoryStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FlatStorageError> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), FlatStorageError> {
        self.set_raw(key, &serde_json::to_string(value)?)
    }

    fn delete(&self, key: &str) -> Result<(), FlatStorageError> {
        self.lock()?.entries.remove(key);
        Ok(())
    }
}
