use log::{debug, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::flat_storage::{FlatStorage, FlatStorageError};

pub const DEFAULT_PREFIX: &str = "fitterone_";

const ID_FIELD: &str = "id";

/// A record stored in a collection. It must serialize to an object whose `id` field
/// equals [`Record::id`].
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(AsRefStr, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Users,
    Clients,
    Trainers,
    Plans,
    Workouts,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prepended to every key to separate the data from other users of the same storage.
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("record {0} is not serialized as an object")]
    MalformedRecord(String),
}

impl From<FlatStorageError> for StoreError {
    fn from(value: FlatStorageError) -> Self {
        match value {
            FlatStorageError::Unavailable(reason) => StoreError::Unavailable(reason),
            FlatStorageError::Serialization(err) => StoreError::Serialization(err),
        }
    }
}

/// Named collections of records on top of a flat storage.
///
/// Each collection keeps an index of its record ids in insertion order under
/// `{prefix}{collection}`, and each record is stored under `{prefix}{collection}_{id}`.
/// Writes are not transactional. A record is written before its id is added to the index,
/// so an interrupted write leaves at most an unindexed record behind. Ids in the index
/// without a decodable record are skipped when reading a whole collection.
pub struct KeyedRecordStore<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: FlatStorage> KeyedRecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn index_key(&self, collection: Collection) -> String {
        format!("{}{}", self.config.prefix, collection.as_ref())
    }

    fn record_key(&self, collection: Collection, id: &str) -> String {
        format!("{}{}_{id}", self.config.prefix, collection.as_ref())
    }

    pub fn index(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        Ok(self
            .storage
            .get(&self.index_key(collection))?
            .unwrap_or_default())
    }

    /// Inserts the record or replaces the record with the same id.
    pub fn put<R: Record + Serialize>(
        &self,
        collection: Collection,
        record: &R,
    ) -> Result<(), StoreError> {
        let id = record.id();
        self.storage.set(&self.record_key(collection, id), record)?;

        let mut index = self.index(collection)?;
        if !index.iter().any(|i| i == id) {
            index.push(id.to_string());
            self.storage.set(&self.index_key(collection), &index)?;
            debug!("added {id} to {collection}");
        }

        Ok(())
    }

    pub fn get<R: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<R>, StoreError> {
        Ok(self.storage.get(&self.record_key(collection, id))?)
    }

    pub fn get_all<R: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<R>, StoreError> {
        let mut records = vec![];
        for id in self.index(collection)? {
            match self.storage.get(&self.record_key(collection, &id)) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!("skipped missing record {id} in {collection}"),
                Err(FlatStorageError::Serialization(err)) => {
                    warn!("skipped undecodable record {id} in {collection}: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(records)
    }

    pub fn find_one<R: DeserializeOwned>(
        &self,
        collection: Collection,
        predicate: impl Fn(&R) -> bool,
    ) -> Result<Option<R>, StoreError> {
        Ok(self.get_all(collection)?.into_iter().find(|r| predicate(r)))
    }

    pub fn find_all<R: DeserializeOwned>(
        &self,
        collection: Collection,
        predicate: impl Fn(&R) -> bool,
    ) -> Result<Vec<R>, StoreError> {
        Ok(self
            .get_all(collection)?
            .into_iter()
            .filter(|r| predicate(r))
            .collect())
    }

    /// Stores the record under the id of the first record with the same key.
    ///
    /// The fields of `record` overwrite the fields of the existing record, fields missing in
    /// the serialization of `record` are kept. If there is no record with the same key,
    /// `record` is stored under its own id. Returns the stored record.
    pub fn update<R, K>(
        &self,
        collection: Collection,
        record: &R,
        key: impl Fn(&R) -> K,
    ) -> Result<R, StoreError>
    where
        R: Record + Serialize + DeserializeOwned + Clone,
        K: PartialEq,
    {
        let wanted = key(record);
        let Some(existing) = self.find_one(collection, |r: &R| key(r) == wanted)? else {
            self.put(collection, record)?;
            return Ok(record.clone());
        };

        let Value::Object(mut fields) = serde_json::to_value(&existing)? else {
            return Err(StoreError::MalformedRecord(existing.id().to_string()));
        };
        let Value::Object(updated_fields) = serde_json::to_value(record)? else {
            return Err(StoreError::MalformedRecord(record.id().to_string()));
        };
        fields.extend(updated_fields);
        fields.insert(ID_FIELD.to_string(), Value::String(existing.id().to_string()));

        let merged: R = serde_json::from_value(Value::Object(fields))?;
        self.put(collection, &merged)?;
        debug!("updated {} in {collection}", existing.id());
        Ok(merged)
    }

    /// Removes all records and indexes of all collections.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        for collection in Collection::iter() {
            for id in self.index(collection)? {
                self.storage.delete(&self.record_key(collection, &id))?;
            }
            self.storage.delete(&self.index_key(collection))?;
        }
        debug!("cleared all collections");
        Ok(())
    }
}
