#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod flat_storage;
pub mod keyed_record_store;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod repository;

pub use flat_storage::{FlatStorage, FlatStorageError, MemoryStorage};
pub use keyed_record_store::{Collection, KeyedRecordStore, Record, StoreConfig, StoreError};
