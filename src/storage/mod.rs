//! Key-value storage substrate.
//!
//! The learning store only ever needs string get/set/remove by key, with no
//! multi-key transactions. Anything that can do that implements
//! [`KeyValueStore`]:
//!
//! - `MemoryStorage`: in-process map, optionally capped by a byte quota
//! - `FileStorage`: a single JSON file holding every key

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Failure reading, writing or decoding the storage substrate
#[derive(Debug, Error)]
pub enum StorageFault {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Quota exceeded writing {key}: needs {needed} bytes, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Failed to lock storage: {0}")]
    Lock(String),
}

/// Synchronous string-keyed storage
pub trait KeyValueStore {
    /// Read a key, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageFault>;

    /// Write a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageFault>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageFault>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageFault> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageFault> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageFault> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageFault> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageFault> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageFault> {
        (**self).remove(key)
    }
}
