//! Key-value storage port
//!
//! Models the two string-valued stores the widget persists into: a durable
//! store that survives restarts and a session-scoped store that does not.
//! Both use the same contract; which one an adapter plays is decided at
//! wiring time.

use thiserror::Error;

/// Errors reported by storage adapters.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for a string-valued key-value store.
///
/// Implementations present a blocking contract and use interior
/// mutability, so a single instance can be shared behind an `Arc`.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
