//! Persistent key-value storage used to survive restarts.
//!
//! The cart only needs two operations, `get` and `set` of string values by key.
//! [`KeyValueStore`] is the seam; [`MemoryStore`] and [`JsonFileStore`] are the
//! implementations shipped with the crate.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the storefront keeps its cart.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Async string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored under `key`, `Ok(None)` if there is none.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
