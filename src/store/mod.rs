//! Small key-value persistence for state that must survive restarts
//! (language preference, auth token).

mod file;
mod memory;
mod prefs;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use prefs::{LANGUAGE_KEY, Preferences};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Store {path} is not valid JSON: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write store: {0:#}")]
    Write(anyhow::Error),
}

/// String key-value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
