//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the durable store inside the data directory.
pub const DURABLE_FILE_NAME: &str = "storage.json";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding the durable store and REPL history.
    /// Defaults to `<data_dir>/quotebox`.
    pub data_dir: Option<PathBuf>,
    /// Session-scoped store. Defaults to `<temp_dir>/quotebox/session.json`.
    pub session_file: Option<PathBuf>,
}

impl FileStorageConfig {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("quotebox")
        })
    }

    pub fn durable_file(&self) -> PathBuf {
        self.resolve_data_dir().join(DURABLE_FILE_NAME)
    }

    pub fn resolve_session_file(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(|| {
            std::env::temp_dir()
                .join("quotebox")
                .join("session.json")
        })
    }

    pub fn history_file(&self) -> PathBuf {
        self.resolve_data_dir().join("history.txt")
    }
}
