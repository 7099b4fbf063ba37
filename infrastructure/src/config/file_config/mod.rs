//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! where the application needs them.

mod output;
mod storage;
mod widget;

pub use output::FileOutputConfig;
pub use storage::{DURABLE_FILE_NAME, FileStorageConfig};
pub use widget::FileWidgetConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("storage.session_file must differ from the durable store ({0})")]
    SessionFileIsDurableStore(String),

    #[error("storage.{0} cannot be an empty path")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where durable and session data live
    pub storage: FileStorageConfig,
    /// Widget behavior
    pub widget: FileWidgetConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected problems.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self
            .storage
            .data_dir
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            errors.push(ConfigValidationError::EmptyPath("data_dir"));
        }
        if self
            .storage
            .session_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            errors.push(ConfigValidationError::EmptyPath("session_file"));
        }

        let durable = self.storage.durable_file();
        if self.storage.resolve_session_file() == durable {
            errors.push(ConfigValidationError::SessionFileIsDurableStore(
                durable.display().to_string(),
            ));
        }

        errors
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
