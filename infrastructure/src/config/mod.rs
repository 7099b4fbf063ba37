//! Configuration file loading for quotebox
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTEBOX_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotebox.toml` or `./.quotebox.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quotebox/config.toml` (platform config dir)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DURABLE_FILE_NAME, FileConfig, FileOutputConfig, FileStorageConfig,
    FileWidgetConfig,
};
pub use loader::ConfigLoader;
