//! Infrastructure layer for quotebox
//!
//! This crate contains adapters that implement the ports defined in the
//! application and domain layers: file and memory key-value storage, a
//! `rand`-backed random source, and configuration file loading.

pub mod config;
pub mod random;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileStorageConfig,
    FileWidgetConfig,
};
pub use random::StdRandomSource;
pub use storage::{JsonFileStorage, MemoryStorage};
