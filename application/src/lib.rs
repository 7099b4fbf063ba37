//! Application layer for quotebox
//!
//! This crate contains use cases, port definitions, the persistence adapter
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod persistence;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use persistence::{FILTER_KEY, LAST_VIEWED_KEY, QUOTES_KEY, QuotePersistence};
pub use ports::{
    presenter::{NoPresenter, Notice, NoticeLevel, QuotePresenter},
    storage::{KeyValueStorage, StorageError},
};
pub use use_cases::filter_controller::FilterController;
pub use use_cases::quote_store::QuoteStore;
pub use use_cases::quote_widget::{EMPTY_SENTINEL_CATEGORY, EMPTY_SENTINEL_TEXT, QuoteWidget};
