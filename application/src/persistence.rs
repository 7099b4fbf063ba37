//! Persistence adapter
//!
//! Serializes whole snapshots of widget state into the two storage ports.
//! Everything here is best-effort: read failures and unparsable values turn
//! into "no data", write failures are logged and dropped. Field-level
//! validation of quotes is shared with the import path.

use crate::ports::storage::KeyValueStorage;
use quotebox_domain::{CategoryFilter, Quote, import_document};
use std::sync::Arc;
use tracing::{debug, warn};

/// Durable key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "dynamicQuotes";
/// Durable key holding the selected category filter.
pub const FILTER_KEY: &str = "selectedCategoryFilter";
/// Session key holding the last displayed quote.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

pub struct QuotePersistence {
    durable: Arc<dyn KeyValueStorage>,
    session: Arc<dyn KeyValueStorage>,
}

impl QuotePersistence {
    pub fn new(durable: Arc<dyn KeyValueStorage>, session: Arc<dyn KeyValueStorage>) -> Self {
        Self { durable, session }
    }

    // ==================== Quotes ====================

    pub fn save_quotes(&self, quotes: &[Quote]) {
        match serde_json::to_string(quotes) {
            Ok(json) => {
                if write(self.durable.as_ref(), QUOTES_KEY, &json) {
                    debug!("Saved {} quotes", quotes.len());
                }
            }
            Err(e) => warn!("Could not serialize quotes: {}", e),
        }
    }

    /// Load the stored snapshot.
    ///
    /// `None` when nothing was stored, the value is not a JSON array, or
    /// the array holds records but none of them is a valid quote. Malformed
    /// records next to valid ones are dropped. A stored `[]` loads as an
    /// empty list.
    pub fn load_quotes(&self) -> Option<Vec<Quote>> {
        let raw = read(self.durable.as_ref(), QUOTES_KEY)?;
        match import_document(raw.as_bytes()) {
            Ok(outcome) if outcome.accepted.is_empty() && outcome.rejected > 0 => {
                warn!(
                    "Ignoring '{}': none of its {} records is a valid quote",
                    QUOTES_KEY, outcome.rejected
                );
                None
            }
            Ok(outcome) => {
                if outcome.rejected > 0 {
                    warn!(
                        "Dropped {} malformed stored quotes under '{}'",
                        outcome.rejected, QUOTES_KEY
                    );
                }
                Some(outcome.accepted)
            }
            Err(e) => {
                warn!("Ignoring unreadable '{}': {}", QUOTES_KEY, e);
                None
            }
        }
    }

    // ==================== Last viewed ====================

    pub fn save_last_viewed(&self, quote: &Quote) {
        match serde_json::to_string(quote) {
            Ok(json) => {
                write(self.session.as_ref(), LAST_VIEWED_KEY, &json);
            }
            Err(e) => warn!("Could not serialize last viewed quote: {}", e),
        }
    }

    pub fn clear_last_viewed(&self) {
        if let Err(e) = self.session.remove(LAST_VIEWED_KEY) {
            warn!("Could not remove '{}' from storage: {}", LAST_VIEWED_KEY, e);
        }
    }

    pub fn load_last_viewed(&self) -> Option<Quote> {
        let raw = read(self.session.as_ref(), LAST_VIEWED_KEY)?;
        let quote = serde_json::from_str::<Quote>(&raw).ok();
        if quote.is_none() {
            debug!("Ignoring malformed '{}'", LAST_VIEWED_KEY);
        }
        quote
    }

    // ==================== Filter preference ====================

    pub fn save_filter_preference(&self, filter: &CategoryFilter) {
        if write(self.durable.as_ref(), FILTER_KEY, filter.as_str()) {
            debug!("Saved filter preference '{}'", filter);
        }
    }

    pub fn load_filter_preference(&self) -> Option<String> {
        read(self.durable.as_ref(), FILTER_KEY)
    }
}

fn read(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not read '{}' from storage: {}", key, e);
            None
        }
    }
}

fn write(storage: &dyn KeyValueStorage, key: &str, value: &str) -> bool {
    match storage.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not write '{}' to storage: {}", key, e);
            false
        }
    }
}
