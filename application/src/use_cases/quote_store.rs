//! Quote store
//!
//! Owns the [`QuoteCollection`] and flushes it to durable storage after
//! every mutation. The startup load path (`load`) and the import path
//! (`merge`) are separate: the first replaces everything, the
//! second appends.

use crate::persistence::QuotePersistence;
use quotebox_domain::{DomainError, Quote, QuoteCollection, QuoteId, StoredQuote};
use std::sync::Arc;
use tracing::debug;

pub struct QuoteStore {
    collection: QuoteCollection,
    persistence: Arc<QuotePersistence>,
}

impl QuoteStore {
    /// Create a store holding `initial` until [`QuoteStore::load`] finds a snapshot.
    pub fn new(persistence: Arc<QuotePersistence>, initial: Vec<Quote>) -> Self {
        Self {
            collection: QuoteCollection::from_quotes(initial),
            persistence,
        }
    }

    /// Replace the in-memory list with the stored snapshot, if there is one.
    ///
    /// Returns `false` and keeps the current list when storage has nothing
    /// usable.
    pub fn load(&mut self) -> bool {
        match self.persistence.load_quotes() {
            Some(quotes) => {
                debug!("Loaded {} quotes from storage", quotes.len());
                self.collection.replace_all(quotes);
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, text: &str, category: &str) -> Result<QuoteId, DomainError> {
        let quote = Quote::new(text, category)?;
        let id = self.collection.add(quote);
        debug!("Added quote {}", id);
        self.flush();
        Ok(id)
    }

    /// Remove a quote. Unknown ids change nothing and return `None`.
    pub fn remove(&mut self, id: QuoteId) -> Option<Quote> {
        let removed = self.collection.remove(id)?;
        debug!("Removed quote {}", id);
        self.flush();
        Some(removed)
    }

    /// Update a quote in place, returning the previous value.
    ///
    /// Input is validated before the lookup, so a bad edit never touches
    /// state. Unknown ids return `Ok(None)`.
    pub fn edit(
        &mut self,
        id: QuoteId,
        text: &str,
        category: &str,
    ) -> Result<Option<Quote>, DomainError> {
        let quote = Quote::new(text, category)?;
        let Some(previous) = self.collection.edit(id, quote) else {
            return Ok(None);
        };
        debug!("Edited quote {}", id);
        self.flush();
        Ok(Some(previous))
    }

    /// Append already-validated quotes after the existing ones.
    pub fn merge(&mut self, quotes: Vec<Quote>) -> Vec<QuoteId> {
        if quotes.is_empty() {
            return Vec::new();
        }
        let ids = self.collection.extend(quotes);
        debug!("Merged {} quotes", ids.len());
        self.flush();
        ids
    }

    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.collection.get(id)
    }

    pub fn list(&self) -> &[StoredQuote] {
        self.collection.list()
    }

    pub fn collection(&self) -> &QuoteCollection {
        &self.collection
    }

    fn flush(&self) {
        self.persistence.save_quotes(&self.collection.snapshot());
    }
}
