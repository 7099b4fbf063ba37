//! Filter controller
//!
//! Tracks the active [`CategoryFilter`], keeps it valid as the collection
//! changes, and persists it. A filter that names a category no longer
//! present is coerced to `all`, and the coercion is written back so the
//! next start does not restore a stale value.

use crate::persistence::QuotePersistence;
use quotebox_domain::{CategoryFilter, Quote, QuoteCollection};
use std::sync::Arc;
use tracing::{debug, info};

pub struct FilterController {
    current: CategoryFilter,
    persistence: Arc<QuotePersistence>,
}

impl FilterController {
    pub fn new(persistence: Arc<QuotePersistence>) -> Self {
        Self {
            current: CategoryFilter::All,
            persistence,
        }
    }

    pub fn current(&self) -> &CategoryFilter {
        &self.current
    }

    /// Apply the remembered preference, if any.
    pub fn restore(&mut self, collection: &QuoteCollection) -> &CategoryFilter {
        if let Some(saved) = self.persistence.load_filter_preference() {
            let (filter, coerced) = CategoryFilter::parse(&saved).resolve(collection);
            if coerced {
                info!("Saved filter '{}' no longer matches any quote, using all", saved);
                self.persistence.save_filter_preference(&filter);
            }
            self.current = filter;
        }
        &self.current
    }

    /// Explicit user selection. Always persisted.
    pub fn set(&mut self, value: &str, collection: &QuoteCollection) -> &CategoryFilter {
        let (filter, coerced) = CategoryFilter::parse(value).resolve(collection);
        if coerced {
            debug!("Unknown category '{}', falling back to all", value.trim());
        }
        self.current = filter;
        self.persistence.save_filter_preference(&self.current);
        &self.current
    }

    /// Re-check the current filter after the collection changed.
    ///
    /// Returns `true` when the filter was reset to `all`.
    pub fn refresh(&mut self, collection: &QuoteCollection) -> bool {
        let (filter, coerced) = self.current.clone().resolve(collection);
        if coerced {
            info!("Category '{}' is gone, resetting filter", self.current);
            self.current = filter;
            self.persistence.save_filter_preference(&self.current);
        }
        coerced
    }

    pub fn distinct_categories(&self, collection: &QuoteCollection) -> Vec<String> {
        collection.distinct_categories()
    }

    /// Quotes matching the current filter, in collection order.
    pub fn candidates<'a>(&self, collection: &'a QuoteCollection) -> Vec<&'a Quote> {
        self.current.candidates(collection)
    }
}
