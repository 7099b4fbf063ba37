//! Quote widget use case
//!
//! [`QuoteWidget`] is the single entry point the presentation layer talks
//! to. It wires the quote store, the filter controller, the persistence
//! adapter, the random source and the presenter together once, at
//! construction.
//!
//! # Flow
//!
//! 1. **Start** - load stored quotes (or keep the defaults), restore the
//!    filter, publish categories, show a quote
//! 2. **Inbound calls** - `user_*` methods mutate state; every mutation is
//!    flushed to storage by the store
//! 3. **Outbound callbacks** - results are pushed to the [`QuotePresenter`]
//!
//! # Usage
//!
//! ```ignore
//! let persistence = QuotePersistence::new(durable, session);
//! let mut widget = QuoteWidget::new(persistence, random, presenter, WidgetConfig::default());
//! widget.start();
//! widget.user_submits_new_quote("Test quote", "Cats")?;
//! widget.user_requests_random();
//! ```

use super::filter_controller::FilterController;
use super::quote_store::QuoteStore;
use crate::config::WidgetConfig;
use crate::persistence::QuotePersistence;
use crate::ports::presenter::{Notice, QuotePresenter};
use quotebox_domain::{
    CategoryFilter, DomainError, ImportOutcome, Quote, QuoteId, RandomSource, StoredQuote,
    default_quotes, export_document, import_document, pick_random,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Text shown when the current filter matches nothing.
pub const EMPTY_SENTINEL_TEXT: &str = "No quotes available for this category.";
/// Category shown alongside [`EMPTY_SENTINEL_TEXT`].
pub const EMPTY_SENTINEL_CATEGORY: &str = "Empty";

pub struct QuoteWidget {
    store: QuoteStore,
    filter: FilterController,
    persistence: Arc<QuotePersistence>,
    random: Arc<dyn RandomSource>,
    presenter: Arc<dyn QuotePresenter>,
    config: WidgetConfig,
    last_viewed: Option<Quote>,
}

impl QuoteWidget {
    pub fn new(
        persistence: QuotePersistence,
        random: Arc<dyn RandomSource>,
        presenter: Arc<dyn QuotePresenter>,
        config: WidgetConfig,
    ) -> Self {
        let persistence = Arc::new(persistence);
        let initial = if config.seed_defaults {
            default_quotes()
        } else {
            Vec::new()
        };
        Self {
            store: QuoteStore::new(persistence.clone(), initial),
            filter: FilterController::new(persistence.clone()),
            persistence,
            random,
            presenter,
            config,
            last_viewed: None,
        }
    }

    /// Bring the widget up from storage and show the first quote.
    pub fn start(&mut self) {
        if !self.store.load() {
            debug!(
                "No stored quotes, starting with {} built-in quotes",
                self.store.list().len()
            );
        }
        self.filter.restore(self.store.collection());
        self.publish_categories();

        let resumed = if self.config.resume_last_viewed {
            self.resumable_last_viewed()
        } else {
            None
        };
        match resumed {
            Some(quote) => {
                if self.config.display_on_start {
                    debug!("Resuming last viewed quote");
                    self.presenter
                        .on_display_quote(quote.text(), quote.category());
                }
                self.last_viewed = Some(quote);
            }
            None if self.config.display_on_start => {
                self.user_requests_random();
            }
            None => {}
        }
        info!(
            "Quote widget started with {} quotes, filter '{}'",
            self.store.list().len(),
            self.filter.current()
        );
    }

    // ==================== Inbound calls ====================

    /// Show a random quote from the current candidates.
    ///
    /// Returns the displayed quote, or `None` when the sentinel was shown.
    pub fn user_requests_random(&mut self) -> Option<Quote> {
        let picked = {
            let candidates = self.filter.candidates(self.store.collection());
            if candidates.is_empty() {
                None
            } else {
                match pick_random(&candidates, self.random.as_ref()) {
                    Ok(quote) => Some(Quote::clone(quote)),
                    Err(e) => {
                        warn!("Random selection failed: {}", e);
                        None
                    }
                }
            }
        };

        match picked {
            Some(quote) => {
                self.show(&quote);
                Some(quote)
            }
            None => {
                self.presenter
                    .on_display_quote(EMPTY_SENTINEL_TEXT, EMPTY_SENTINEL_CATEGORY);
                None
            }
        }
    }

    /// Change the category filter and show a quote from the new selection.
    pub fn user_selects_filter(&mut self, value: &str) -> CategoryFilter {
        let filter = self.filter.set(value, self.store.collection()).clone();
        self.user_requests_random();
        filter
    }

    pub fn user_submits_new_quote(
        &mut self,
        text: &str,
        category: &str,
    ) -> Result<QuoteId, DomainError> {
        let id = match self.store.add(text, category) {
            Ok(id) => id,
            Err(e) => {
                self.presenter
                    .on_notify(&Notice::error("Please enter both quote text and category!"));
                return Err(e);
            }
        };

        self.after_change();
        self.presenter
            .on_notify(&Notice::success("Quote added successfully!"));
        if let Some(quote) = self.store.get(id).cloned() {
            self.show(&quote);
        }
        Ok(id)
    }

    /// Remove a quote. Unknown ids leave everything untouched.
    pub fn user_removes_quote(&mut self, id: QuoteId) -> Option<Quote> {
        let Some(removed) = self.store.remove(id) else {
            self.presenter
                .on_notify(&Notice::info(format!("No quote with id {}", id)));
            return None;
        };

        self.after_change();
        self.presenter
            .on_notify(&Notice::success("Quote removed successfully!"));
        self.user_requests_random();
        Some(removed)
    }

    /// Edit a quote. Returns `Ok(false)` for an unknown id.
    pub fn user_edits_quote(
        &mut self,
        id: QuoteId,
        text: &str,
        category: &str,
    ) -> Result<bool, DomainError> {
        let previous = match self.store.edit(id, text, category) {
            Ok(previous) => previous,
            Err(e) => {
                self.presenter
                    .on_notify(&Notice::error("Please enter both quote text and category!"));
                return Err(e);
            }
        };

        if previous.is_none() {
            self.presenter
                .on_notify(&Notice::info(format!("No quote with id {}", id)));
            return Ok(false);
        }

        self.after_change();
        self.presenter
            .on_notify(&Notice::success("Quote updated successfully!"));
        self.user_requests_random();
        Ok(true)
    }

    /// Serialize the whole collection as an interchange document.
    pub fn user_requests_export(&self) -> Vec<u8> {
        let quotes = self.store.collection().snapshot();
        debug!("Exporting {} quotes", quotes.len());
        export_document(&quotes)
    }

    /// Merge an interchange document into the collection.
    ///
    /// A malformed document is reported and changes nothing.
    pub fn user_submits_import_document(
        &mut self,
        bytes: &[u8],
    ) -> Result<ImportOutcome, DomainError> {
        let outcome = match import_document(bytes) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.presenter
                    .on_notify(&Notice::error(format!("Import failed: {}", e)));
                return Err(e);
            }
        };

        if outcome.accepted.is_empty() {
            self.presenter.on_notify(&Notice::info(format!(
                "No valid quotes found ({} rejected)",
                outcome.rejected
            )));
            return Ok(outcome);
        }

        self.store.merge(outcome.accepted.clone());
        self.after_change();

        let mut message = format!("Imported {} quotes successfully!", outcome.accepted_count());
        if outcome.rejected > 0 {
            message.push_str(&format!(" ({} rejected)", outcome.rejected));
        }
        info!("{}", message);
        self.presenter.on_notify(&Notice::success(message));
        Ok(outcome)
    }

    // ==================== Read access ====================

    pub fn quotes(&self) -> &[StoredQuote] {
        self.store.list()
    }

    pub fn categories(&self) -> Vec<String> {
        self.filter.distinct_categories(self.store.collection())
    }

    pub fn current_filter(&self) -> &CategoryFilter {
        self.filter.current()
    }

    pub fn candidates(&self) -> Vec<&Quote> {
        self.filter.candidates(self.store.collection())
    }

    pub fn last_viewed(&self) -> Option<&Quote> {
        self.last_viewed.as_ref()
    }

    // ==================== Internals ====================

    /// The session's last viewed quote, if it is still a candidate.
    ///
    /// A quote that was removed or no longer passes the restored filter is
    /// dropped from the session store.
    fn resumable_last_viewed(&self) -> Option<Quote> {
        let quote = self.persistence.load_last_viewed()?;
        let candidates = self.filter.candidates(self.store.collection());
        if candidates.contains(&&quote) {
            return Some(quote);
        }
        debug!("Last viewed quote is no longer a candidate, not resuming");
        self.persistence.clear_last_viewed();
        None
    }

    fn show(&mut self, quote: &Quote) {
        self.presenter
            .on_display_quote(quote.text(), quote.category());
        self.persistence.save_last_viewed(quote);
        self.last_viewed = Some(quote.clone());
    }

    fn after_change(&mut self) {
        self.filter.refresh(self.store.collection());
        self.publish_categories();
    }

    fn publish_categories(&self) {
        self.presenter.on_categories_changed(&self.categories());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FILTER_KEY, LAST_VIEWED_KEY, QUOTES_KEY};
    use crate::ports::presenter::NoticeLevel;
    use crate::test_support::{MockStorage, RecordingPresenter, SequenceRandom};

    struct Harness {
        widget: QuoteWidget,
        durable: Arc<MockStorage>,
        session: Arc<MockStorage>,
        presenter: Arc<RecordingPresenter>,
    }

    fn harness_with(durable: MockStorage, session: MockStorage, config: WidgetConfig) -> Harness {
        let durable = Arc::new(durable);
        let session = Arc::new(session);
        let presenter = Arc::new(RecordingPresenter::default());
        let widget = QuoteWidget::new(
            QuotePersistence::new(durable.clone(), session.clone()),
            Arc::new(SequenceRandom::default()),
            presenter.clone(),
            config,
        );
        Harness {
            widget,
            durable,
            session,
            presenter,
        }
    }

    fn empty_harness() -> Harness {
        let mut h = harness_with(
            MockStorage::default(),
            MockStorage::default(),
            WidgetConfig::empty(),
        );
        h.widget.start();
        h
    }

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    fn texts(widget: &QuoteWidget) -> Vec<String> {
        widget.quotes().iter().map(|q| q.quote.text().to_string()).collect()
    }

    #[test]
    fn test_start_seeds_defaults_without_snapshot() {
        let mut h = harness_with(
            MockStorage::default(),
            MockStorage::default(),
            WidgetConfig::default(),
        );
        h.widget.start();

        assert_eq!(h.widget.quotes().len(), 10);
        assert_eq!(h.presenter.last_categories().unwrap().len(), 10);
        assert!(h.presenter.last_display().is_some());
    }

    #[test]
    fn test_start_keeps_defaults_on_corrupt_snapshot() {
        let mut h = harness_with(
            MockStorage::with(&[(QUOTES_KEY, "][")]),
            MockStorage::default(),
            WidgetConfig::default(),
        );
        h.widget.start();
        assert_eq!(h.widget.quotes().len(), 10);
    }

    #[test]
    fn test_start_keeps_defaults_on_all_invalid_snapshot() {
        for raw in ["[1,2,3]", r#"[{"text":"","category":""}]"#] {
            let mut h = harness_with(
                MockStorage::with(&[(QUOTES_KEY, raw)]),
                MockStorage::default(),
                WidgetConfig::default(),
            );
            h.widget.start();
            assert_eq!(h.widget.quotes().len(), 10, "stored {}", raw);

            h.widget.user_submits_new_quote("Test quote", "Cats").unwrap();
            let saved: Vec<Quote> =
                serde_json::from_str(&h.durable.value(QUOTES_KEY).unwrap()).unwrap();
            assert_eq!(saved.len(), 11);
        }
    }

    #[test]
    fn test_start_loads_snapshot_and_filter() {
        let mut h = harness_with(
            MockStorage::with(&[
                (
                    QUOTES_KEY,
                    r#"[{"text":"a","category":"Life"},{"text":"b","category":"Cats"}]"#,
                ),
                (FILTER_KEY, "Cats"),
            ]),
            MockStorage::default(),
            WidgetConfig::default(),
        );
        h.widget.start();

        assert_eq!(texts(&h.widget), vec!["a", "b"]);
        assert_eq!(h.widget.current_filter().as_str(), "Cats");
        assert_eq!(
            h.presenter.last_display(),
            Some(("b".to_string(), "Cats".to_string()))
        );
    }

    #[test]
    fn test_start_resumes_last_viewed() {
        let mut h = harness_with(
            MockStorage::with(&[(
                QUOTES_KEY,
                r#"[{"text":"other","category":"New"},{"text":"seen","category":"Old"}]"#,
            )]),
            MockStorage::with(&[(LAST_VIEWED_KEY, r#"{"text":"seen","category":"Old"}"#)]),
            WidgetConfig::default(),
        );
        h.widget.start();

        assert_eq!(h.widget.last_viewed(), Some(&quote("seen", "Old")));
        assert_eq!(
            h.presenter.last_display(),
            Some(("seen".to_string(), "Old".to_string()))
        );
    }

    #[test]
    fn test_start_skips_removed_last_viewed() {
        let mut h = harness_with(
            MockStorage::with(&[(QUOTES_KEY, r#"[{"text":"a","category":"Life"}]"#)]),
            MockStorage::with(&[(LAST_VIEWED_KEY, r#"{"text":"gone","category":"Old"}"#)]),
            WidgetConfig::default(),
        );
        h.widget.start();

        assert_eq!(h.widget.last_viewed(), Some(&quote("a", "Life")));
        assert_eq!(
            h.presenter.last_display(),
            Some(("a".to_string(), "Life".to_string()))
        );
        let saved: Quote =
            serde_json::from_str(&h.session.value(LAST_VIEWED_KEY).unwrap()).unwrap();
        assert_eq!(saved, quote("a", "Life"));
    }

    #[test]
    fn test_start_skips_last_viewed_outside_filter() {
        let config = WidgetConfig {
            display_on_start: false,
            ..WidgetConfig::default()
        };
        let mut h = harness_with(
            MockStorage::with(&[
                (
                    QUOTES_KEY,
                    r#"[{"text":"a","category":"Life"},{"text":"b","category":"Cats"}]"#,
                ),
                (FILTER_KEY, "Cats"),
            ]),
            MockStorage::with(&[(LAST_VIEWED_KEY, r#"{"text":"a","category":"Life"}"#)]),
            config,
        );
        h.widget.start();

        assert_eq!(h.widget.last_viewed(), None);
        assert!(h.session.value(LAST_VIEWED_KEY).is_none());
        assert_eq!(h.widget.user_requests_random(), Some(quote("b", "Cats")));
    }

    #[test]
    fn test_start_without_display_stays_quiet() {
        let config = WidgetConfig {
            display_on_start: false,
            ..WidgetConfig::default()
        };
        let mut h = harness_with(MockStorage::default(), MockStorage::default(), config);
        h.widget.start();

        assert!(h.presenter.last_display().is_none());
        assert!(h.presenter.last_categories().is_some());
        assert!(h.session.value(LAST_VIEWED_KEY).is_none());
    }

    #[test]
    fn test_empty_store_shows_sentinel() {
        let mut h = empty_harness();

        assert_eq!(h.widget.user_requests_random(), None);
        assert_eq!(
            h.presenter.last_display(),
            Some((
                EMPTY_SENTINEL_TEXT.to_string(),
                EMPTY_SENTINEL_CATEGORY.to_string()
            ))
        );
    }

    #[test]
    fn test_add_scenario() {
        let mut h = empty_harness();

        h.widget.user_submits_new_quote("Test quote", "Cats").unwrap();

        assert_eq!(h.widget.quotes().len(), 1);
        assert_eq!(h.widget.categories(), vec!["Cats"]);
        assert_eq!(h.presenter.last_categories(), Some(vec!["Cats".to_string()]));
        assert_eq!(
            h.presenter.last_notice(),
            Some(Notice::success("Quote added successfully!"))
        );
        assert_eq!(
            h.presenter.last_display(),
            Some(("Test quote".to_string(), "Cats".to_string()))
        );
        assert!(h.session.value(LAST_VIEWED_KEY).is_some());
        assert!(h.durable.value(QUOTES_KEY).unwrap().contains("Test quote"));
    }

    #[test]
    fn test_add_invalid_reports_and_keeps_state() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("kept", "Life").unwrap();

        assert_eq!(
            h.widget.user_submits_new_quote("", "x"),
            Err(DomainError::Validation { field: "text" })
        );
        assert_eq!(
            h.widget.user_submits_new_quote("x", ""),
            Err(DomainError::Validation { field: "category" })
        );

        assert_eq!(texts(&h.widget), vec!["kept"]);
        assert_eq!(h.presenter.last_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_random_respects_filter() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("a", "Life").unwrap();
        h.widget.user_submits_new_quote("b", "Cats").unwrap();
        h.widget.user_submits_new_quote("c", "Life").unwrap();
        h.widget.user_selects_filter("Life");

        for _ in 0..6 {
            let quote = h.widget.user_requests_random().unwrap();
            assert_eq!(quote.category(), "Life");
        }
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("a", "Life").unwrap();

        // Unknown categories coerce, so an empty candidate set only arises
        // when the collection itself is empty.
        assert_eq!(h.widget.user_selects_filter("Dogs"), CategoryFilter::All);
        assert_eq!(h.durable.value(FILTER_KEY).as_deref(), Some("all"));
        assert_eq!(h.widget.candidates().len(), 1);
    }

    #[test]
    fn test_remove_last_of_category_resets_filter() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("a", "Life").unwrap();
        let cats = h.widget.user_submits_new_quote("b", "Cats").unwrap();
        h.widget.user_selects_filter("Cats");

        assert_eq!(h.widget.user_removes_quote(cats), Some(quote("b", "Cats")));

        assert!(h.widget.current_filter().is_all());
        assert_eq!(h.durable.value(FILTER_KEY).as_deref(), Some("all"));
        assert_eq!(h.widget.categories(), vec!["Life"]);
    }

    #[test]
    fn test_remove_unknown_id_is_reported_not_applied() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("a", "Life").unwrap();

        assert_eq!(h.widget.user_removes_quote(QuoteId::new(77)), None);
        assert_eq!(texts(&h.widget), vec!["a"]);
        assert_eq!(h.presenter.last_notice().unwrap().level, NoticeLevel::Info);
    }

    #[test]
    fn test_edit_changes_category() {
        let mut h = empty_harness();
        let id = h.widget.user_submits_new_quote("a", "Life").unwrap();

        assert_eq!(h.widget.user_edits_quote(id, "a2", "Cats"), Ok(true));
        assert_eq!(h.widget.categories(), vec!["Cats"]);
        assert_eq!(h.widget.user_edits_quote(QuoteId::new(9), "x", "y"), Ok(false));
        assert!(h.widget.user_edits_quote(id, "", "Cats").is_err());
        assert_eq!(texts(&h.widget), vec!["a2"]);
    }

    #[test]
    fn test_import_merges_after_existing() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("existing", "Life").unwrap();

        let doc = br#"[
            {"text": "new", "category": "Cats"},
            {"text": "", "category": "Cats"},
            {"category": "Cats"}
        ]"#;
        let outcome = h.widget.user_submits_import_document(doc).unwrap();

        assert_eq!(outcome.accepted_count(), 1);
        assert_eq!(outcome.rejected, 2);
        assert_eq!(texts(&h.widget), vec!["existing", "new"]);
        assert_eq!(h.widget.categories(), vec!["Life", "Cats"]);
        assert_eq!(
            h.presenter.last_notice(),
            Some(Notice::success("Imported 1 quotes successfully! (2 rejected)"))
        );
        assert!(h.durable.value(QUOTES_KEY).unwrap().contains("new"));
    }

    #[test]
    fn test_import_malformed_changes_nothing() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("existing", "Life").unwrap();

        let err = h
            .widget
            .user_submits_import_document(br#"{"text":"a"}"#)
            .unwrap_err();

        assert!(matches!(err, DomainError::MalformedDocument(_)));
        assert_eq!(texts(&h.widget), vec!["existing"]);
        assert_eq!(h.presenter.last_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_export_then_import_into_fresh_store() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("Test quote", "Cats").unwrap();
        let document = h.widget.user_requests_export();

        let mut fresh = empty_harness();
        fresh.widget.user_submits_import_document(&document).unwrap();

        assert_eq!(fresh.widget.quotes().len(), 1);
        assert_eq!(fresh.widget.quotes()[0].quote, quote("Test quote", "Cats"));
    }

    #[test]
    fn test_state_survives_restart() {
        let mut h = empty_harness();
        h.widget.user_submits_new_quote("a", "Life").unwrap();
        h.widget.user_submits_new_quote("b", "Cats").unwrap();
        h.widget.user_selects_filter("Cats");

        let durable = h.durable.value(QUOTES_KEY).unwrap();
        let filter = h.durable.value(FILTER_KEY).unwrap();
        let mut restarted = harness_with(
            MockStorage::with(&[(QUOTES_KEY, durable.as_str()), (FILTER_KEY, filter.as_str())]),
            MockStorage::default(),
            WidgetConfig::default(),
        );
        restarted.widget.start();

        assert_eq!(texts(&restarted.widget), vec!["a", "b"]);
        assert_eq!(restarted.widget.current_filter().as_str(), "Cats");
    }
}
