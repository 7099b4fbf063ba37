//! Shared test doubles for the application layer.

use crate::ports::presenter::{Notice, QuotePresenter};
use crate::ports::storage::{KeyValueStorage, StorageError};
use quotebox_domain::RandomSource;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ==================== Storage ====================

#[derive(Default)]
pub struct MockStorage {
    values: Mutex<HashMap<String, String>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MockStorage {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        storage
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Holds `entries` but reports every read as failed.
    pub fn unreadable(entries: &[(&str, &str)]) -> Self {
        let storage = Self::with(entries);
        Self {
            fail_reads: true,
            ..storage
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStorage for MockStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("device not ready".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

// ==================== Randomness ====================

/// Returns 0, 1, 2, ... modulo the candidate count.
#[derive(Default)]
pub struct SequenceRandom(AtomicUsize);

impl RandomSource for SequenceRandom {
    fn next_index(&self, upper: usize) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) % upper
    }
}

// ==================== Presenter ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Display(String, String),
    Notify(Notice),
    Categories(Vec<String>),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_display(&self) -> Option<(String, String)> {
        self.events().into_iter().rev().find_map(|event| match event {
            PresenterEvent::Display(text, category) => Some((text, category)),
            _ => None,
        })
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.events().into_iter().rev().find_map(|event| match event {
            PresenterEvent::Notify(notice) => Some(notice),
            _ => None,
        })
    }

    pub fn last_categories(&self) -> Option<Vec<String>> {
        self.events().into_iter().rev().find_map(|event| match event {
            PresenterEvent::Categories(categories) => Some(categories),
            _ => None,
        })
    }
}

impl QuotePresenter for RecordingPresenter {
    fn on_display_quote(&self, text: &str, category: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Display(text.to_string(), category.to_string()));
    }

    fn on_notify(&self, notice: &Notice) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Notify(notice.clone()));
    }

    fn on_categories_changed(&self, categories: &[String]) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Categories(categories.to_vec()));
    }
}
