//! Presentation boundary port
//!
//! The widget pushes everything it wants shown through [`QuotePresenter`].
//! Implementations live in the presentation layer and can render to a
//! console, a REPL, or anything else.

use std::fmt;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A short message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Callbacks from the widget to whatever displays it
pub trait QuotePresenter: Send + Sync {
    /// Show one quote (or the empty-category sentinel).
    fn on_display_quote(&self, text: &str, category: &str);

    /// Show a transient message.
    fn on_notify(&self, notice: &Notice);

    /// The set of selectable categories changed.
    fn on_categories_changed(&self, _categories: &[String]) {}
}

/// No-op presenter for tests and headless use
pub struct NoPresenter;

impl QuotePresenter for NoPresenter {
    fn on_display_quote(&self, _text: &str, _category: &str) {}
    fn on_notify(&self, _notice: &Notice) {}
}
