//! Application-level configuration.
//!
//! This module provides configuration types that control how the widget
//! behaves independently of where its data is stored.

/// Widget behavior configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Start from the built-in quotes when storage holds no snapshot.
    pub seed_defaults: bool,
    /// Show a quote as part of `start`.
    pub display_on_start: bool,
    /// Show the last viewed quote of the session on start instead of a new
    /// random one.
    pub resume_last_viewed: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            display_on_start: true,
            resume_last_viewed: true,
        }
    }
}

impl WidgetConfig {
    /// Configuration for an initially empty widget.
    pub fn empty() -> Self {
        Self {
            seed_defaults: false,
            ..Self::default()
        }
    }
}
