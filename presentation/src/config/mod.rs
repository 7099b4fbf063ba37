//! Presentation-level configuration
//!
//! Configuration for console output.

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print quotes and listings as JSON
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
