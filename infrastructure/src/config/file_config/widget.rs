//! Widget configuration from TOML (`[widget]` section)

use quotebox_application::WidgetConfig;
use serde::{Deserialize, Serialize};

/// Raw widget configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWidgetConfig {
    /// Start from the built-in quotes when nothing is stored yet
    pub seed_defaults: bool,
    /// Show the session's last viewed quote on start
    pub resume_last_viewed: bool,
    /// Fixed seed for reproducible random selection
    pub random_seed: Option<u64>,
}

impl Default for FileWidgetConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            resume_last_viewed: true,
            random_seed: None,
        }
    }
}

impl FileWidgetConfig {
    pub fn to_widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            seed_defaults: self.seed_defaults,
            resume_last_viewed: self.resume_last_viewed,
            ..WidgetConfig::default()
        }
    }
}
