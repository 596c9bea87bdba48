//! Feature flags configuration
//!
//! Feature flags for optional modules (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional modules (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Session log module: write selection events to JSONL files
    pub session_log: bool,

    /// Stats tracking: toggle/rejection/mint counters in the status bar
    pub stats: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            session_log: true,
            stats: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub session_log: Option<bool>,
    pub stats: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            session_log: file.session_log.unwrap_or(true),
            stats: file.stats.unwrap_or(true),
        }
    }
}
