//! Configuration for the studio
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/degenforge/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Preset Farcaster ID; when set, the FID entry field is skipped
    pub fid: Option<String>,

    /// Theme name: "auto", "dracula", "gruvbox"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Whether to enable the TUI (disabled prints the catalog and exits)
    pub enable_tui: bool,

    /// Optional path to a TOML trait catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Invalidate a generated preview whenever the selection changes
    ///
    /// Off by default: the shipped behavior lets a stale preview be minted
    /// without regenerating.
    pub reset_preview_on_change: bool,

    /// Directory for session event logs
    pub log_dir: PathBuf,

    /// Feature flags for optional modules
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fid: None,
            theme: "auto".to_string(),
            use_theme_background: true,
            enable_tui: true,
            catalog_path: None,
            reset_preview_on_change: false,
            log_dir: PathBuf::from("./logs"),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub fid: Option<String>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub catalog_path: Option<String>,
    pub reset_preview_on_change: Option<bool>,
    pub log_dir: Option<String>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/degenforge/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("degenforge").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// If config file exists but cannot be parsed. This is intentional -
    /// a broken config should fail fast with a clear error, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, delete the file and restart degenforge.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file)
    }

    /// Merge env vars over a loaded file config (split out for tests)
    fn from_sources(file: FileConfig) -> Self {
        // FID: env > file > none (entered interactively)
        let fid = std::env::var("DEGENFORGE_FID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(file.fid);

        // Theme: env > file > default
        let theme = std::env::var("DEGENFORGE_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "auto".to_string());

        // Use theme background: file > default (true = use theme's bg color)
        let use_theme_background = file.use_theme_background.unwrap_or(true);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("DEGENFORGE_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Catalog path: env > file > built-in catalog
        let catalog_path = std::env::var("DEGENFORGE_CATALOG")
            .ok()
            .or(file.catalog_path)
            .map(PathBuf::from);

        // Stale-preview behavior: env > file > default (keep stale previews)
        let reset_preview_on_change = std::env::var("DEGENFORGE_RESET_PREVIEW")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .ok()
            .or(file.reset_preview_on_change)
            .unwrap_or(false);

        // Log directory: env > file > default
        let log_dir = std::env::var("DEGENFORGE_LOG_DIR")
            .ok()
            .or(file.log_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./logs"));

        // Subconfig loading with from_file() helpers
        let features = Features::from_file(file.features);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            fid,
            theme,
            use_theme_background,
            enable_tui,
            catalog_path,
            reset_preview_on_change,
            log_dir,
            features,
            logging,
        }
    }
}
