//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize the optional top-level values that are only written when set
    fn optional_values_to_toml(&self) -> String {
        let mut output = String::new();

        match &self.fid {
            Some(fid) => output.push_str(&format!("fid = \"{}\"\n", fid)),
            None => output.push_str("# fid = \"3621\"\n"),
        }

        match &self.catalog_path {
            Some(path) => output.push_str(&format!("catalog_path = \"{}\"\n", path.display())),
            None => output.push_str("# catalog_path = \"~/.config/degenforge/catalog.toml\"\n"),
        }

        output
    }

    /// Generate the config file contents
    pub fn to_toml(&self) -> String {
        format!(
            r#"# degenforge configuration

# Theme: auto, dracula, gruvbox
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Invalidate a generated preview when the selection changes afterwards.
# false matches the shipped behavior: a stale preview stays mintable.
reset_preview_on_change = {reset_preview}

# Log directory for session event files
log_dir = "{log_dir}"

# Preset Farcaster ID (skips the entry field) and custom trait catalog
{optional}
# Feature flags
[features]
session_log = {session_log}
stats = {stats}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            reset_preview = self.reset_preview_on_change,
            log_dir = self.log_dir.display(),
            optional = self.optional_values_to_toml(),
            session_log = self.features.session_log,
            stats = self.features.stats,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
