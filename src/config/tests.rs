//! Configuration tests
//!
//! The round-trip tests are compile-time guards: when a field is added to
//! `Config`, they fail until `FileConfig` and `to_toml()` know about it too.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the generated template parses back as a FileConfig.
/// This catches TOML syntax errors in the template string.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Round-trip with every optional value populated
#[test]
fn test_config_roundtrip_with_optionals() {
    let config = Config {
        fid: Some("3621".to_string()),
        catalog_path: Some(std::path::PathBuf::from("/tmp/catalog.toml")),
        reset_preview_on_change: true,
        ..Default::default()
    };
    let toml_str = config.to_toml();

    let parsed: FileConfig = toml::from_str(&toml_str).expect("template should parse");
    assert_eq!(parsed.fid.as_deref(), Some("3621"));
    assert_eq!(parsed.catalog_path.as_deref(), Some("/tmp/catalog.toml"));
    assert_eq!(parsed.reset_preview_on_change, Some(true));
}

/// The template values survive the parse unchanged
#[test]
fn test_template_preserves_defaults() {
    let defaults = Config::default();
    let parsed: FileConfig = toml::from_str(&defaults.to_toml()).unwrap();

    assert_eq!(parsed.theme.as_deref(), Some("auto"));
    assert_eq!(parsed.use_theme_background, Some(true));
    assert_eq!(parsed.reset_preview_on_change, Some(false));
    // Commented-out optionals stay absent
    assert!(parsed.fid.is_none());
    assert!(parsed.catalog_path.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Subconfig merge tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_features_missing_section_uses_defaults() {
    let features = Features::from_file(None);
    assert!(features.session_log);
    assert!(features.stats);
}

#[test]
fn test_features_partial_section_merges() {
    let file = FileFeatures {
        session_log: Some(false),
        stats: None,
    };
    let features = Features::from_file(Some(file));
    assert!(!features.session_log);
    assert!(features.stats, "unset fields keep their defaults");
}

#[test]
fn test_logging_rotation_parsing() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("never"), LogRotation::Never);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}

#[test]
fn test_logging_from_file_merges_over_defaults() {
    let file = FileLogging {
        level: Some("debug".to_string()),
        file_enabled: Some(true),
        file_dir: None,
        file_rotation: Some("never".to_string()),
        file_prefix: None,
    };
    let logging = LoggingConfig::from_file(Some(file));

    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Never);
    assert_eq!(logging.file_prefix, "degenforge");
    assert_eq!(logging.file_dir, std::path::PathBuf::from("./logs/trace"));
}
