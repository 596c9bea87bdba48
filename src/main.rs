// degenforge - Trait selection and mint studio for Degen NFTs
//
// A single-screen terminal app: enter a Farcaster ID, pick up to four
// eligibility-gated cosmetic traits, preview the composition, and mint.
//
// Architecture:
// - Selection core: pure state machine enforcing the selection invariants
// - Catalog / eligibility / mint: injected data and collaborator seams
//   (eligibility and minting are stubs in this build)
// - TUI (ratatui): selection screen with preview modal and toasts
// - Session log: events written to JSON Lines files for later analysis
// - Event system: an mpsc channel connects the TUI to the session log task

mod catalog;
mod cli;
mod config;
mod eligibility;
mod events;
mod logging;
mod mint;
mod selection;
mod startup;
mod storage;
mod theme;
mod tui;

use anyhow::Result;
use catalog::Catalog;
use chrono::Utc;
use cli::CliAction;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use storage::SessionLog;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generate a unique session ID for log file naming
/// Format: YYYYMMDD-HHMMSS-XXXX (timestamp + 4 random hex chars)
fn generate_session_id() -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let timestamp = Utc::now().format("%Y%m%d-%H%M%S");
    // Use RandomState to get a random value without adding a dependency
    let random = RandomState::new().build_hasher().finish();
    let short_hash = format!("{:04x}", random & 0xFFFF);

    format!("{}-{}", timestamp, short_hash)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, traits, ...)
    // If a command was handled, exit early
    let fid_override = match cli::handle_cli() {
        CliAction::Exit => return Ok(()),
        CliAction::Run { fid } => fid,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let mut config = Config::from_env();

    // --fid beats both the environment and the config file
    if let Some(fid) = fid_override {
        config.fid = Some(fid);
    }

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging with conditional output
    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In headless mode: output logs to stdout
    // File logging: optionally write to rotating log files (in addition to above)
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("degenforge={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to non-file logging
                if config.enable_tui {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer())
                        .init();
                }
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // Initialize with file layer based on TUI mode
                // File layer uses JSON format for structured log parsing
                if config.enable_tui {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer())
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                }

                Some(guard)
            }
        } else {
            // No file logging - initialize without file layer
            if config.enable_tui {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(tracing_subscriber::fmt::layer())
                    .init();
            }

            None
        };

    // Generate session ID for this run
    let session_id = generate_session_id();
    tracing::debug!("Session ID: {}", session_id);

    // Load the catalog (a broken catalog file falls back to the built-in one)
    let catalog = Catalog::load_or_builtin(config.catalog_path.as_deref());

    // Print startup banner before the TUI takes over the screen
    startup::print_startup(&config, &catalog);
    startup::log_startup(&config, &catalog);

    // Spawn the session log task (if enabled)
    // This runs in the background, writing events to disk
    let (event_tx, session_log_handle) = if config.features.session_log {
        let (tx, rx) = mpsc::channel(256);
        let log_dir = config.log_dir.clone();
        let log_session_id = session_id.clone();
        let handle = tokio::spawn(async move {
            let session_log = SessionLog::new(log_dir, log_session_id, rx)
                .expect("Failed to create session log");
            session_log.run().await
        });
        (Some(tx), Some(handle))
    } else {
        (None, None)
    };

    // Run the TUI in the main task
    // This blocks until the user quits (presses 'q')
    if config.enable_tui {
        tracing::info!("Starting TUI");
        if let Err(e) = tui::run_tui(config, catalog, log_buffer, event_tx).await {
            tracing::error!("TUI error: {:?}", e);
        }
    } else {
        // Headless mode: print the effective catalog and exit
        tracing::info!("TUI disabled, printing catalog");
        drop(event_tx);
        for entry in catalog.iter() {
            println!(
                "{:<16} {:<26} {:<20} {}",
                entry.id,
                entry.name,
                entry.tier,
                if entry.eligible { "eligible" } else { "locked" }
            );
        }
    }

    tracing::info!("Shutting down...");

    // The TUI (or the drop above) released the event sender; once the channel
    // drains, the session log task finishes on its own
    if let Some(handle) = session_log_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
