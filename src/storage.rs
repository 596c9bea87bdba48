// Storage module - appends session events to disk in JSON Lines format
//
// One JSON object per line makes the log easy to stream, grep, and feed to
// jq. Each session gets its own file: degenforge-YYYYMMDD-HHMMSS-XXXX.jsonl
// Example: jq '.type' logs/degenforge-20260808-143022-a7b3.jsonl
//
// This records what happened in a session; it is never read back to restore
// selection state.

use crate::events::SessionEvent;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Writes session events to a JSON Lines file
pub struct SessionLog {
    log_dir: PathBuf,
    session_id: String,
    event_rx: mpsc::Receiver<SessionEvent>,
}

impl SessionLog {
    /// Create a new session log writer
    pub fn new(
        log_dir: PathBuf,
        session_id: String,
        event_rx: mpsc::Receiver<SessionEvent>,
    ) -> Result<Self> {
        fs::create_dir_all(&log_dir).context("Failed to create session log directory")?;

        Ok(Self {
            log_dir,
            session_id,
            event_rx,
        })
    }

    fn log_file_path(&self) -> PathBuf {
        self.log_dir
            .join(format!("degenforge-{}.jsonl", self.session_id))
    }

    /// Run the writer loop until the sending side closes
    ///
    /// Runs as its own async task; a failed write is logged and skipped so a
    /// full disk never takes down the UI.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("Session log started: {:?}", self.log_file_path());

        while let Some(event) = self.event_rx.recv().await {
            if let Err(e) = self.write_event(&event) {
                tracing::error!("Failed to write session event: {:?}", e);
            }
        }

        tracing::info!("Session log shutting down");
        Ok(())
    }

    /// Append a single event
    fn write_event(&self, event: &SessionEvent) -> Result<()> {
        let log_path = self.log_file_path();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .context("Failed to open session log file")?;

        let json = serde_json::to_string(event).context("Failed to serialize session event")?;
        writeln!(file, "{}", json).context("Failed to write to session log file")?;

        // Flush immediately so the log is complete even if the process dies
        file.flush().context("Failed to flush session log file")?;

        Ok(())
    }
}
