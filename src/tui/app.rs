// TUI application state
//
// App owns everything the selection screen needs: the selection core, the
// FID entry, focus, the active modal, the toast, and session counters.
// The preview surface and all components render from this state and report
// intent back through App methods; nothing below App mutates state.

use super::components::{Toast, TraitListPanel};
use super::input::InputHandler;
use super::modal::Modal;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::eligibility::StaticOracle;
use crate::events::{RejectReason, SessionEvent, Stats};
use crate::logging::LogBuffer;
use crate::mint::{MintService, StubMinter};
use crate::selection::{
    MintOutcome, PreviewOutcome, Selection, SelectionOptions, ToggleOutcome, MAX_TRAITS,
};
use crate::theme::Theme;
use chrono::Utc;
use tokio::sync::mpsc;

/// Longest FID we accept in the entry field
const MAX_FID_LEN: usize = 12;

/// Which element on the selection screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Fid,
    Traits,
}

/// Main application state for the TUI
pub struct App {
    /// The selection state core (owns the catalog)
    pub selection: Selection,

    /// Identifier entry buffer
    pub fid: String,

    /// FID was preset via config/CLI; the entry field is read-only
    pub fid_locked: bool,

    /// Which element receives navigation keys
    pub focus: Focus,

    /// Trait list cursor/viewport state
    pub trait_list: TraitListPanel,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Session counters
    pub stats: Stats,

    /// Whether the status bar shows counters
    pub stats_enabled: bool,

    /// Current color theme
    pub theme: Theme,

    /// Paint the theme background over the whole frame
    pub use_theme_background: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Mint backend (stub in this build)
    minter: Box<dyn MintService>,

    /// Session event sink (None when session logging is disabled)
    event_tx: Option<mpsc::Sender<SessionEvent>>,
}

impl App {
    /// Create app state from config and a loaded catalog
    pub fn with_config(
        config: &Config,
        catalog: Catalog,
        log_buffer: LogBuffer,
        event_tx: Option<mpsc::Sender<SessionEvent>>,
    ) -> Self {
        let selection = Selection::new(
            catalog,
            Box::new(StaticOracle),
            SelectionOptions {
                reset_preview_on_change: config.reset_preview_on_change,
            },
        );

        let (fid, fid_locked) = match &config.fid {
            Some(fid) => (fid.clone(), true),
            None => (String::new(), false),
        };

        // Start on the entry field unless the FID is already known
        let focus = if fid_locked { Focus::Traits } else { Focus::Fid };

        Self {
            selection,
            fid,
            fid_locked,
            focus,
            trait_list: TraitListPanel::new(),
            modal: None,
            toast: None,
            stats: Stats::default(),
            stats_enabled: config.features.stats,
            theme: Theme::by_name(&config.theme),
            use_theme_background: config.use_theme_background,
            should_quit: false,
            log_buffer,
            input_handler: InputHandler::default(),
            minter: Box::new(StubMinter),
            event_tx,
        }
    }

    // ── Input plumbing ───────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Cycle focus between the FID field and the trait list
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            // A locked FID never takes focus
            Focus::Fid => Focus::Traits,
            Focus::Traits if self.fid_locked => Focus::Traits,
            Focus::Traits => Focus::Fid,
        };
    }

    // ── FID entry ────────────────────────────────────────────────────────

    /// Append a digit to the FID buffer
    pub fn push_fid_char(&mut self, c: char) {
        if self.fid_locked {
            return;
        }
        if c.is_ascii_digit() && self.fid.len() < MAX_FID_LEN {
            self.fid.push(c);
        }
    }

    /// Delete the last digit of the FID buffer
    pub fn pop_fid_char(&mut self) {
        if !self.fid_locked {
            self.fid.pop();
        }
    }

    // ── Selection actions ────────────────────────────────────────────────

    /// Toggle the trait under the list cursor
    pub fn toggle_under_cursor(&mut self) {
        let Some(id) = self
            .selection
            .catalog()
            .iter()
            .nth(self.trait_list.cursor)
            .map(|t| t.id.clone())
        else {
            return;
        };

        match self.selection.toggle(&self.fid, &id) {
            ToggleOutcome::Added => {
                self.emit(SessionEvent::TraitSelected {
                    timestamp: Utc::now(),
                    trait_id: id,
                    selected_count: self.selection.selected_count(),
                });
            }
            ToggleOutcome::Removed => {
                self.emit(SessionEvent::TraitRemoved {
                    timestamp: Utc::now(),
                    trait_id: id,
                    selected_count: self.selection.selected_count(),
                });
            }
            ToggleOutcome::Ineligible => {
                // The row is inert: no warning, just a session log entry
                self.emit(SessionEvent::SelectionRejected {
                    timestamp: Utc::now(),
                    trait_id: id,
                    reason: RejectReason::Ineligible,
                });
            }
            ToggleOutcome::LimitReached => {
                self.show_toast(Toast::warning(format!(
                    "Maximum {} traits allowed",
                    MAX_TRAITS
                )));
                self.emit(SessionEvent::SelectionRejected {
                    timestamp: Utc::now(),
                    trait_id: id,
                    reason: RejectReason::LimitReached,
                });
            }
            ToggleOutcome::UnknownTrait => {
                // Cursor always points into the catalog
                tracing::debug!("toggle on unknown trait id {}", id);
            }
        }
    }

    /// Generate the preview and open the preview surface
    pub fn generate_preview(&mut self) {
        match self.selection.generate_preview(&self.fid) {
            PreviewOutcome::MissingFid => {
                self.show_toast(Toast::warning("Please enter your FID"));
                self.emit(SessionEvent::ActionRejected {
                    timestamp: Utc::now(),
                    reason: RejectReason::MissingFid,
                });
            }
            PreviewOutcome::EmptySelection => {
                self.show_toast(Toast::warning("Please select at least one trait"));
                self.emit(SessionEvent::ActionRejected {
                    timestamp: Utc::now(),
                    reason: RejectReason::EmptySelection,
                });
            }
            PreviewOutcome::Opened => {
                let trait_ids = self
                    .selection
                    .selected_traits()
                    .iter()
                    .map(|t| t.id.clone())
                    .collect();
                self.modal = Some(Modal::Preview);
                self.emit(SessionEvent::PreviewGenerated {
                    timestamp: Utc::now(),
                    fid: self.fid.clone(),
                    trait_ids,
                });
            }
        }
    }

    /// Confirm the mint (from the preview surface, or 'm' on the screen)
    pub fn confirm_mint(&mut self) {
        match self.selection.confirm_mint(&self.fid) {
            MintOutcome::PreviewRequired => {
                self.show_toast(Toast::warning("Generate a preview first"));
                self.emit(SessionEvent::ActionRejected {
                    timestamp: Utc::now(),
                    reason: RejectReason::PreviewRequired,
                });
            }
            MintOutcome::Submitted { fid, .. } => {
                self.modal = None;

                let traits = self.selection.selected_traits();
                match self.minter.mint(&fid, &traits) {
                    Ok(receipt) => {
                        self.show_toast(Toast::success(format!(
                            "Minting your Degen NFT... FID #{} with {} traits",
                            receipt.fid, receipt.trait_count
                        )));
                        self.emit(SessionEvent::MintSubmitted {
                            timestamp: receipt.submitted_at,
                            fid: receipt.fid,
                            trait_count: receipt.trait_count,
                        });
                    }
                    Err(e) => {
                        tracing::error!("Mint submission failed: {:#}", e);
                        self.show_toast(Toast::warning("Mint failed, see logs"));
                    }
                }
            }
        }
    }

    /// Dismiss the preview surface without minting
    pub fn dismiss_preview(&mut self) {
        self.selection.close_preview();
        self.modal = None;
        self.emit(SessionEvent::PreviewDismissed {
            timestamp: Utc::now(),
        });
    }

    // ── Toasts and events ────────────────────────────────────────────────

    /// Show a toast notification (replaces any active toast)
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Clear the toast once its display time is up
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Record an event in the counters and forward it to the session log
    fn emit(&mut self, event: SessionEvent) {
        self.stats.record(&event);

        if let Some(tx) = &self.event_tx {
            // try_send: the UI never blocks on a slow disk
            if let Err(e) = tx.try_send(event) {
                tracing::warn!("Session event dropped: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = Config::default();
        App::with_config(&config, Catalog::builtin(), LogBuffer::new(), None)
    }

    fn test_app_with_fid() -> App {
        let config = Config {
            fid: Some("3621".to_string()),
            ..Default::default()
        };
        App::with_config(&config, Catalog::builtin(), LogBuffer::new(), None)
    }

    #[test]
    fn preset_fid_locks_entry_and_focuses_traits() {
        let mut app = test_app_with_fid();
        assert_eq!(app.focus, Focus::Traits);
        assert_eq!(app.fid, "3621");

        app.push_fid_char('9');
        app.pop_fid_char();
        assert_eq!(app.fid, "3621", "locked FID is immutable");

        app.focus_next();
        assert_eq!(app.focus, Focus::Traits, "focus never reaches a locked FID");
    }

    #[test]
    fn fid_entry_accepts_digits_only() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::Fid);

        for c in ['3', 'a', '6', '!', '2', '1'] {
            app.push_fid_char(c);
        }
        assert_eq!(app.fid, "3621");

        app.pop_fid_char();
        assert_eq!(app.fid, "362");
    }

    #[test]
    fn preview_then_mint_closes_modal_and_counts() {
        let mut app = test_app_with_fid();

        // Cursor starts on "orb" (first catalog entry)
        app.toggle_under_cursor();
        assert_eq!(app.selection.selected_count(), 1);

        app.generate_preview();
        assert_eq!(app.modal, Some(Modal::Preview));
        assert!(app.selection.preview_open());

        app.confirm_mint();
        assert_eq!(app.modal, None);
        assert!(!app.selection.preview_open());
        assert_eq!(app.stats.mints_submitted, 1);
        assert!(app.toast.is_some(), "mint success shows a toast");
    }

    #[test]
    fn preview_without_selection_shows_warning_only() {
        let mut app = test_app_with_fid();
        app.generate_preview();

        assert_eq!(app.modal, None);
        assert!(app.toast.is_some());
        assert_eq!(app.stats.rejections, 1);
        assert_eq!(app.stats.previews_generated, 0);
    }

    #[test]
    fn mint_without_preview_shows_warning_only() {
        let mut app = test_app_with_fid();
        app.toggle_under_cursor();
        app.confirm_mint();

        assert!(app.toast.is_some());
        assert_eq!(app.stats.mints_submitted, 0);
        assert_eq!(app.stats.rejections, 1);
    }

    #[test]
    fn dismissing_preview_keeps_generated_flag() {
        let mut app = test_app_with_fid();
        app.toggle_under_cursor();
        app.generate_preview();
        app.dismiss_preview();

        assert_eq!(app.modal, None);
        assert!(!app.selection.preview_open());
        assert!(app.selection.preview_generated());
    }
}
