// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the selection screen and its overlays
// - Forwarding session events to the storage task

pub mod app;
pub mod components;
pub mod input;
pub mod modal;
pub mod views;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::SessionEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
/// Returns once the user quits.
pub async fn run_tui(
    config: Config,
    catalog: Catalog,
    log_buffer: LogBuffer,
    event_tx: Option<mpsc::Sender<SessionEvent>>,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with config (initializes theme, selection, FID preset)
    let mut app = App::with_config(&config, catalog, log_buffer, event_tx);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources: keyboard/mouse input and a periodic tick that redraws
/// the screen so toasts expire on time. tokio::select! waits on both and
/// responds to whichever fires first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Periodic redraw ticker (10 FPS is plenty for a form)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal -> Global -> FID entry -> Selection screen
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys (quit, help)
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {
            // Layer 3: FID entry gets raw character input, no debounce -
            // repeated digits ("33") must not be swallowed
            if app.focus == Focus::Fid {
                match key {
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        app.push_fid_char(c);
                        return;
                    }
                    KeyCode::Backspace => {
                        app.pop_fid_char();
                        return;
                    }
                    KeyCode::Enter => {
                        // Submitting the field moves on to the trait list
                        if app.handle_key_press(key) {
                            app.focus_next();
                        }
                        return;
                    }
                    _ => {}
                }
            }

            // Layer 4: Selection screen keys (InputHandler for debounce/repeat)
            match key {
                KeyCode::Tab | KeyCode::BackTab => {
                    if app.handle_key_press(key) {
                        app.focus_next();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if app.handle_key_press(key) && app.focus == Focus::Traits {
                        app.trait_list.move_up();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if app.handle_key_press(key) && app.focus == Focus::Traits {
                        app.trait_list.move_down();
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if app.handle_key_press(key) && app.focus == Focus::Traits {
                        app.toggle_under_cursor();
                    }
                }
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    if app.handle_key_press(key) {
                        app.generate_preview();
                    }
                }
                KeyCode::Char('m') | KeyCode::Char('M') => {
                    // Mint from the screen is allowed; the selection core
                    // rejects it until a preview has been generated
                    if app.handle_key_press(key) {
                        app.confirm_mint();
                    }
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    // Scrolling drives the trait cursor; modals ignore the mouse
    if app.modal.is_some() {
        return;
    }

    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            if app.focus == Focus::Traits {
                app.trait_list.move_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.focus == Focus::Traits {
                app.trait_list.move_down();
            }
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(mut active) = app.modal else {
        return false;
    };

    // CRITICAL: Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true; // Modal absorbs the event, but state is updated
    }

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, etc.)
    }

    match active.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => match active {
            // Dismissing the preview goes through App so the selection core
            // and session log see it
            Modal::Preview => app.dismiss_preview(),
            Modal::Help => app.modal = None,
        },
        ModalAction::Confirm => app.confirm_mint(),
    }

    true // Modal absorbed the input
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of focus
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::Help);
            }
            true
        }
        _ => false,
    }
}
