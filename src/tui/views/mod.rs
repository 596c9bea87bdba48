// Views module - screen-level rendering logic
//
// The studio is a single-screen app: chrome (title + status bars) around the
// selection screen, with the preview and help surfaces as modal overlays and
// toasts on top of everything.

mod modal;
mod select;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    if app.use_theme_background {
        let bg_block = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg_block, f.area());
    }

    // Shell layout: title bar, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    select::render(f, chunks[1], app);
    components::render_status(f, chunks[2], app);

    // Render modal overlay (on top of everything)
    if let Some(active) = app.modal {
        modal::render(f, active, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
