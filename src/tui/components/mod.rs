// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: App name, selection badge
// - Status bar: Phase, session counters, key hints
//
// Content components make up the selection screen:
// - FID input: identifier entry field
// - Trait list: the selectable catalog
// - Toast: transient notifications on top of everything

pub mod fid_input;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod trait_list;

pub use toast::Toast;
pub use trait_list::{TraitListContext, TraitListPanel};

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
