// Selection screen - FID entry above the trait list
//
// Everything here renders from App state; key handling lives in the tui
// module's dispatch layers.

use crate::tui::app::{App, Focus};
use crate::tui::components::fid_input::{self, FidInputContext};
use crate::tui::components::TraitListContext;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Render the selection screen into the content slot
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    fid_input::render(
        f,
        chunks[0],
        &FidInputContext {
            fid: &app.fid,
            locked: app.fid_locked,
            focused: app.focus == Focus::Fid && app.modal.is_none(),
            theme: &app.theme,
        },
    );

    // Keep the cursor/viewport in sync with the catalog and terminal size
    let list_area = chunks[1];
    app.trait_list
        .sync(app.selection.catalog().len(), list_area.height as usize);

    let ctx = TraitListContext {
        selection: &app.selection,
        theme: &app.theme,
        focused: app.focus == Focus::Traits && app.modal.is_none(),
    };
    app.trait_list.render(f, list_area, &ctx);
}
