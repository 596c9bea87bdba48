// Title bar component
//
// Renders the app title and the selection badge.

use crate::selection::MAX_TRAITS;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the app name, the tagline, and a right-aligned `n/4` badge that
/// fills in as traits are selected.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = " \u{25c8} The Degens \u{2500}\u{2500} mint your Degen";

    let badge = format!(
        " Selected: {}/{} ",
        app.selection.selected_count(),
        MAX_TRAITS
    );
    let badge_style = if app.selection.selected_count() == MAX_TRAITS {
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted)
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::styled(badge, badge_style).right_aligned()),
        );

    f.render_widget(title, area);
}
