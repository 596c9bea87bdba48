// Status bar component
//
// Renders session state at the bottom: phase, counters, and the most
// recent captured log line.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Left side: phase, session counters, and the latest log entry.
/// Right side: key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let phase = app.selection.phase().name();

    let counters = if app.stats_enabled {
        format!(
            " {} \u{2502} toggles {} \u{00b7} rejections {} \u{00b7} previews {} \u{00b7} mints {}",
            phase,
            app.stats.toggles,
            app.stats.rejections,
            app.stats.previews_generated,
            app.stats.mints_submitted,
        )
    } else {
        format!(" {}", phase)
    };

    let mut spans = vec![Span::styled(
        counters,
        Style::default().fg(app.theme.status_bar),
    )];

    // Latest captured log entry, colored by severity
    if let Some(entry) = app.log_buffer.latest() {
        let color = match entry.level {
            LogLevel::Error => app.theme.error,
            LogLevel::Warn => app.theme.warning,
            _ => app.theme.muted,
        };
        spans.push(Span::styled(
            format!(
                " \u{2502} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.message
            ),
            Style::default().fg(color),
        ));
    }

    let hints = " Tab:focus  p:preview  ?:help  q:quit ";

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .title_top(Line::styled(hints, Style::default().fg(app.theme.muted)).right_aligned()),
    );

    f.render_widget(status, area);
}
