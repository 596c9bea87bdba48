//! FID input field
//!
//! A single-line numeric entry for the Farcaster ID. When the FID was
//! preset via config or `--fid`, the field renders read-only and focus
//! skips it entirely.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Context for rendering the FID field
pub struct FidInputContext<'a> {
    pub fid: &'a str,
    pub locked: bool,
    pub focused: bool,
    pub theme: &'a Theme,
}

/// Render the FID entry field
pub fn render(f: &mut Frame, area: Rect, ctx: &FidInputContext) {
    let theme = ctx.theme;

    let line = if ctx.fid.is_empty() {
        Line::from(Span::styled(
            " Enter your FID...",
            Style::default().fg(theme.muted),
        ))
    } else {
        let mut spans = vec![
            Span::styled(" #", Style::default().fg(theme.muted)),
            Span::styled(
                ctx.fid.to_string(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if ctx.locked {
            spans.push(Span::styled(
                "  (preset)",
                Style::default().fg(theme.muted),
            ));
        }
        Line::from(spans)
    };

    let mut line = line;
    // Block cursor at the end of the input while editing
    if ctx.focused && !ctx.locked {
        line.push_span(Span::styled(
            "\u{2588}",
            Style::default().fg(theme.highlight),
        ));
    }

    let border_color = if ctx.focused {
        theme.highlight
    } else {
        theme.border
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" Farcaster ID (FID) "),
    );

    f.render_widget(input, area);
}
