// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Preview modal: the preview surface (identifier, art placeholder, traits)
// - Help modal: keyboard shortcuts

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: Modal, app: &App) {
    match modal {
        Modal::Preview => render_preview(f, app),
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the preview surface
///
/// Stateless presentation of the current identifier and the resolved
/// selected traits. The art region is a placeholder - image generation
/// happens nowhere in this build.
fn render_preview(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    let muted = Style::default().fg(theme.muted);
    let header = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let fid_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let selected = app.selection.selected_traits();

    let mut lines: Vec<Line> = vec![
        Line::raw(""),
        Line::styled("Farcaster ID", muted).centered(),
        Line::styled(format!("#{}", app.fid), fid_style).centered(),
        Line::raw(""),
        // Placeholder art region
        Line::styled("\u{2726}   \u{00b7}   \u{2727}   \u{00b7}   \u{2726}", muted).centered(),
        Line::styled("Preview generating...", muted).centered(),
        Line::styled("\u{2727}   \u{00b7}   \u{2726}   \u{00b7}   \u{2727}", muted).centered(),
        Line::raw(""),
        Line::from(Span::styled("  Selected Traits", header)),
    ];

    for entry in &selected {
        lines.push(Line::from(vec![
            Span::styled("    \u{25aa} ", Style::default().fg(theme.selected_marker)),
            Span::styled(entry.name.clone(), Style::default().fg(theme.foreground)),
            Span::styled(format!("  {}", entry.tier), Style::default().fg(theme.tier)),
        ]));
    }
    lines.push(Line::raw(""));

    let width = 48;
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Preview Your Degen ")
                .title_bottom(
                    Line::from(" Enter: Mint NFT \u{00b7} Esc: Close ").centered(),
                ),
        );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.tier);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Selection", header_style)),
        kb("↑/↓, j/k", "Move the trait cursor"),
        kb("Space/Enter", "Toggle trait (max 4)"),
        kb("Tab", "Switch FID field / trait list"),
        kb("0-9, Bksp", "Edit the FID"),
        Line::raw(""),
        Line::from(Span::styled("  Preview & Mint", header_style)),
        kb("p", "Generate preview"),
        kb("m", "Mint (needs a generated preview)"),
        kb("Enter", "Mint from the preview"),
        kb("Esc", "Close the preview"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(&app.theme.name, key_style),
        ]),
    ]);

    // Calculate modal size
    let width = 44;
    let height = 22;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
