//! Trait list panel - the heart of the selection screen
//!
//! A scrollable list of catalog traits with a selection cursor. Rows show
//! the selection marker, trait name, tier, and unlock requirement. Locked
//! traits are inert; when the selection is full, unselected rows dim while
//! selected rows stay togglable.

use crate::selection::{Selection, MAX_TRAITS};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Context for rendering the trait list
pub struct TraitListContext<'a> {
    pub selection: &'a Selection,
    pub theme: &'a Theme,
    pub focused: bool,
}

/// Trait list panel for the selection screen
pub struct TraitListPanel {
    /// Cursor position (index into the catalog)
    pub cursor: usize,

    /// Scroll offset (first visible item)
    offset: usize,

    /// Viewport height (items visible)
    viewport: usize,

    /// Cached catalog length (for bounds checking)
    item_count: usize,
}

impl TraitListPanel {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            viewport: 10, // default, updated in sync
            item_count: 0,
        }
    }

    /// Sync with the catalog and viewport (call before render)
    pub fn sync(&mut self, item_count: usize, viewport_height: usize) {
        self.item_count = item_count;
        self.viewport = viewport_height.saturating_sub(2).max(1); // borders

        // Clamp cursor
        let max = self.item_count.saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }

        self.ensure_visible();
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.item_count {
            self.cursor += 1;
            self.ensure_visible();
        }
    }

    /// Ensure the cursor row is visible
    fn ensure_visible(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.viewport {
            self.offset = self
                .cursor
                .saturating_sub(self.viewport.saturating_sub(1));
        }
    }

    /// Render the list
    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &TraitListContext) {
        let selection = ctx.selection;
        let catalog = selection.catalog();

        if catalog.is_empty() {
            let empty = ratatui::widgets::Paragraph::new(" No traits in the catalog")
                .style(Style::default().fg(ctx.theme.muted))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(ctx.theme.border_type)
                        .border_style(Style::default().fg(ctx.theme.border))
                        .title(" Traits "),
                );
            f.render_widget(empty, area);
            return;
        }

        let can_select_more = selection.can_select_more();

        let end = (self.offset + self.viewport).min(catalog.len());
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut items: Vec<ListItem> = Vec::new();
        for (i, entry) in catalog
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(end.saturating_sub(self.offset))
        {
            let is_selected = selection.is_selected(&entry.id);
            let is_cursor = ctx.focused && i == self.cursor;
            let is_locked = !entry.eligible;
            // Inert when the selection is full and this row is not part of it
            let is_inert = is_locked || (!can_select_more && !is_selected);

            let marker = if is_selected {
                "\u{25cf}" // ●
            } else if is_locked {
                "\u{2715}" // ✕
            } else {
                "\u{25cb}" // ○
            };

            let marker_style = if is_selected {
                Style::default().fg(ctx.theme.selected_marker)
            } else if is_locked {
                Style::default().fg(ctx.theme.locked)
            } else {
                Style::default().fg(ctx.theme.muted)
            };

            let name_style = if is_locked {
                Style::default()
                    .fg(ctx.theme.locked)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_inert {
                Style::default().fg(ctx.theme.muted)
            } else if is_selected {
                Style::default()
                    .fg(ctx.theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ctx.theme.foreground)
            };

            let detail_style = if is_inert {
                Style::default().fg(ctx.theme.muted)
            } else {
                Style::default().fg(ctx.theme.tier)
            };

            let suffix = if is_locked { "  [not eligible]" } else { "" };
            let detail = format!("{} \u{00b7} {}{}", entry.tier, entry.requirement, suffix);

            // Pad the name so tier/requirement line up in a column
            let name = truncate_to_width(&entry.name, 28);
            let padding = 30usize.saturating_sub(name.width());

            let mut spans = vec![
                Span::raw(" "),
                Span::styled(marker.to_string(), marker_style),
                Span::raw(" "),
                Span::styled(name, name_style),
                Span::raw(" ".repeat(padding)),
            ];

            // Only show the detail column if it fits
            if inner_width > 36 {
                spans.push(Span::styled(
                    truncate_to_width(&detail, inner_width.saturating_sub(34)),
                    detail_style,
                ));
            }

            let mut line = Line::from(spans);
            if is_cursor {
                line = line.style(
                    Style::default()
                        .bg(ctx.theme.selection)
                        .fg(ctx.theme.selection_fg),
                );
            }

            items.push(ListItem::new(line));
        }

        let border_color = if ctx.focused {
            ctx.theme.highlight
        } else {
            ctx.theme.border
        };

        let title = format!(
            " Traits \u{2500} {}/{} selected ",
            selection.selected_count(),
            MAX_TRAITS
        );

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(title);

        if ctx.focused {
            block = block.title_bottom(
                Line::from(" \u{2191}\u{2193} move \u{00b7} Space toggle \u{00b7} p preview ")
                    .right_aligned(),
            );
        }

        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }
}

impl Default for TraitListPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a string to a display width, appending an ellipsis when cut
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut panel = TraitListPanel::new();
        panel.sync(3, 10);

        panel.move_up();
        assert_eq!(panel.cursor, 0);

        for _ in 0..10 {
            panel.move_down();
        }
        assert_eq!(panel.cursor, 2);

        // Shrinking the list clamps the cursor
        panel.sync(1, 10);
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn scrolling_follows_cursor() {
        let mut panel = TraitListPanel::new();
        panel.sync(20, 7); // viewport of 5 rows after borders

        for _ in 0..10 {
            panel.move_down();
        }
        // Cursor at 10 must be inside [offset, offset + viewport)
        assert!(panel.cursor >= panel.offset);
        assert!(panel.cursor < panel.offset + panel.viewport);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a very long trait name", 10);
        assert!(cut.ends_with('\u{2026}'));
        assert!(cut.width() <= 10);
    }
}
