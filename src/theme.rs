// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // Trait list colors
    pub selection: Color,
    pub selection_fg: Color,
    pub selected_marker: Color,
    pub locked: Color,
    pub tier: Color,

    // Toast severity colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::White,
            border_type: BorderType::Rounded,
            title: Color::Magenta,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            selection: Color::Blue,
            selection_fg: Color::White,
            selected_marker: Color::Green,
            locked: Color::DarkGray,
            tier: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
            border: Color::Rgb(0x62, 0x72, 0xa4),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            selected_marker: Color::Rgb(0x50, 0xfa, 0x7b), // green
            locked: Color::Rgb(0x62, 0x72, 0xa4),
            tier: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            success: Color::Rgb(0x50, 0xfa, 0x7b),
            warning: Color::Rgb(0xff, 0xb8, 0x6c), // orange
            error: Color::Rgb(0xff, 0x55, 0x55),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            border: Color::Rgb(0x92, 0x83, 0x74),
            border_type: BorderType::Plain,
            title: Color::Rgb(0xd3, 0x86, 0x9b),     // purple
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            selection: Color::Rgb(0x50, 0x49, 0x45),
            selection_fg: Color::Rgb(0xeb, 0xdb, 0xb2),
            selected_marker: Color::Rgb(0xb8, 0xbb, 0x26),
            locked: Color::Rgb(0x92, 0x83, 0x74),
            tier: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            success: Color::Rgb(0xb8, 0xbb, 0x26),
            warning: Color::Rgb(0xfe, 0x80, 0x19), // orange
            error: Color::Rgb(0xfb, 0x49, 0x34),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive_and_falls_back_to_auto() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("GRUVBOX").name, "gruvbox");
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
    }
}
