//! Color theme definitions for the TUI

use ratatui::style::{Color, Modifier, Style};

use super::types::MessageLevel;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color of the focused pane or input
    pub focus: Color,
    /// Color for the text cursor
    pub cursor: Color,
    /// Background of query matches in the filtered pane
    pub match_highlight: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for unfocused borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for file paths
    pub path: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            focus: Color::Cyan,
            cursor: Color::Cyan,
            match_highlight: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            path: Color::White,
        }
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    /// Style for the character under the text cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .bg(self.cursor)
            .fg(Color::Black)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    /// Style for query occurrences inside matching lines
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.match_highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style, depending on focus
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for file paths
    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path).add_modifier(Modifier::BOLD)
    }

    /// Style for a message of the given level
    #[must_use]
    pub fn level_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Success => self.success,
            MessageLevel::Error => self.error,
            MessageLevel::Info => self.info,
        };
        Style::default().fg(color)
    }
}
