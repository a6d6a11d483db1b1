//! Help bar widget for displaying key binding hints

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key binding hint, e.g. `^O Load File`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// The buttons of the main screen, as key hints
pub const MAIN_HINTS: [KeyHint; 6] = [
    KeyHint::new("^O", "Load File"),
    KeyHint::new("Enter", "Search"),
    KeyHint::new("^Q", "Quit"),
    KeyHint::new("Tab", "Switch pane"),
    KeyHint::new("↑↓/PgUp/PgDn/⇧←→", "Scroll"),
    KeyHint::new("F1", "Help"),
];

/// One-line bar of key hints at the bottom of the screen
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .enumerate()
            .flat_map(|(i, hint)| {
                let separator = if i == 0 { " " } else { "   " };
                [
                    Span::raw(separator),
                    Span::styled(hint.key, self.theme.key_style()),
                    Span::styled(" ", self.theme.dimmed_style()),
                    Span::raw(hint.action),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
