//! Help overlay widget for displaying the full key binding reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Section title and its (key, description) rows
const SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Actions",
        &[
            ("Ctrl+O", "Load a file"),
            ("Enter", "Search the loaded file"),
            ("Ctrl+Q / ESC", "Quit"),
        ],
    ),
    (
        "Query",
        &[
            ("Type", "Edit the search string"),
            ("←/→ Home/End", "Move the cursor"),
            ("Ctrl+U", "Clear the query"),
            ("Ctrl+W", "Delete word"),
        ],
    ),
    (
        "Panes",
        &[
            ("Tab", "Switch between Original and Filtered"),
            ("↑/↓", "Scroll one line"),
            ("PgUp/PgDn", "Scroll one page"),
            ("Shift+←/→", "Scroll sideways"),
            ("Ctrl+Home/End", "Jump to top/bottom"),
        ],
    ),
    (
        "File picker",
        &[
            ("TAB", "Complete the highlighted entry"),
            ("↑/↓", "Choose an entry"),
            ("Enter", "Load the typed path"),
            ("ESC", "Cancel"),
        ],
    ),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (title, rows) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {title}"),
                self.theme.key_style().add_modifier(Modifier::UNDERLINED),
            ));
            for (key, desc) in rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {key:<16}"), self.theme.key_style()),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));

        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_binding() {
        let theme = Theme::default();
        let content = HelpOverlay::new(&theme).build_content();
        let text: Vec<String> = content.iter().map(ToString::to_string).collect();

        for (_, rows) in SECTIONS {
            for (key, _) in rows {
                assert!(text.iter().any(|line| line.contains(key)), "missing {key}");
            }
        }
        assert!(text.last().unwrap().contains("Press any key"));
    }
}
