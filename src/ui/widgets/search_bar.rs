//! Search bar widget for query input

use super::text_input::TextInputState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

const LABEL: &str = "Search: ";

/// Query input with a cursor
pub struct SearchBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    /// Whether keystrokes currently go to the query
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Text File Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let field_width = usize::from(inner.width).saturating_sub(LABEL.len());
        let mut line = if self.focused {
            self.input.render_line(field_width, self.theme)
        } else {
            ratatui::text::Line::raw(self.input.visible_window(field_width).0)
        };
        line.spans
            .insert(0, Span::styled(LABEL, self.theme.dimmed_style()));

        Paragraph::new(line).render(inner, buf);
    }
}
