//! Blocking message dialog
//!
//! Modal overlay used for load/search errors and for the search validation
//! message. While it is open the rest of the UI ignores input; Enter, Space
//! or ESC dismiss it.

use crate::ui::theme::Theme;
use crate::ui::types::MessageLevel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// State for the message dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialogState {
    /// Dialog title
    pub title: String,
    /// Message body, may be longer than one line
    pub message: String,
    /// Severity, used for the border color
    pub level: MessageLevel,
}

impl MessageDialogState {
    #[must_use]
    pub fn new(level: MessageLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }
}

/// Message dialog overlay widget
pub struct MessageDialog<'a> {
    state: &'a MessageDialogState,
    theme: &'a Theme,
}

impl<'a> MessageDialog<'a> {
    #[must_use]
    pub const fn new(state: &'a MessageDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Number of rows `text` needs when wrapped at `width` columns
    fn wrapped_rows(text: &str, width: u16) -> u16 {
        let width = usize::from(width.max(1));
        let rows: usize = text
            .lines()
            .map(|line| line.chars().count().max(1).div_ceil(width))
            .sum();
        u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
    }
}

impl Widget for MessageDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_width = u16::try_from(self.state.message.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(6);
        let width = message_width
            .clamp(40, 76)
            .min(area.width.saturating_sub(4));

        let text_width = width.saturating_sub(4);
        let message_rows = Self::wrapped_rows(&self.state.message, text_width).min(8);
        // border + spacing + message + spacing + button + border
        let height = 5 + message_rows;

        let modal_area = Self::centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                self.theme
                    .level_style(self.state.level)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(message_rows),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let button = Line::from(vec![Span::styled(
            " [ OK ] ",
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.focus)
                .add_modifier(Modifier::BOLD),
        )]);
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
