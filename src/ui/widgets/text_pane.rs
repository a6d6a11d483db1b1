//! Read-only text pane
//!
//! Shows a window of lines starting at a scroll offset. Only the visible
//! slice is turned into ratatui lines, so large documents stay cheap to draw.
//! Lines are never wrapped; long ones are reached with a horizontal offset.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::borrow::Cow;

/// Spaces a tab is drawn as
const TAB: &str = "    ";

/// Replace tabs with spaces; the terminal buffer drops raw control characters
#[must_use]
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', TAB))
    } else {
        Cow::Borrowed(text)
    }
}

/// Display width of the widest line, after tab expansion
#[must_use]
pub fn max_line_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| Line::raw(expand_tabs(line)).width())
        .max()
        .unwrap_or(0)
}

/// Text pane widget
pub struct TextPane<'a> {
    title: &'a str,
    lines: &'a [String],
    theme: &'a Theme,
    scroll: usize,
    /// Columns hidden on the left
    offset: usize,
    focused: bool,
    /// Substring to highlight in every line
    highlight: Option<&'a str>,
    /// Shown in place of the content when there are no lines
    placeholder: &'a str,
}

impl<'a> TextPane<'a> {
    #[must_use]
    pub const fn new(title: &'a str, lines: &'a [String], theme: &'a Theme) -> Self {
        Self {
            title,
            lines,
            theme,
            scroll: 0,
            offset: 0,
            focused: false,
            highlight: None,
            placeholder: "",
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub const fn offset(mut self, columns: usize) -> Self {
        self.offset = columns;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn highlight(mut self, needle: Option<&'a str>) -> Self {
        self.highlight = needle;
        self
    }

    #[must_use]
    pub const fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    /// Split `line` into spans with every occurrence of the needle highlighted
    fn highlighted_line(&self, line: &str) -> Line<'static> {
        let line = expand_tabs(line);
        let Some(needle) = self.highlight.filter(|n| !n.is_empty()) else {
            return Line::raw(line.into_owned());
        };
        let needle = expand_tabs(needle);

        let mut spans = Vec::new();
        let mut last = 0;
        for (idx, matched) in line.match_indices(needle.as_ref()) {
            if idx > last {
                spans.push(Span::raw(line[last..idx].to_string()));
            }
            spans.push(Span::styled(matched.to_string(), self.theme.match_style()));
            last = idx + matched.len();
        }
        if last < line.len() {
            spans.push(Span::raw(line[last..].to_string()));
        }

        Line::from(spans)
    }

    /// Block title with the visible range, e.g. ` Original (1-20/340) `
    fn full_title(&self, height: usize) -> String {
        if self.lines.is_empty() {
            return format!(" {} ", self.title);
        }
        let first = self.scroll.min(self.lines.len() - 1) + 1;
        let last = (self.scroll + height).min(self.lines.len());
        format!(" {} ({first}-{last}/{}) ", self.title, self.lines.len())
    }
}

impl Widget for TextPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Borders take two rows
        let height = usize::from(area.height.saturating_sub(2));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(self.full_title(height));

        let lines: Vec<Line> = if self.lines.is_empty() {
            vec![Line::styled(self.placeholder, self.theme.dimmed_style())]
        } else {
            let start = self.scroll.min(self.lines.len());
            let end = (start + height).min(self.lines.len());
            self.lines[start..end]
                .iter()
                .map(|line| self.highlighted_line(line))
                .collect()
        };

        let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .block(block)
            .scroll((0, offset))
            .render(area, buf);
    }
}
