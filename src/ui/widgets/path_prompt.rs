//! File picker modal
//!
//! A path prompt with directory completion:
//! - The text before the last separator names the directory being browsed
//! - Entries of that directory starting with the rest are offered as suggestions
//! - TAB accepts a suggestion, Enter submits the typed path, ESC cancels

use super::text_input::TextInputState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use tracing::debug;

/// Upper bound on collected suggestions
const MAX_SUGGESTIONS: usize = 200;
/// Suggestions shown at once
const VISIBLE_SUGGESTIONS: usize = 8;

/// State for the file picker
#[derive(Debug, Clone)]
pub struct PathPromptState {
    /// The path being typed
    pub input: TextInputState,
    /// Completions for the current input
    pub suggestions: Vec<String>,
    /// Currently highlighted suggestion index
    pub suggestion_cursor: usize,
    /// Whether dot-files are offered
    pub show_hidden: bool,
}

impl PathPromptState {
    /// Open the picker in `start_dir`
    #[must_use]
    pub fn new(start_dir: &Path, show_hidden: bool) -> Self {
        let mut text = start_dir.display().to_string();
        if !text.is_empty() && !text.ends_with(std::path::is_separator) {
            text.push(MAIN_SEPARATOR);
        }

        let mut state = Self {
            input: TextInputState::with_text(text),
            suggestions: Vec::new(),
            suggestion_cursor: 0,
            show_hidden,
        };
        state.update_suggestions();
        state
    }

    /// Split the input into the directory part (up to and including the last
    /// separator) and the file name prefix after it
    fn split_input(&self) -> (&str, &str) {
        let text = self.input.text();
        text.rfind(std::path::is_separator)
            .map_or(("", text), |idx| text.split_at(idx + 1))
    }

    /// Recompute suggestions from the directory named by the input
    pub fn update_suggestions(&mut self) {
        let (dir_text, prefix) = {
            let (dir_text, prefix) = self.split_input();
            (dir_text.to_string(), prefix.to_string())
        };
        let prefix = prefix.as_str();
        let dir = if dir_text.is_empty() {
            Path::new(".")
        } else {
            Path::new(&dir_text)
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "cannot list directory");
                self.suggestions.clear();
                self.suggestion_cursor = 0;
                return;
            }
        };

        let mut found: Vec<(bool, String)> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if !name.starts_with(prefix) {
                    return None;
                }
                if name.starts_with('.') && !self.show_hidden && !prefix.starts_with('.') {
                    return None;
                }
                let is_dir = entry.file_type().is_ok_and(|t| t.is_dir())
                    || entry.path().is_dir();
                Some((is_dir, name))
            })
            .collect();

        // Directories first, then by name
        found.sort_by(|(a_dir, a), (b_dir, b)| b_dir.cmp(a_dir).then_with(|| a.cmp(b)));
        found.truncate(MAX_SUGGESTIONS);

        self.suggestions = found
            .into_iter()
            .map(|(is_dir, name)| {
                let mut suggestion = format!("{dir_text}{name}");
                if is_dir {
                    suggestion.push(MAIN_SEPARATOR);
                }
                suggestion
            })
            .collect();

        if self.suggestion_cursor >= self.suggestions.len() {
            self.suggestion_cursor = 0;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert_char(c);
        self.update_suggestions();
    }

    pub fn backspace(&mut self) {
        if self.input.backspace() {
            self.update_suggestions();
        }
    }

    pub fn delete(&mut self) {
        if self.input.delete() {
            self.update_suggestions();
        }
    }

    pub fn delete_word_backwards(&mut self) {
        self.input.delete_word_backwards();
        self.update_suggestions();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.update_suggestions();
    }

    /// Move suggestion cursor up, wrapping around
    pub fn suggestion_up(&mut self) {
        if self.suggestion_cursor > 0 {
            self.suggestion_cursor -= 1;
        } else if !self.suggestions.is_empty() {
            self.suggestion_cursor = self.suggestions.len() - 1;
        }
    }

    /// Move suggestion cursor down, wrapping around
    pub fn suggestion_down(&mut self) {
        if self.suggestion_cursor + 1 < self.suggestions.len() {
            self.suggestion_cursor += 1;
        } else {
            self.suggestion_cursor = 0;
        }
    }

    /// Replace the input with the highlighted suggestion (TAB)
    ///
    /// Accepting a directory lists its contents next.
    pub fn accept_suggestion(&mut self) {
        if let Some(suggestion) = self.suggestions.get(self.suggestion_cursor).cloned() {
            self.input.set_text(suggestion);
            self.suggestion_cursor = 0;
            self.update_suggestions();
        }
    }

    /// The path to load, or `None` when nothing has been typed
    #[must_use]
    pub fn selected_path(&self) -> Option<PathBuf> {
        let text = self.input.text();
        if text.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(text))
        }
    }
}

/// File picker overlay widget
pub struct PathPrompt<'a> {
    state: &'a PathPromptState,
    theme: &'a Theme,
}

impl<'a> PathPrompt<'a> {
    #[must_use]
    pub const fn new(state: &'a PathPromptState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Suggestions around the highlighted one, as list items
    fn build_suggestions(&self) -> Vec<ListItem<'static>> {
        let cursor = self.state.suggestion_cursor;
        let start = cursor.saturating_sub(VISIBLE_SUGGESTIONS - 1);

        self.state
            .suggestions
            .iter()
            .enumerate()
            .skip(start)
            .take(VISIBLE_SUGGESTIONS)
            .map(|(idx, suggestion)| {
                let is_selected = idx == cursor;
                let style = if is_selected {
                    self.theme.key_style()
                } else {
                    self.theme.normal_style()
                };
                let name = Path::new(suggestion.trim_end_matches(std::path::is_separator))
                    .file_name()
                    .map_or_else(|| suggestion.clone(), |n| n.to_string_lossy().into_owned());
                let name = if suggestion.ends_with(std::path::is_separator) {
                    format!("{name}{MAIN_SEPARATOR}")
                } else {
                    name
                };

                let prefix = if is_selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(name, style),
                ]))
            })
            .collect()
    }
}

impl Widget for PathPrompt<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 70.min(area.width.saturating_sub(4));

        let shown = self.state.suggestions.len().min(VISIBLE_SUGGESTIONS) as u16;
        let suggestions_height = if shown > 0 { shown + 2 } else { 0 };
        // 2 (modal borders) + 3 (input field) + 1 (help text)
        let height = 6 + suggestions_height;

        let modal_area = Self::centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Load File ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut constraints = vec![Constraint::Length(3)];
        if suggestions_height > 0 {
            constraints.push(Constraint::Length(suggestions_height));
        }
        constraints.push(Constraint::Length(1));
        let chunks = Layout::vertical(constraints).split(inner);
        let mut chunk_idx = 0;

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Path ");
        let input_inner = input_block.inner(chunks[chunk_idx]);
        input_block.render(chunks[chunk_idx], buf);
        chunk_idx += 1;

        let line = self
            .state
            .input
            .render_line(input_inner.width as usize, self.theme);
        Paragraph::new(line).render(input_inner, buf);

        if suggestions_height > 0 {
            let title = format!(
                " {}/{} ",
                self.state.suggestion_cursor + 1,
                self.state.suggestions.len()
            );
            let list = List::new(self.build_suggestions()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(false))
                    .title(title),
            );
            list.render(chunks[chunk_idx], buf);
            chunk_idx += 1;
        }

        let help_text = if suggestions_height > 0 {
            "TAB: complete | ↑↓: choose | Enter: load | ESC: cancel"
        } else {
            "Enter: load | ESC: cancel"
        };
        Paragraph::new(help_text)
            .style(self.theme.dimmed_style().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .render(chunks[chunk_idx], buf);
    }
}
