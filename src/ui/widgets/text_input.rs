//! Single-line text editing state
//!
//! Shared by the query field and the file picker. The cursor is a character
//! index, not a byte index, so multi-byte input edits correctly.

use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};

/// Editable single-line buffer with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
}

impl TextInputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the end
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.set_text(text);
        state
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
    }

    /// Get byte index from cursor (character) position
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    ///
    /// Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = self.byte_index();
        let prev_byte_idx = self.buffer[..byte_idx]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.buffer.remove(prev_byte_idx);
        self.cursor -= 1;
        true
    }

    /// Delete character at cursor (delete key)
    ///
    /// Returns whether anything was removed.
    pub fn delete(&mut self) -> bool {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
            true
        } else {
            false
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Clear the entire line (Ctrl+U)
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Clear word backwards (Ctrl+W)
    pub fn delete_word_backwards(&mut self) {
        let byte_idx = self.byte_index();
        let before = &self.buffer[..byte_idx];

        let is_boundary = |c: char| c.is_whitespace() || std::path::is_separator(c);
        let trimmed = before.trim_end_matches(is_boundary);
        let new_end = trimmed.rfind(is_boundary).map_or(0, |last| last + 1);

        self.buffer.drain(new_end..byte_idx);
        self.cursor = self.buffer[..new_end].chars().count();
    }

    /// Slice of the text that fits in `width` columns, and the cursor offset in it
    ///
    /// Keeps the cursor roughly centered once the text overflows.
    #[must_use]
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let total_chars = self.buffer.chars().count();
        // One column is reserved for the cursor block past the end
        let width = width.saturating_sub(1).max(1);

        if total_chars <= width {
            return (self.buffer.clone(), self.cursor);
        }

        let half_width = width / 2;
        let start_char = if self.cursor <= half_width {
            0
        } else if self.cursor + half_width >= total_chars {
            total_chars.saturating_sub(width)
        } else {
            self.cursor.saturating_sub(half_width)
        };

        let visible: String = self.buffer.chars().skip(start_char).take(width).collect();
        (visible, self.cursor - start_char)
    }

    /// Render the visible window as a line with a highlighted cursor cell
    #[must_use]
    pub fn render_line(&self, width: usize, theme: &Theme) -> Line<'static> {
        let (visible_text, cursor_offset) = self.visible_window(width);

        let before_cursor: String = visible_text.chars().take(cursor_offset).collect();
        let at_cursor: String = visible_text.chars().skip(cursor_offset).take(1).collect();
        let after_cursor: String = visible_text.chars().skip(cursor_offset + 1).collect();

        let at_cursor = if at_cursor.is_empty() {
            " ".to_string()
        } else {
            at_cursor
        };

        Line::from(vec![
            Span::raw(before_cursor),
            Span::styled(at_cursor, theme.cursor_style()),
            Span::raw(after_cursor),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_input() {
        let mut state = TextInputState::new();

        for c in "hello".chars() {
            state.insert_char(c);
        }

        assert_eq!(state.text(), "hello");
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TextInputState::with_text("hello");

        state.cursor_left();
        assert_eq!(state.cursor, 4);

        state.cursor_home();
        assert_eq!(state.cursor, 0);
        state.cursor_left();
        assert_eq!(state.cursor, 0);

        state.cursor_end();
        assert_eq!(state.cursor, 5);

        state.cursor_right();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = TextInputState::with_text("hello");

        assert!(state.backspace());
        assert_eq!(state.text(), "hell");
        assert!(!state.delete());

        state.cursor_home();
        assert!(!state.backspace());
        assert!(state.delete());
        assert_eq!(state.text(), "ell");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TextInputState::with_text("café");
        assert_eq!(state.cursor, 4);

        state.cursor_left();
        state.insert_char('ï');
        assert_eq!(state.text(), "cafïé");

        state.cursor_end();
        state.backspace();
        assert_eq!(state.text(), "cafï");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut state = TextInputState::with_text("ac");
        state.cursor_left();
        state.insert_char('b');
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_delete_word_backwards() {
        let mut state = TextInputState::with_text("hello world");

        state.delete_word_backwards();
        assert_eq!(state.text(), "hello ");
        assert_eq!(state.cursor, 6);

        state.delete_word_backwards();
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_delete_path_segment() {
        let mut state = TextInputState::with_text("/var/log/syslog");
        state.delete_word_backwards();
        assert_eq!(state.text(), "/var/log/");

        state.delete_word_backwards();
        assert_eq!(state.text(), "/var/");
    }

    #[test]
    fn test_clear() {
        let mut state = TextInputState::with_text("query");
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_visible_window_fits() {
        let state = TextInputState::with_text("short");
        assert_eq!(state.visible_window(20), ("short".to_string(), 5));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let state = TextInputState::with_text("abcdefghijklmnopqrstuvwxyz");
        let (visible, offset) = state.visible_window(11);

        assert_eq!(visible.chars().count(), 10);
        assert!(visible.ends_with('z'));
        assert_eq!(offset, 10);
    }
}
