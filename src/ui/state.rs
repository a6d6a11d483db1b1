//! Application state for the TUI
//!
//! Wraps the [`Session`] with everything the screen needs: the query being
//! typed, which pane has focus, scroll offsets, open overlays and status
//! messages. All of it is touched only from the event loop thread.

use super::types::{MessageLevel, Pane, StatusMessage};
use super::widgets::{MessageDialogState, PathPromptState, TextInputState, max_line_width};
use crate::config::TextsiftConfig;
use crate::session::{Session, SessionError};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing a query, scrolling panes
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// File picker is open
    PickFile,
    /// A blocking message dialog is open
    Message,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded document and filter result
    pub session: Session,
    /// Query being typed
    pub query: TextInputState,
    /// Current UI mode
    pub mode: Mode,
    /// Pane that receives scroll keys
    pub focus: Pane,
    /// First visible line of the original pane
    pub original_scroll: usize,
    /// First visible line of the filtered pane
    pub filtered_scroll: usize,
    /// Columns hidden on the left of the original pane
    pub original_offset: usize,
    /// Columns hidden on the left of the filtered pane
    pub filtered_offset: usize,
    /// Rows available to a pane's content (set during render)
    pub visible_height: usize,
    /// Columns available to a pane's content (set during render)
    pub visible_width: usize,
    /// File picker, while open
    pub path_prompt: Option<PathPromptState>,
    /// Message dialog, while open
    pub dialog: Option<MessageDialogState>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Directory the next file picker opens in
    pub start_dir: PathBuf,
    /// Whether the file picker offers dot-files
    pub show_hidden: bool,
    /// Whether the event loop should stop
    pub should_exit: bool,
}

impl AppState {
    /// Create state around an existing session
    #[must_use]
    pub fn new(session: Session, start_dir: PathBuf) -> Self {
        Self {
            session,
            query: TextInputState::new(),
            mode: Mode::Normal,
            focus: Pane::Original,
            original_scroll: 0,
            filtered_scroll: 0,
            original_offset: 0,
            filtered_offset: 0,
            visible_height: 20, // Default, updated during render
            visible_width: 40,
            path_prompt: None,
            dialog: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            start_dir,
            show_hidden: false,
            should_exit: false,
        }
    }

    /// Create state from configuration
    #[must_use]
    pub fn from_config(config: &TextsiftConfig) -> Self {
        let mut state = Self::new(Session::new(config.reread_on_search), config.start_dir());
        state.message_ttl = config.message_ttl();
        state.show_hidden = config.show_hidden;
        state
    }

    /// Open the file picker (Load File)
    pub fn open_file_picker(&mut self) {
        self.path_prompt = Some(PathPromptState::new(&self.start_dir, self.show_hidden));
        self.mode = Mode::PickFile;
    }

    /// Close the file picker without loading anything
    pub fn cancel_file_picker(&mut self) {
        self.path_prompt = None;
        self.mode = Mode::Normal;
    }

    /// Load `path` into the session and refresh both panes
    ///
    /// On failure a message dialog is shown and the panes keep their content.
    pub fn load_file(&mut self, path: &Path) {
        match self.session.load(path) {
            Ok(document) => {
                let text = format!(
                    "Loaded {} ({} lines, {})",
                    document.name(),
                    document.line_count(),
                    document.display_size()
                );
                if let Some(parent) = document.path().parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.start_dir = parent.to_path_buf();
                }
                self.original_scroll = 0;
                self.filtered_scroll = 0;
                self.original_offset = 0;
                self.filtered_offset = 0;
                self.focus = Pane::Original;
                self.push_message(MessageLevel::Success, text);
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Run the search action with the current query
    pub fn run_search(&mut self) {
        let query = self.query.text().to_string();
        match self.session.search(&query) {
            Ok(result) => {
                let text = format!("{} matching lines for \"{query}\"", result.len());
                info!(query = %query, matches = result.len(), "search");
                self.filtered_scroll = 0;
                self.filtered_offset = 0;
                self.focus = Pane::Filtered;
                self.push_message(MessageLevel::Info, text);
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Open a blocking dialog for a failed action
    fn show_error(&mut self, error: &SessionError) {
        if error.is_validation() {
            self.show_message(MessageLevel::Info, "Search", error.to_string());
        } else {
            self.show_message(MessageLevel::Error, "Error", error.to_string());
            self.push_message(MessageLevel::Error, error.to_string());
        }
    }

    /// Open a blocking message dialog
    pub fn show_message(&mut self, level: MessageLevel, title: &str, message: String) {
        self.dialog = Some(MessageDialogState::new(level, title, message));
        self.mode = Mode::Message;
    }

    /// Close the message dialog
    pub fn dismiss_message(&mut self) {
        self.dialog = None;
        self.mode = Mode::Normal;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    fn focused_lines(&self) -> &[String] {
        match self.focus {
            Pane::Original => self.session.original_lines(),
            Pane::Filtered => self.session.filtered_lines(),
        }
    }

    /// Line count of the focused pane
    fn focused_len(&self) -> usize {
        self.focused_lines().len()
    }

    /// Largest useful scroll offset for the focused pane
    fn max_scroll(&self) -> usize {
        self.focused_len().saturating_sub(self.visible_height.max(1))
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Original => &mut self.original_scroll,
            Pane::Filtered => &mut self.filtered_scroll,
        }
    }

    /// Scroll the focused pane up by `lines`
    pub fn scroll_up(&mut self, lines: usize) {
        let scroll = self.focused_scroll_mut();
        *scroll = scroll.saturating_sub(lines);
    }

    /// Scroll the focused pane down by `lines`, stopping at the last page
    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.max_scroll();
        let scroll = self.focused_scroll_mut();
        *scroll = (*scroll + lines).min(max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        *self.focused_scroll_mut() = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        let max = self.max_scroll();
        *self.focused_scroll_mut() = max;
    }

    fn focused_offset_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Original => &mut self.original_offset,
            Pane::Filtered => &mut self.filtered_offset,
        }
    }

    /// Shift the focused pane's text right, revealing columns on the left
    pub fn scroll_left(&mut self, columns: usize) {
        let offset = self.focused_offset_mut();
        *offset = offset.saturating_sub(columns);
    }

    /// Shift the focused pane's text left, stopping once its widest line ends
    /// at the right border
    pub fn scroll_right(&mut self, columns: usize) {
        let max = max_line_width(self.focused_lines()).saturating_sub(self.visible_width.max(1));
        let offset = self.focused_offset_mut();
        *offset = (*offset + columns).min(max);
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get active (non-expired) messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Remove expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Right-hand status bar text: path, size and match count
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let document = self.session.document()?;
        let mut summary = format!(
            "{} · {} lines · {}",
            document.path().display(),
            document.line_count(),
            document.display_size()
        );
        if let Some(filtered) = self.session.filtered() {
            summary.push_str(&format!(" · {} matches", filtered.len()));
        }
        Some(summary)
    }

    /// Query to highlight in the filtered pane
    #[must_use]
    pub fn highlight(&self) -> Option<&str> {
        self.session.filtered().map(crate::filter::FilteredLines::query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempText;

    fn make_state() -> AppState {
        AppState::new(Session::default(), PathBuf::from("."))
    }

    fn type_query(state: &mut AppState, query: &str) {
        state.query.clear();
        for c in query.chars() {
            state.query.insert_char(c);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = make_state();

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.focus, Pane::Original);
        assert!(state.summary().is_none());
        assert!(state.highlight().is_none());
    }

    #[test]
    fn test_from_config() {
        let config = TextsiftConfig {
            start_dir: Some(PathBuf::from("/srv")),
            show_hidden: true,
            reread_on_search: true,
            log_level: None,
            message_ttl_secs: 9,
        };
        let state = AppState::from_config(&config);

        assert_eq!(state.start_dir, PathBuf::from("/srv"));
        assert!(state.show_hidden);
        assert!(state.session.reread_on_search());
        assert_eq!(state.message_ttl, Duration::from_secs(9));
    }

    #[test]
    fn test_load_success() {
        let file = TempText::new("fruit.txt", "apple\nbanana\ngrape\n");
        let mut state = make_state();

        state.load_file(file.path());

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.session.original_text(), "apple\nbanana\ngrape");
        assert_eq!(state.start_dir, file.path().parent().unwrap());
        assert_eq!(state.active_messages().last().unwrap().level, MessageLevel::Success);
        assert!(state.summary().unwrap().contains("3 lines"));
    }

    #[test]
    fn test_load_failure_opens_dialog() {
        let file = TempText::new("keep.txt", "keep\n");
        let mut state = make_state();
        state.load_file(file.path());

        state.load_file(&file.path().with_file_name("missing.txt"));

        assert_eq!(state.mode, Mode::Message);
        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(dialog.level, MessageLevel::Error);
        assert!(dialog.message.starts_with("Error loading file: "));
        assert_eq!(state.session.original_text(), "keep");
    }

    #[test]
    fn test_search_without_file_shows_validation() {
        let mut state = make_state();
        type_query(&mut state, "an");

        state.run_search();

        assert_eq!(state.mode, Mode::Message);
        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(dialog.level, MessageLevel::Info);
        assert_eq!(dialog.message, crate::session::MISSING_INPUT_MESSAGE);
    }

    #[test]
    fn test_search_with_empty_query_shows_validation() {
        let file = TempText::new("fruit.txt", "apple\n");
        let mut state = make_state();
        state.load_file(file.path());

        state.run_search();

        assert_eq!(state.mode, Mode::Message);
        assert!(state.session.filtered().is_none());
    }

    #[test]
    fn test_search_success() {
        let file = TempText::new("fruit.txt", "apple\nbanana\ngrape\n");
        let mut state = make_state();
        state.load_file(file.path());
        type_query(&mut state, "an");

        state.run_search();

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.session.filtered_text(), "banana");
        assert_eq!(state.focus, Pane::Filtered);
        assert_eq!(state.highlight(), Some("an"));
        assert!(state.summary().unwrap().ends_with("1 matches"));
    }

    #[test]
    fn test_dismiss_message() {
        let mut state = make_state();
        state.show_message(MessageLevel::Info, "Title", "body".to_string());
        assert_eq!(state.mode, Mode::Message);

        state.dismiss_message();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_picker_open_and_cancel() {
        let file = TempText::new("a.txt", "a\n");
        let mut state = make_state();
        state.load_file(file.path());

        state.open_file_picker();
        assert_eq!(state.mode, Mode::PickFile);
        assert!(state.path_prompt.is_some());

        state.cancel_file_picker();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.path_prompt.is_none());
        assert_eq!(state.session.original_text(), "a");
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let content: String = (0..50).map(|i| format!("line {i}\n")).collect();
        let file = TempText::new("long.txt", &content);
        let mut state = make_state();
        state.visible_height = 10;
        state.load_file(file.path());

        state.scroll_up(3);
        assert_eq!(state.original_scroll, 0);

        state.page_down();
        assert_eq!(state.original_scroll, 10);

        state.scroll_down(100);
        assert_eq!(state.original_scroll, 40);

        state.scroll_to_top();
        assert_eq!(state.original_scroll, 0);

        state.scroll_to_bottom();
        assert_eq!(state.original_scroll, 40);

        // Filtered pane is empty, so it cannot scroll
        state.toggle_focus();
        state.page_down();
        assert_eq!(state.filtered_scroll, 0);
    }

    #[test]
    fn test_horizontal_scroll_is_clamped_per_pane() {
        let file = TempText::new("wide.txt", &format!("{}\nshort\n", "x".repeat(50)));
        let mut state = make_state();
        state.visible_width = 20;
        state.load_file(file.path());

        state.scroll_left(5);
        assert_eq!(state.original_offset, 0);

        state.scroll_right(8);
        assert_eq!(state.original_offset, 8);

        state.scroll_right(100);
        assert_eq!(state.original_offset, 30);

        // Filtered pane keeps its own offset
        state.query.set_text("short");
        state.run_search();
        assert_eq!(state.focus, Pane::Filtered);
        state.scroll_right(4);
        assert_eq!(state.filtered_offset, 0);
        assert_eq!(state.original_offset, 30);

        // A new load starts at the left edge again
        state.load_file(file.path());
        assert_eq!(state.original_offset, 0);
    }

    #[test]
    fn test_message_cleanup() {
        let mut state = make_state();
        state.message_ttl = Duration::from_secs(60);
        state.push_message(MessageLevel::Info, "fresh");

        state.cleanup_messages();
        assert_eq!(state.active_messages().len(), 1);
    }
}
