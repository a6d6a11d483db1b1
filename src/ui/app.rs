//! Main viewer screen
//!
//! Owns the terminal for the lifetime of the session: sets it up, runs the
//! draw/poll loop over an [`AppState`] and restores it on the way out.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::types::Pane;
use super::widgets::{
    HelpBar, HelpOverlay, MAIN_HINTS, MessageDialog, PathPrompt, SearchBar, StatusBar, TextPane,
};
use crate::config::TextsiftConfig;
use crate::ui::error::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Terminal text viewer with a substring filter
pub struct App {
    config: TextsiftConfig,
    theme: Theme,
}

impl App {
    #[must_use]
    pub fn new(config: TextsiftConfig) -> Self {
        Self {
            config,
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Leave raw mode and the alternate screen before the panic message prints
    fn restore_terminal_on_panic() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            previous(panic_info);
        }));
    }

    /// Draw the main screen
    pub(crate) fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Original + filtered panes
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let search_bar = SearchBar::new(&state.query, theme).focused(state.mode == Mode::Normal);
        frame.render_widget(search_bar, main_layout[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_layout[1]);

        // Pane borders take two rows and two columns
        state.visible_height = usize::from(main_layout[1].height.saturating_sub(2));
        state.visible_width = usize::from(panes[0].width.min(panes[1].width).saturating_sub(2));

        let original = TextPane::new("Original", state.session.original_lines(), theme)
            .scroll(state.original_scroll)
            .offset(state.original_offset)
            .focused(state.focus == Pane::Original)
            .placeholder("Press Ctrl+O to load a file");
        frame.render_widget(original, panes[0]);

        let placeholder = if state.session.filtered().is_some() {
            "No matching lines"
        } else {
            "Type a search string and press Enter"
        };
        let filtered = TextPane::new("Filtered", state.session.filtered_lines(), theme)
            .scroll(state.filtered_scroll)
            .offset(state.filtered_offset)
            .focused(state.focus == Pane::Filtered)
            .highlight(state.highlight())
            .placeholder(placeholder);
        frame.render_widget(filtered, panes[1]);

        let messages = state.active_messages();
        let summary = state.summary();
        let status_bar = StatusBar::new(&messages, theme).with_summary(summary.as_deref());
        frame.render_widget(status_bar, main_layout[2]);

        frame.render_widget(HelpBar::new(&MAIN_HINTS, theme), main_layout[3]);
    }

    /// Render overlays (help, file picker, message dialog)
    pub(crate) fn render_overlays(frame: &mut Frame, state: &AppState, theme: &Theme) {
        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::PickFile => {
                if let Some(prompt) = &state.path_prompt {
                    frame.render_widget(PathPrompt::new(prompt, theme), frame.area());
                }
            }
            Mode::Message => {
                if let Some(dialog) = &state.dialog {
                    frame.render_widget(MessageDialog::new(dialog, theme), frame.area());
                }
            }
            Mode::Normal => {}
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        initial: Option<&Path>,
    ) -> Result<()> {
        let mut state = AppState::from_config(&self.config);

        if let Some(path) = initial {
            state.load_file(path);
        }

        loop {
            state.cleanup_messages();

            terminal.draw(|frame| {
                Self::render(frame, &mut state, &self.theme);
                Self::render_overlays(frame, &state, &self.theme);
            })?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Quit => state.should_exit = true,
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                debug!("exit requested");
                break;
            }
        }

        Ok(())
    }

    /// Run the viewer until the user quits
    ///
    /// `initial` is loaded before the first frame, as if picked with Ctrl+O.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&self, initial: Option<&Path>) -> Result<()> {
        info!("starting viewer");
        Self::restore_terminal_on_panic();
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, initial);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            // Log cleanup error but prioritize the main result
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TextsiftConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::testing::{PANIC_HOOK_LOCK, TempText};
    use std::sync::PoisonError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn draw(state: &mut AppState) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                App::render(frame, state, &theme);
                App::render_overlays(frame, state, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn make_state() -> AppState {
        AppState::new(Session::default(), PathBuf::from("."))
    }

    #[test]
    fn test_empty_screen() {
        let mut state = make_state();
        let rows = draw(&mut state);
        let screen = rows.join("\n");

        assert!(rows[0].contains("Text File Search"));
        assert!(screen.contains("Original"));
        assert!(screen.contains("Filtered"));
        assert!(screen.contains("No file loaded"));
        assert!(rows.last().unwrap().contains("Load File"));
        // 20 rows minus search bar, status bar, help bar and pane borders
        assert_eq!(state.visible_height, 11);
        assert_eq!(state.visible_width, 38);
    }

    #[test]
    fn test_long_line_tail_reachable_by_horizontal_scroll() {
        let long = format!("{}KEEP_TAIL_VISIBLE", "0123456789".repeat(5));
        let file = TempText::new("wide.txt", &format!("short\n{long}\n"));
        let mut state = make_state();
        state.load_file(file.path());

        let screen = draw(&mut state).join("\n");
        assert!(!screen.contains("TAIL"));

        state.scroll_right(usize::MAX / 2);
        let screen = draw(&mut state).join("\n");
        assert!(screen.contains("KEEP_TAIL_VISIBLE"));
    }

    #[test]
    fn test_loaded_and_filtered_screen() {
        let file = TempText::new("fruit.txt", "apple\nbanana\ngrape\n");
        let mut state = make_state();
        state.load_file(file.path());
        state.query.set_text("an");
        state.run_search();

        let screen = draw(&mut state).join("\n");

        assert!(screen.contains("apple"));
        assert!(screen.contains("grape"));
        assert!(screen.contains("Filtered (1-1/1)"));
        assert!(screen.contains("1 matching lines"));
    }

    #[test]
    fn test_message_overlay_is_drawn() {
        let mut state = make_state();
        state.run_search();

        let screen = draw(&mut state).join("\n");

        assert!(screen.contains("[ OK ]"));
    }

    #[test]
    fn test_panic_hook_restores_then_chains() {
        static PREVIOUS_CALLED: AtomicBool = AtomicBool::new(false);
        let _lock = PANIC_HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        std::panic::set_hook(Box::new(|_| PREVIOUS_CALLED.store(true, Ordering::SeqCst)));
        App::restore_terminal_on_panic();

        let result = std::panic::catch_unwind(|| panic!("boom"));
        drop(std::panic::take_hook());

        assert!(result.is_err());
        assert!(PREVIOUS_CALLED.load(Ordering::SeqCst));
    }

    #[test]
    fn test_default_app_uses_default_config() {
        let app = App::default();
        assert_eq!(app.config, TextsiftConfig::default());
    }
}
