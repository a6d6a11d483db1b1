//! Ratatui widgets for the textsift screen

mod help_bar;
mod help_overlay;
mod message_dialog;
mod path_prompt;
mod search_bar;
mod status_bar;
mod text_input;
mod text_pane;

pub use help_bar::{HelpBar, KeyHint, MAIN_HINTS};
pub use help_overlay::HelpOverlay;
pub use message_dialog::{MessageDialog, MessageDialogState};
pub use path_prompt::{PathPrompt, PathPromptState};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use text_input::TextInputState;
pub use text_pane::{TextPane, expand_tabs, max_line_width};
