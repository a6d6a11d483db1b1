//! Terminal user interface
//!
//! A full-screen ratatui front end over [`crate::session::Session`]:
//!
//! ```text
//! ┌ Text File Search ───────────────────────────────────┐
//! │ Search: an                                          │
//! └─────────────────────────────────────────────────────┘
//! ┌ Original (1-3/3) ────────┐┌ Filtered (1-1/1) ───────┐
//! │ apple                    ││ banana                  │
//! │ banana                   ││                         │
//! │ grape                    ││                         │
//! └──────────────────────────┘└─────────────────────────┘
//! ┌ Status ─────────────────────────────────────────────┐
//! │ ℹ 1 matching lines     fruit.txt · 3 lines · 1 match│
//! └─────────────────────────────────────────────────────┘
//!  ^O Load File   Enter Search   ^Q Quit   Tab Switch pane
//! ```
//!
//! The search bar and panes are drawn every frame from [`AppState`]; the
//! file picker, message dialogs and help are overlays selected by [`Mode`].

pub mod app;
pub mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod types;
pub mod widgets;

pub use app::App;
pub use error::{Result, UiError};
pub use state::{AppState, Mode};
pub use theme::Theme;
pub use types::{MessageLevel, Pane, StatusMessage};
