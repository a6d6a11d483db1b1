//! UI error types

use thiserror::Error;

/// Errors that can occur while running the terminal UI
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn to or restored
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
