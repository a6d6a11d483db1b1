//! Textsift - a terminal text viewer with a line filter
//!
//! This library loads a text file into memory, displays it, and narrows the
//! displayed lines down to those containing a literal, case-sensitive query.
//! The terminal front end lives in [`ui`]; everything below it is independent
//! of the terminal and can be driven directly.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod document;
pub mod filter;
pub mod logging;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TextsiftError {
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}
