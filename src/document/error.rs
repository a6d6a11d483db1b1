//! Document error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a document from disk
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read (missing, permission denied, a directory, ...)
    #[error("{}: {source}", .path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 text
    #[error("{}: file is not valid UTF-8 text", .path.display())]
    Encoding {
        /// Path that was being read
        path: PathBuf,
    },
}

impl DocumentError {
    /// Path of the file that failed to load
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Encoding { path } => path,
        }
    }
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
