//! Application session
//!
//! The session owns the current [`Document`] and the last [`FilteredLines`],
//! and implements the two user actions on them:
//!
//! - [`Session::load`] replaces the document and clears the filtered result.
//!   A failed load leaves both untouched.
//! - [`Session::search`] requires a loaded document and a non-empty query.
//!   When either is missing it fails with [`SessionError::MissingInput`]
//!   without touching the disk. A failed search leaves the previous filtered
//!   result in place.
//!
//! By default search filters the in-memory document. With
//! [`Session::reread_on_search`] enabled it reads the file again instead, so
//! changes made to the file after loading show up in the filtered result.

use crate::document::{self, Document, DocumentError};
use crate::filter::{self, FilteredLines};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Message shown when search is triggered without a document or a query
pub const MISSING_INPUT_MESSAGE: &str = "Please load a file and enter a search string.";

/// Errors reported by session actions
#[derive(Debug, Error)]
pub enum SessionError {
    /// Search was requested with no document loaded or an empty query
    #[error("Please load a file and enter a search string.")]
    MissingInput,

    /// Loading a new document failed
    #[error("Error loading file: {0}")]
    Load(#[source] DocumentError),

    /// Re-reading the document for a search failed
    #[error("Error reading file: {0}")]
    Search(#[source] DocumentError),
}

impl SessionError {
    /// Whether this is an input validation failure rather than an I/O failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingInput)
    }
}

/// Result type for session actions
pub type Result<T> = std::result::Result<T, SessionError>;

/// Current document and filter result
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Document>,
    filtered: Option<FilteredLines>,
    reread_on_search: bool,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub const fn new(reread_on_search: bool) -> Self {
        Self {
            document: None,
            filtered: None,
            reread_on_search,
        }
    }

    /// Whether search re-reads the file from disk
    #[must_use]
    pub const fn reread_on_search(&self) -> bool {
        self.reread_on_search
    }

    /// The loaded document, if any
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// The last successful search result, cleared by every load
    #[must_use]
    pub const fn filtered(&self) -> Option<&FilteredLines> {
        self.filtered.as_ref()
    }

    /// Whether a document is loaded (search is only allowed when it is)
    #[must_use]
    pub const fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Lines shown in the original pane
    #[must_use]
    pub fn original_lines(&self) -> &[String] {
        self.document.as_ref().map(Document::lines).unwrap_or_default()
    }

    /// Lines shown in the filtered pane
    #[must_use]
    pub fn filtered_lines(&self) -> &[String] {
        self.filtered.as_ref().map(FilteredLines::lines).unwrap_or_default()
    }

    /// Text of the original pane
    #[must_use]
    pub fn original_text(&self) -> String {
        self.original_lines().join("\n")
    }

    /// Text of the filtered pane
    #[must_use]
    pub fn filtered_text(&self) -> String {
        self.filtered_lines().join("\n")
    }

    /// Load `path`, replacing the current document
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Load`] if the file cannot be read. The session
    /// is unchanged in that case.
    pub fn load(&mut self, path: &Path) -> Result<&Document> {
        match document::load(path) {
            Ok(doc) => {
                self.filtered = None;
                Ok(self.document.insert(doc))
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                Err(SessionError::Load(e))
            }
        }
    }

    /// Filter the loaded document by `query`
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingInput`] if no document is loaded or the
    /// query is empty, and [`SessionError::Search`] if re-reading the file
    /// fails. The previous filtered result is kept on error.
    pub fn search(&mut self, query: &str) -> Result<&FilteredLines> {
        let document = match &self.document {
            Some(doc) if !query.is_empty() => doc,
            _ => {
                debug!(
                    loaded = self.document.is_some(),
                    empty_query = query.is_empty(),
                    "search rejected"
                );
                return Err(SessionError::MissingInput);
            }
        };

        let result = if self.reread_on_search {
            filter::search(document.path(), query).map_err(|e| {
                warn!(error = %e, "search failed");
                SessionError::Search(e)
            })?
        } else {
            let result = document.filter(query);
            debug!(query, matches = result.len(), "filtered in memory");
            result
        };

        Ok(self.filtered.insert(result))
    }
}
