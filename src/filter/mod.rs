//! Line filtering
//!
//! A line matches when the query occurs in it as a contiguous, case-sensitive
//! substring. There is no regex, word-boundary or case-folding support. The
//! result keeps the source order and never reorders or deduplicates lines.
//!
//! An empty query is contained in every string, so filtering with `""`
//! returns every line. Interactive callers refuse an empty query before they
//! get here.

use crate::document::{self, Result};
use std::path::Path;
use tracing::info;

/// Lines that matched a query, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredLines {
    query: String,
    lines: Vec<String>,
}

impl FilteredLines {
    /// Wrap an already-filtered line list
    #[must_use]
    pub fn new(query: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            query: query.into(),
            lines,
        }
    }

    /// The query that produced this result
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of matching lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Matching lines joined with a single `\n`
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Keep the lines that contain `query`, preserving order
#[must_use]
pub fn filter_lines(lines: &[String], query: &str) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.contains(query))
        .cloned()
        .collect()
}

/// Re-read `path` and keep the lines that contain `query`
///
/// This always goes back to disk, independent of any document already held
/// in memory.
///
/// # Errors
///
/// Returns a [`document::DocumentError`] if the file cannot be read as text.
pub fn search(path: impl AsRef<Path>, query: &str) -> Result<FilteredLines> {
    let document = document::load(path)?;
    let result = document.filter(query);
    info!(
        path = %document.path().display(),
        query,
        matches = result.len(),
        "search finished"
    );
    Ok(result)
}
