//! Content loading
//!
//! A [`Document`] is the in-memory line sequence of a text file, produced by
//! [`load`]. Documents are never edited: every load builds a new one that
//! replaces the previous document wholesale.
//!
//! Lines are split on `\n`, `\r\n` or a lone `\r`. A trailing terminator does
//! not produce an extra empty line, so `"a\nb\n"` and `"a\nb"` both load as
//! `["a", "b"]`. [`Document::text`] joins the lines back with a single `\n`,
//! which does not preserve the original line-ending bytes.

mod error;

pub use error::{DocumentError, Result};

use crate::filter::{self, FilteredLines};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lines of a text file, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    size: u64,
}

impl Document {
    /// Build a document from already-read text
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
            size: text.len() as u64,
        }
    }

    /// Source path of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// All lines in file order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Size of the file in bytes at load time
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Whether the document has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with a single `\n`
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Keep the lines containing `query`, in document order
    #[must_use]
    pub fn filter(&self, query: &str) -> FilteredLines {
        FilteredLines::new(query, filter::filter_lines(&self.lines, query))
    }

    /// Human readable size, e.g. `1.5 KiB`
    #[must_use]
    pub fn display_size(&self) -> String {
        use byte_unit::{Byte, UnitType};

        Byte::from_u64(self.size)
            .get_appropriate_unit(UnitType::Binary)
            .to_string()
    }
}

/// Read a whole file as UTF-8 text and split it into lines
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read and
/// [`DocumentError::Encoding`] if it is not valid UTF-8.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading document");

    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            DocumentError::Encoding {
                path: path.to_path_buf(),
            }
        } else {
            DocumentError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let document = Document::from_text(path, &text);
    info!(
        path = %path.display(),
        lines = document.line_count(),
        bytes = document.size(),
        "document loaded"
    );
    Ok(document)
}

/// Split text on `\n`, `\r\n` and lone `\r`
///
/// A terminator at the very end does not start a new line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(idx) = rest.find(['\n', '\r']) {
            lines.push(rest[..idx].to_string());
            let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[idx + terminator..];
        } else {
            lines.push(rest.to_string());
            break;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempText;

    #[test]
    fn test_split_unix_lines() {
        assert_eq!(split_lines("apple\nbanana\ngrape\n"), vec!["apple", "banana", "grape"]);
        assert_eq!(split_lines("apple\nbanana\ngrape"), vec!["apple", "banana", "grape"]);
    }

    #[test]
    fn test_split_mixed_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("\r\n\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_load_reads_lines_in_order() {
        let file = TempText::new("fruit.txt", "apple\nbanana\ngrape\n");
        let doc = load(file.path()).unwrap();

        assert_eq!(doc.lines(), ["apple", "banana", "grape"]);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.size(), 19);
        assert_eq!(doc.path(), file.path());
        assert_eq!(doc.name(), "fruit.txt");
    }

    #[test]
    fn test_text_rejoins_with_single_newline() {
        let file = TempText::new("crlf.txt", "one\r\ntwo\r\n");
        let doc = load(file.path()).unwrap();

        assert_eq!(doc.text(), "one\ntwo");
    }

    #[test]
    fn test_load_is_idempotent() {
        let file = TempText::new("same.txt", "x\ny\n");

        let first = load(file.path()).unwrap();
        let second = load(file.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn test_load_empty_file() {
        let file = TempText::new("empty.txt", "");
        let doc = load(file.path()).unwrap();

        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load(&missing).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert_eq!(err.path(), missing);
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let file = TempText::with_bytes("binary.bin", &[0x66, 0x6f, 0xff, 0xfe, 0x0a]);

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Encoding { .. }));
    }

    #[test]
    fn test_display_size() {
        let doc = Document::from_text("a.txt", "hello");
        let size = doc.display_size();
        assert!(size.starts_with('5'));
        assert!(size.ends_with('B'));
    }
}
