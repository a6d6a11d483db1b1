//! Testing utilities for textsift
//!
//! Provides [`TempText`], a text file inside its own temporary directory that
//! is removed when the wrapper goes out of scope, and a lock for tests that
//! replace the panic hook.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that swap the process-wide panic hook
pub static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

/// A temporary text file, cleaned up on drop
pub struct TempText {
    _dir: TempDir,
    path: PathBuf,
}

impl TempText {
    /// Create a file named `name` containing `content`
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    pub fn new(name: impl AsRef<Path>, content: &str) -> Self {
        Self::with_bytes(name, content.as_bytes())
    }

    /// Create a file named `name` containing raw bytes
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    pub fn with_bytes(name: impl AsRef<Path>, content: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write temp file");
        Self { _dir: dir, path }
    }

    /// Path of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file's content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn rewrite(&self, content: &str) {
        fs::write(&self.path, content).expect("Failed to rewrite temp file");
    }

    /// Delete the file, keeping the directory
    ///
    /// # Panics
    /// Panics if the file cannot be removed.
    pub fn remove(&self) {
        fs::remove_file(&self.path).expect("Failed to remove temp file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_text_cleanup() {
        let path = {
            let file = TempText::new("cleanup.txt", "content");
            assert!(file.path().exists());
            file.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_temp_text_rewrite_and_remove() {
        let file = TempText::new("rewrite.txt", "old");
        file.rewrite("new");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "new");

        file.remove();
        assert!(!file.path().exists());
    }
}
