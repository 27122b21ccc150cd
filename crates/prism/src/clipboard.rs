//! File-backed clipboard for terminal sessions.

use std::io;
use std::path::{Path, PathBuf};

use prism_palette::{Clipboard, ClipboardError};

/// Clipboard that overwrites a file on every write.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        std::fs::write(&self.path, text).map_err(|e| {
            let message = format!("{}: {}", self.path.display(), e);
            match e.kind() {
                io::ErrorKind::PermissionDenied => ClipboardError::Denied(message),
                _ => ClipboardError::Unavailable(message),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipboard.txt");
        let mut clipboard = FileClipboard::new(&path);

        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut clipboard = FileClipboard::new(dir.path().join("missing/clipboard.txt"));
        assert!(matches!(
            clipboard.write_text("text"),
            Err(ClipboardError::Unavailable(_))
        ));
    }
}
