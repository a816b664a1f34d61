//! File handler implementation

use crate::core::{Handler, LoggerError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends each message as a line to a file
///
/// The file is opened in append mode on every call (created if absent) and
/// closed before the call returns, on success and failure alike. With the
/// `file-lock` feature the append holds an exclusive advisory lock.
///
/// # Example
///
/// ```no_run
/// use pipeline_logger::handlers::FileHandler;
/// use pipeline_logger::Handler;
///
/// let handler = FileHandler::new("/var/log/app.log");
/// handler.handle("2025-06-08 ERROR: disk full");
/// ```
#[derive(Debug, Clone)]
pub struct FileHandler {
    path: PathBuf,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", self.path.display().to_string(), e)
            })?;

        #[cfg(feature = "file-lock")]
        fs2::FileExt::lock_exclusive(&file).map_err(|e| {
            LoggerError::io_operation("locking log file", self.path.display().to_string(), e)
        })?;

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        // Dropping the file closes it and releases the lock.
        file.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("appending to log file", self.path.display().to_string(), e)
        })
    }
}

impl Handler for FileHandler {
    fn try_handle(&self, text: &str) -> Result<()> {
        self.append_line(text)
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_and_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.txt");
        let handler = FileHandler::new(&path);

        handler.try_handle("first").unwrap();
        handler.try_handle("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_appends_to_existing_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing.log");
        fs::write(&path, "kept\n").unwrap();

        FileHandler::new(&path).try_handle("added").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\nadded\n");
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("out.txt");
        let handler = FileHandler::new(&path);

        let err = handler.try_handle("lost").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));

        // The provided handle() swallows the same failure
        handler.handle("lost");
        assert!(!path.exists());
    }

    #[test]
    fn test_multiline_text_is_written_verbatim() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("raw.log");

        FileHandler::new(&path).try_handle("line one\nline two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }
}
