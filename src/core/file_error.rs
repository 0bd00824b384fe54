//! Structured file system error handling
//!
//! I/O failures are classified at the operation site: the caller states what it
//! was doing ([`FileOperation`]) and the io error is mapped onto the matching
//! [`ComposerError`] variant instead of being passed through as text.

use crate::core::ComposerError;
use std::io::ErrorKind;
use std::path::Path;

/// Types of file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a manifest or a file about to be backed up
    Read,
    /// Writing a manifest or a backup
    Write,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
        }
    }
}

/// Map an io error raised while performing `operation` on `path`.
///
/// Reads distinguish a missing file from any other failure; every write
/// failure is a [`ComposerError::SinkUnwritable`].
pub fn classify_io_error(operation: FileOperation, path: &Path, error: &std::io::Error) -> ComposerError {
    let path = path.display().to_string();
    match operation {
        FileOperation::Read if error.kind() == ErrorKind::NotFound => {
            ComposerError::SourceNotFound { path }
        }
        FileOperation::Read => ComposerError::SourceUnreadable {
            path,
            reason: error.to_string(),
        },
        FileOperation::Write => ComposerError::SinkUnwritable {
            path,
            reason: error.to_string(),
        },
    }
}

/// Extension trait for io results to add file operation context
pub trait FileResultExt<T> {
    /// Convert the io error into a [`ComposerError`] for `operation` on `path`
    fn with_file_context(self, operation: FileOperation, path: &Path) -> Result<T, ComposerError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(self, operation: FileOperation, path: &Path) -> Result<T, ComposerError> {
        self.map_err(|io_error| {
            tracing::debug!("{} {} failed: {}", operation, path.display(), io_error);
            classify_io_error(operation, path, &io_error)
        })
    }
}
