//! Atomic file writes using a temp-and-rename strategy.
//!
//! A reader of the target path sees either the old content or the new content,
//! never a partial write.

use crate::core::{ComposerError, FileOperation, FileResultExt, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `content` to `path`.
///
/// The bytes go to a temporary file in the same directory, are synced to disk,
/// and the temporary file is then renamed over `path`. Missing parent
/// directories are created.
///
/// # Errors
///
/// Every failure is a [`ComposerError::SinkUnwritable`] naming `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use composer_manifest::utils::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("composer.json"), b"{}\n")?;
/// # Ok::<(), composer_manifest::core::ComposerError>(())
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).with_file_context(FileOperation::Write, path)?;

    let mut temp = NamedTempFile::new_in(parent).with_file_context(FileOperation::Write, path)?;
    temp.write_all(content).with_file_context(FileOperation::Write, path)?;
    temp.as_file().sync_all().with_file_context(FileOperation::Write, path)?;

    // Rename over the target
    temp.persist(path).map_err(|e| ComposerError::SinkUnwritable {
        path: path.display().to_string(),
        reason: e.error.to_string(),
    })?;

    Ok(())
}
