//! Reading, writing and backing up manifests.
//!
//! Ingestion is two-step: [`parser`] turns bytes into an untyped JSON object,
//! then serde converts that object into [`ComposerJson`]. Output goes the other
//! way, through a generic [`Value`] tree so keys come out sorted.

use crate::constants::{DEFAULT_BACKUP_SUFFIX, JSON_INDENT, MANIFEST_FILENAME};
use crate::core::{ComposerError, FileOperation, FileResultExt, Result};
use crate::manifest::{ComposerJson, RawDocument, parser};
use crate::utils::fs::atomic_write;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

impl FromStr for ComposerJson {
    type Err = ComposerError;

    /// Parse a manifest from JSON text. A bare `null` gives an empty manifest.
    fn from_str(input: &str) -> Result<Self> {
        Self::from_raw(parser::parse_str(input)?)
    }
}

impl ComposerJson {
    /// Convert an untyped document into a manifest.
    ///
    /// `None` (the `null` payload) becomes [`ComposerJson::default`].
    ///
    /// # Errors
    ///
    /// [`ComposerError::StructuralMismatch`] when a field has the wrong type,
    /// e.g. `"require": ["php"]`.
    pub fn from_raw(raw: Option<RawDocument>) -> Result<Self> {
        let Some(raw) = raw else {
            tracing::debug!("Manifest payload is null, using an empty manifest");
            return Ok(Self::default());
        };

        serde_json::from_value(Value::Object(raw)).map_err(|e| ComposerError::StructuralMismatch {
            reason: e.to_string(),
        })
    }

    /// Parse a manifest from raw bytes.
    pub fn from_slice(input: &[u8]) -> Result<Self> {
        Self::from_raw(parser::parse_slice(input)?)
    }

    /// Parse a manifest from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_raw(parser::parse_reader(reader)?)
    }

    /// Load the manifest file at `path`.
    ///
    /// ```rust,no_run
    /// use composer_manifest::manifest::ComposerJson;
    /// use std::path::Path;
    ///
    /// let composer = ComposerJson::from_path(Path::new("composer.json"))?;
    /// println!("{} requires {} packages", composer.name, composer.all_dependencies().len());
    /// # Ok::<(), composer_manifest::core::ComposerError>(())
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_raw(parser::parse_file(path)?)
    }

    /// Load `composer.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_path(&dir.join(MANIFEST_FILENAME))
    }

    /// The manifest as a generic JSON tree.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ComposerError::SerializationFailed {
            reason: e.to_string(),
        })
    }

    /// Serialize to JSON text. `pretty` uses four-space indentation.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let value = self.to_value()?;

        let bytes = if pretty {
            let mut buffer = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
            value
                .serialize(&mut serializer)
                .map_err(|e| ComposerError::SerializationFailed {
                    reason: e.to_string(),
                })?;
            buffer
        } else {
            serde_json::to_vec(&value).map_err(|e| ComposerError::SerializationFailed {
                reason: e.to_string(),
            })?
        };

        String::from_utf8(bytes).map_err(|e| ComposerError::SerializationFailed {
            reason: e.to_string(),
        })
    }

    /// Write the manifest to `path`, replacing any existing file atomically.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        let mut json = self.to_json(pretty)?;
        if pretty {
            json.push('\n');
        }
        tracing::debug!("Saving manifest to {}", path.display());
        atomic_write(path, json.as_bytes())
    }
}

/// Copy the file at `path` byte for byte to `path + suffix`.
///
/// An empty `suffix` means `.bak`. Returns the backup path. Taking a backup
/// before saving changes is a convention left to the caller.
///
/// # Errors
///
/// - [`ComposerError::SourceNotFound`] / [`ComposerError::SourceUnreadable`]
///   when the original cannot be read
/// - [`ComposerError::SinkUnwritable`] when the backup cannot be written
pub fn create_backup(path: &Path, suffix: &str) -> Result<PathBuf> {
    let suffix = if suffix.is_empty() {
        DEFAULT_BACKUP_SUFFIX
    } else {
        suffix
    };

    let mut backup = OsString::from(path.as_os_str());
    backup.push(suffix);
    let backup = PathBuf::from(backup);

    let content = std::fs::read(path).with_file_context(FileOperation::Read, path)?;
    std::fs::write(&backup, content).with_file_context(FileOperation::Write, &backup)?;

    tracing::debug!("Backed up {} to {}", path.display(), backup.display());
    Ok(backup)
}
