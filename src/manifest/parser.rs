//! Raw ingestion: bytes to an untyped JSON object.
//!
//! This is the first half of loading a manifest. The result is handed to
//! [`ComposerJson`](crate::manifest::ComposerJson) for typed conversion.
//!
//! # Top-level values
//!
//! | Input                | Result                        |
//! |----------------------|-------------------------------|
//! | `{...}`              | `Ok(Some(map))`               |
//! | `null`               | `Ok(None)`                    |
//! | `[..]`, `"x"`, `1`   | `Err(StructuralMismatch)`     |
//! | not JSON, empty, `{` | `Err(MalformedInput)`         |
//!
//! A bare `null` is accepted as "no data" while every other non-object value is
//! an error. Loaders built on top turn `None` into an empty document.

use crate::constants::MANIFEST_FILENAME;
use crate::core::{ComposerError, FileOperation, FileResultExt, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// An untyped manifest: the top-level JSON object.
pub type RawDocument = Map<String, Value>;

/// Parse a JSON string.
pub fn parse_str(input: &str) -> Result<Option<RawDocument>> {
    let value: Value = serde_json::from_str(input).map_err(malformed)?;
    into_document(value)
}

/// Parse raw bytes. Invalid UTF-8 is reported as malformed input.
pub fn parse_slice(input: &[u8]) -> Result<Option<RawDocument>> {
    let value: Value = serde_json::from_slice(input).map_err(malformed)?;
    into_document(value)
}

/// Read everything from `reader` and parse it.
///
/// Read failures are reported as [`ComposerError::SourceUnreadable`] with the
/// path `<reader>`.
pub fn parse_reader(mut reader: impl Read) -> Result<Option<RawDocument>> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .with_file_context(FileOperation::Read, Path::new("<reader>"))?;
    parse_slice(&buffer)
}

/// Read and parse the file at `path`.
///
/// # Errors
///
/// - [`ComposerError::SourceNotFound`] if the file does not exist
/// - [`ComposerError::SourceUnreadable`] for any other read failure
/// - the parse errors of [`parse_slice`]
pub fn parse_file(path: &Path) -> Result<Option<RawDocument>> {
    tracing::debug!("Reading manifest from {}", path.display());
    let bytes = std::fs::read(path).with_file_context(FileOperation::Read, path)?;
    parse_slice(&bytes)
}

/// Parse `composer.json` inside `dir`.
pub fn parse_dir(dir: &Path) -> Result<Option<RawDocument>> {
    parse_file(&dir.join(MANIFEST_FILENAME))
}

fn malformed(error: serde_json::Error) -> ComposerError {
    ComposerError::MalformedInput {
        reason: error.to_string(),
    }
}

fn into_document(value: Value) -> Result<Option<RawDocument>> {
    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => Err(ComposerError::StructuralMismatch {
            reason: format!("expected a JSON object at the top level, found {}", json_type_name(&other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
