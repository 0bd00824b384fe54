//! composer-manifest - typed access to PHP Composer manifests
//!
//! Reads, validates, creates, edits and writes `composer.json` files. There is
//! no dependency resolution, no network access and no package installation:
//! the crate only deals with the manifest document itself.
//!
//! # Architecture Overview
//!
//! - Loading is two-step: bytes become an untyped JSON object
//!   ([`manifest::parser`]), which serde turns into [`manifest::ComposerJson`].
//! - Grammars are pure functions: [`manifest::name`] for `vendor/project`
//!   names and [`version`] for constraint strings.
//! - Sub-records (autoload, archive, repositories, config) are plain fields of
//!   the document with their own modules; the document's accessors delegate
//!   to them.
//! - Every failure is one [`core::ComposerError`] variant, returned by value.
//!
//! # Core Modules
//!
//! - [`manifest`] - the document model, ingestion, serialization and accessors
//! - [`version`] - version constraint grammar
//! - [`core`] - error types and io error classification
//! - [`constants`] - defaults used when creating manifests
//! - [`utils`] - atomic file writes
//! - [`cli`] - the `composer-manifest` command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use composer_manifest::manifest::ComposerJson;
//! use std::path::Path;
//!
//! let path = Path::new("composer.json");
//! let mut composer = ComposerJson::from_path(path)?;
//! composer.add_dependency("monolog/monolog", "^3.0")?;
//! composer.validate_constraints()?;
//! composer.save(path, true)?;
//! # Ok::<(), composer_manifest::core::ComposerError>(())
//! ```

// Document model
pub mod constants;
pub mod manifest;
pub mod version;

// Supporting modules
pub mod cli;
pub mod core;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
