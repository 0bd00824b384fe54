//! Test utilities for composer-manifest
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! - [`init_test_logging`] - one-time tracing setup for tests
//! - [`fixtures`] - sample `composer.json` documents
//!
//! # Example
//!
//! ```rust,ignore
//! use composer_manifest::test_utils::{ManifestFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let temp = tempfile::TempDir::new().unwrap();
//! let path = ManifestFixture::library().write_to(temp.path()).unwrap();
//! assert!(path.ends_with("composer.json"));
//! ```

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `Some(level)` that level is used;
/// with `None` logging is enabled only when `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=composer_manifest=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
