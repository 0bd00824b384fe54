//! Integration test suite for composer-manifest
//!
//! End-to-end tests that drive the `composer-manifest` binary against real
//! files in temporary directories, plus library round trips through disk.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: every subcommand, exit codes and file effects
//! - **round_trip**: load, edit, save and reload through the library API

mod cli;
mod round_trip;

use assert_cmd::Command;
use std::path::Path;

/// The binary under test, running in `dir`.
pub fn composer_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("composer-manifest").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
