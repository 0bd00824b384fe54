//! Filesystem helpers shared by the manifest and CLI layers.
//!
//! - [`fs`] - atomic writes

pub mod fs;

pub use fs::atomic_write;
