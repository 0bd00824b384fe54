//! Core types shared by every module
//!
//! - [`error`] - the [`ComposerError`] enumeration, the crate-wide [`Result`]
//!   alias, and CLI-facing [`ErrorContext`] / [`user_friendly_error`]
//! - [`file_error`] - mapping of io errors onto source/sink error kinds

pub mod error;
pub mod file_error;

pub use error::{ComposerError, ErrorContext, Result, user_friendly_error};
pub use file_error::{FileOperation, FileResultExt};
