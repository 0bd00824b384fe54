//! Version constraint handling.
//!
//! - [`constraints`] - the constraint grammar used for `require` / `require-dev` values
//!
//! Constraints stay plain strings inside the manifest; this module only decides
//! whether a string is well formed.

pub mod constraints;

pub use constraints::{ConstraintForm, classify, validate};
