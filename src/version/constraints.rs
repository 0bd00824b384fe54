//! Version constraint grammar for dependency maps.
//!
//! This is a syntax check only. Nothing here compares versions or decides
//! whether a constraint can be satisfied; `99.99.99` is as good as `1.0`.
//!
//! # Accepted Forms
//!
//! Tried in order, and mutually exclusive:
//!
//! 1. `""` - no constraint
//! 2. `"*"` - any version
//! 3. `"dev-<anything>"` - a branch
//! 4. A single clause: an optional operator (`^ ~ >= <= > < != ==`) followed by
//!    a version token of one to three numeric components with optional
//!    `-prerelease` and `+build` suffixes, e.g. `^1.2`, `>=7.4`, `1.0.0-beta.1+exp`
//! 5. A range: exactly two single clauses separated by whitespace, e.g.
//!    `>=1.0 <2.0`. Operators are optional on both sides, so `1.0 2.0` is a range.
//!
//! Comma or `||` connectives, wildcards such as `1.0.*`, `v` prefixes and
//! stability flags (`@dev`) are rejected.
//!
//! # Examples
//!
//! ```rust
//! use composer_manifest::version::constraints::{ConstraintForm, classify, validate};
//!
//! assert_eq!(classify("^1.0")?, ConstraintForm::Single);
//! assert_eq!(classify(">=1.0 <2.0")?, ConstraintForm::Range);
//! assert_eq!(classify("dev-main")?, ConstraintForm::DevBranch);
//! assert!(validate("latest").is_err());
//! # Ok::<(), composer_manifest::core::ComposerError>(())
//! ```

use crate::core::{ComposerError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Operator, then 1-3 numeric components, then optional pre-release and build suffixes.
const CLAUSE: &str = r"(?:\^|~|>=|<=|!=|==|>|<)?[0-9]+(?:\.[0-9]+){0,2}(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?";

static SINGLE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{CLAUSE}$")).expect("single clause pattern is a valid regex")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{CLAUSE}\s+{CLAUSE}$")).expect("range pattern is a valid regex")
});

/// Prefix marking a branch constraint.
pub const DEV_BRANCH_PREFIX: &str = "dev-";

/// Which accepted form a constraint string matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintForm {
    /// Empty string: no constraint
    Unconstrained,
    /// Exactly `*`
    Wildcard,
    /// `dev-` followed by a branch name
    DevBranch,
    /// One optionally prefixed version token
    Single,
    /// Two single clauses separated by whitespace
    Range,
}

impl fmt::Display for ConstraintForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unconstrained => "unconstrained",
            Self::Wildcard => "wildcard",
            Self::DevBranch => "dev branch",
            Self::Single => "single version",
            Self::Range => "range",
        };
        f.write_str(label)
    }
}

/// Determine which accepted form `version` has.
///
/// # Errors
///
/// [`ComposerError::InvalidVersionFormat`] when none of the forms match.
pub fn classify(version: &str) -> Result<ConstraintForm> {
    if version.is_empty() {
        return Ok(ConstraintForm::Unconstrained);
    }
    if version == "*" {
        return Ok(ConstraintForm::Wildcard);
    }
    if version.starts_with(DEV_BRANCH_PREFIX) {
        return Ok(ConstraintForm::DevBranch);
    }
    if SINGLE_CLAUSE.is_match(version) {
        return Ok(ConstraintForm::Single);
    }
    if RANGE.is_match(version) {
        return Ok(ConstraintForm::Range);
    }

    Err(ComposerError::InvalidVersionFormat {
        version: version.to_string(),
    })
}

/// Check that `version` is an accepted constraint string.
pub fn validate(version: &str) -> Result<()> {
    classify(version).map(|_| ())
}
