//! Document-level validation: name, description length, minimum stability.

use crate::constants::MIN_DESCRIPTION_LENGTH;
use crate::core::{ComposerError, Result};
use crate::manifest::{ComposerJson, name};
use crate::version;
use std::fmt;
use std::str::FromStr;

/// Release maturity, ordered from least to most stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stability {
    Dev,
    Alpha,
    Beta,
    Rc,
    Stable,
}

impl Stability {
    /// All levels, least stable first.
    pub const ALL: [Self; 5] = [Self::Dev, Self::Alpha, Self::Beta, Self::Rc, Self::Stable];

    /// The spelling used in `composer.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "RC",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = ComposerError;

    /// Exact, case-sensitive match: `RC` is accepted, `rc` is not.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ComposerError::InvalidStability {
                stability: s.to_string(),
            })
    }
}

/// Validate the identity fields of a manifest.
///
/// Each argument is only checked when non-empty:
/// - `name` against the package name grammar
/// - `description` must have at least ten characters
/// - `stability` must be one of `dev`, `alpha`, `beta`, `RC`, `stable`
///
/// The first failure is returned.
///
/// ```rust
/// use composer_manifest::manifest::validate;
///
/// assert!(validate("acme/blog", "A blogging engine", "beta").is_ok());
/// assert!(validate("", "", "").is_ok());
/// assert!(validate("acme/blog", "Too short", "").is_err());
/// ```
pub fn validate(name: &str, description: &str, stability: &str) -> Result<()> {
    if !name.is_empty() {
        name::validate(name)?;
    }

    let length = description.chars().count();
    if length > 0 && length < MIN_DESCRIPTION_LENGTH {
        return Err(ComposerError::DescriptionTooShort {
            length,
            minimum: MIN_DESCRIPTION_LENGTH,
        });
    }

    if !stability.is_empty() {
        stability.parse::<Stability>()?;
    }

    Ok(())
}

impl ComposerJson {
    /// Run [`validate`] over this manifest's name, description and
    /// `minimum-stability`.
    pub fn validate(&self) -> Result<()> {
        validate(&self.name, &self.description, &self.minimum_stability)
    }

    /// Check every `require` and `require-dev` constraint against the version
    /// grammar. Runtime dependencies are checked first, each map in key order.
    pub fn validate_constraints(&self) -> Result<()> {
        for (package, constraint) in self.require.iter().chain(&self.require_dev).flatten() {
            tracing::debug!("Checking constraint {:?} for {}", constraint, package);
            version::validate(constraint)?;
        }
        Ok(())
    }
}
