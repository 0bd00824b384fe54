//! Package name grammar (`vendor/project`).
//!
//! Names are only ever stored as the original string; these functions split
//! and check them on demand.

use crate::constants::NAMESPACE_SEPARATOR;
use crate::core::{ComposerError, Result};
use regex::Regex;
use std::sync::LazyLock;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([_.-]?[a-z0-9]+)*$").expect("segment pattern is a valid regex")
});

/// Split `name` into `(vendor, project)`.
///
/// Structural only: the segments are not checked against the character grammar,
/// so `"Acme/Blog"` and even `"/x"` split successfully.
///
/// # Errors
///
/// [`ComposerError::MalformedName`] unless `name` contains exactly one `/`.
///
/// # Examples
///
/// ```rust
/// use composer_manifest::manifest::name;
///
/// assert_eq!(name::split("symfony/console")?, ("symfony", "console"));
/// assert!(name::split("invalid-name").is_err());
/// # Ok::<(), composer_manifest::core::ComposerError>(())
/// ```
pub fn split(name: &str) -> Result<(&str, &str)> {
    let mut parts = name.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(vendor), Some(project), None) => Ok((vendor, project)),
        _ => Err(ComposerError::MalformedName {
            name: name.to_string(),
        }),
    }
}

/// Whether a single segment satisfies the lowercase alphanumeric grammar.
pub fn is_valid_segment(segment: &str) -> bool {
    SEGMENT.is_match(segment)
}

/// Validate a full package name.
///
/// Checks, in order: non-empty, exactly one `/`, vendor segment, project segment.
pub fn validate(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ComposerError::EmptyName);
    }

    let (vendor, project) = split(name)?;

    if !is_valid_segment(vendor) {
        return Err(ComposerError::InvalidVendorSegment {
            vendor: vendor.to_string(),
        });
    }
    if !is_valid_segment(project) {
        return Err(ComposerError::InvalidProjectSegment {
            project: project.to_string(),
        });
    }

    Ok(())
}

/// Build a PHP namespace (without trailing separator) from the two name segments.
///
/// Each segment gets its first character upper-cased when it is an ASCII `a`-`z`;
/// the rest is left alone, so `my-vendor` becomes `My-vendor`.
///
/// ```rust
/// use composer_manifest::manifest::name::to_namespace;
///
/// assert_eq!(to_namespace("acme", "blog"), "Acme\\Blog");
/// assert_eq!(to_namespace("123abc", "x"), "123abc\\X");
/// ```
pub fn to_namespace(vendor: &str, project: &str) -> String {
    format!("{}{}{}", ucfirst(vendor), NAMESPACE_SEPARATOR, ucfirst(project))
}

fn ucfirst(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        }
        _ => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("symfony/console").unwrap(), ("symfony", "console"));
        assert_eq!(split("Acme/Blog").unwrap(), ("Acme", "Blog"));
        assert_eq!(split("/project").unwrap(), ("", "project"));

        for name in ["invalid-name", "a/b/c", "a//b", ""] {
            assert!(
                matches!(split(name), Err(ComposerError::MalformedName { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_valid_names() {
        for name in [
            "symfony/console",
            "vendor/project",
            "my-vendor/my_project",
            "a/b",
            "0/9",
            "doctrine/orm2",
            "guzzlehttp/guzzle.psr7",
            "a1.b2_c3-d4/x",
        ] {
            assert!(validate(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_validate_error_kinds() {
        assert_eq!(validate(""), Err(ComposerError::EmptyName));
        assert!(matches!(validate("badname"), Err(ComposerError::MalformedName { .. })));
        assert!(matches!(validate("a/b/c"), Err(ComposerError::MalformedName { .. })));

        assert_eq!(
            validate("Invalid/name"),
            Err(ComposerError::InvalidVendorSegment {
                vendor: "Invalid".to_string()
            })
        );
        assert_eq!(
            validate("vendor/Project"),
            Err(ComposerError::InvalidProjectSegment {
                project: "Project".to_string()
            })
        );
        // Vendor is checked first
        assert!(matches!(validate("-a/-b"), Err(ComposerError::InvalidVendorSegment { .. })));
    }

    #[test]
    fn test_segment_separators() {
        for bad in ["", "-vendor", "vendor-", "ven--dor", "ven._dor", "_x", "x.", "ven dor", "vendör"] {
            assert!(!is_valid_segment(bad), "{bad:?} should be rejected");
        }
        for good in ["vendor", "ven-dor", "ven.dor", "ven_dor", "v1-2.3_4"] {
            assert!(is_valid_segment(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_to_namespace() {
        assert_eq!(to_namespace("vendor", "project"), "Vendor\\Project");
        assert_eq!(to_namespace("Acme", "blog"), "Acme\\Blog");
        assert_eq!(to_namespace("my-vendor", "my-project"), "My-vendor\\My-project");
        assert_eq!(to_namespace("", ""), "\\");
    }
}
