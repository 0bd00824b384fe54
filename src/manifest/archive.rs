//! The `archive` block: paths left out of generated package archives.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Patterns Composer users commonly exclude from archives.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "/.*",
    "/*.md",
    "/composer.json",
    "/composer.lock",
    "/vendor",
    "/tests",
    "/test",
    "/docs",
    "/doc",
];

/// Archive configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    /// Excluded path patterns, in insertion order
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Other keys (`name`, ...), kept verbatim
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Archive {
    /// An archive block pre-filled with [`DEFAULT_EXCLUSIONS`].
    #[must_use]
    pub fn with_default_exclusions() -> Self {
        Self {
            exclude: DEFAULT_EXCLUSIONS.iter().map(|p| (*p).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Whether nothing would be written for this block.
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.other.is_empty()
    }
}

/// Append `pattern` unless an identical pattern is already listed.
pub fn add_exclusion(archive: &mut Archive, pattern: &str) {
    if archive.exclude.iter().any(|p| p == pattern) {
        return;
    }
    archive.exclude.push(pattern.to_string());
}

/// Remove the first occurrence of `pattern`, returning whether one was found.
pub fn remove_exclusion(archive: &mut Archive, pattern: &str) -> bool {
    match archive.exclude.iter().position(|p| p == pattern) {
        Some(index) => {
            archive.exclude.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_exclusion_is_idempotent() {
        let mut archive = Archive::default();
        add_exclusion(&mut archive, "/tests");
        add_exclusion(&mut archive, "/docs");
        add_exclusion(&mut archive, "/tests");

        assert_eq!(archive.exclude, vec!["/tests", "/docs"]);
    }

    #[test]
    fn test_remove_exclusion_keeps_order() {
        let mut archive = Archive::with_default_exclusions();
        assert!(remove_exclusion(&mut archive, "/vendor"));
        assert!(!remove_exclusion(&mut archive, "/vendor"));
        assert!(!remove_exclusion(&mut archive, "/nonexistent"));

        assert_eq!(archive.exclude.len(), DEFAULT_EXCLUSIONS.len() - 1);
        assert_eq!(archive.exclude[3], "/composer.lock");
        assert_eq!(archive.exclude[4], "/tests");
    }

    #[test]
    fn test_remove_exclusion_removes_first_match_only() {
        // Duplicates can arrive through parsing
        let mut archive = Archive {
            exclude: vec!["/a".to_string(), "/b".to_string(), "/a".to_string()],
            ..Archive::default()
        };
        assert!(remove_exclusion(&mut archive, "/a"));
        assert_eq!(archive.exclude, vec!["/b", "/a"]);
    }

    #[test]
    fn test_sibling_keys_round_trip() {
        let input = serde_json::json!({"exclude": ["/x"], "name": "acme-blog"});
        let archive: Archive = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(archive.other["name"], "acme-blog");
        assert!(!archive.is_empty());
        assert_eq!(serde_json::to_value(&archive).unwrap(), input);
    }

    #[test]
    fn test_null_exclude_reads_as_empty() {
        let archive: Archive = serde_json::from_value(serde_json::json!({"exclude": null})).unwrap();
        assert!(archive.is_empty());
    }
}
