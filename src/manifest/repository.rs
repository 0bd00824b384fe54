//! Entries of the `repositories` list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const PACKAGIST_URLS: &[&str] = &["https://repo.packagist.org", "https://packagist.org"];

/// A custom package repository.
///
/// Keys other than the four named fields (`canonical`, `only`, `exclude`, ...)
/// are kept in `other` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository type: `composer`, `vcs`, `git`, `path`, `package`, ...
    #[serde(rename = "type", default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "String::is_empty")]
    pub repo_type: String,

    /// Repository URL or local path
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Inline package definition for `package` repositories
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub package: BTreeMap<String, Value>,

    /// Transport options
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,

    /// Any other keys
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Repository {
    /// A repository of the given type and URL with no package data or options.
    pub fn new(repo_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            repo_type: repo_type.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether this is a raw version-control repository (`git`, `svn`, `hg`).
    pub fn is_vcs(&self) -> bool {
        matches!(self.repo_type.as_str(), "git" | "svn" | "hg")
    }

    /// Whether this points at packagist.org.
    pub fn is_packagist(&self) -> bool {
        self.repo_type == "composer" && PACKAGIST_URLS.contains(&self.url.as_str())
    }
}
