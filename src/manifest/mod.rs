//! The `composer.json` document model.
//!
//! [`ComposerJson`] is the typed aggregate. It is built either by ingesting
//! bytes ([`ComposerJson::from_str`], [`ComposerJson::from_path`], ...) or by
//! [`ComposerJson::create`] and friends, mutated through guarded accessors,
//! and written back with [`ComposerJson::to_json`] / [`ComposerJson::save`].
//!
//! # Submodules
//!
//! - [`name`] - `vendor/project` grammar
//! - [`dependency`] - dependency map exists/add/remove/merge
//! - [`autoload`] - autoload block and the loosely typed PSR-4 slot
//! - [`archive`], [`repository`], [`config`] - plain sub-records
//! - [`parser`] - bytes to untyped JSON object
//! - [`validation`] - document-level checks and stability levels
//!
//! # Example
//!
//! ```rust
//! use composer_manifest::manifest::ComposerJson;
//!
//! let mut composer = ComposerJson::create("acme/blog", "A small blogging engine")?;
//! composer.add_dependency("symfony/console", "^6.0")?;
//! composer.set_psr4("Acme\\Blog\\Tests\\", "tests/");
//!
//! let psr4 = composer.psr4_map().unwrap();
//! assert_eq!(psr4["Acme\\Blog\\"], "src/");
//!
//! let json = composer.to_json(true)?;
//! assert!(json.contains("\"symfony/console\": \"^6.0\""));
//! # Ok::<(), composer_manifest::core::ComposerError>(())
//! ```
//!
//! # Field Handling
//!
//! Empty strings, empty collections, `false` for `prefer-stable` and absent
//! autoload slots are omitted on output. Keys this model does not know
//! (`$schema`, `funding`, `time`, ...) are kept in [`ComposerJson::other`].

pub mod archive;
pub mod autoload;
pub mod config;
pub mod dependency;
pub mod name;
pub mod parser;
pub mod repository;
pub mod validation;

mod create;
mod manifest_io;
mod manifest_mutations;


pub use archive::Archive;
pub use autoload::{Autoload, NamespaceSlot};
pub use config::Config;
pub use dependency::DependencyMap;
pub use manifest_io::create_backup;
pub use parser::RawDocument;
pub use repository::Repository;
pub use validation::{Stability, validate};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A package author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Contact email
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Personal website
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub homepage: String,

    /// Role in the project, e.g. `Developer`
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub role: String,

    /// Other keys, kept verbatim
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Support channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Support {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub issues: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub forum: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub wiki: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub irc: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub docs: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub chat: String,
    /// Other channels (`rss`, `security`, ...)
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Support {
    /// Whether nothing would be written for this block.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The root of a `composer.json` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposerJson {
    /// Package name, `vendor/project`
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// `library`, `project`, `metapackage`, `composer-plugin`, ...
    #[serde(rename = "type", default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub package_type: String,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub homepage: String,

    /// Usually derived from VCS tags; rarely set by hand
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// A single SPDX identifier or a list of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Support::is_empty")]
    pub support: Support,

    /// Runtime dependencies. `None` when the key is missing.
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub require: Option<DependencyMap>,

    /// Development dependencies. `None` when the key is missing.
    #[serde(rename = "require-dev", default, skip_serializing_if = "is_none_or_empty")]
    pub require_dev: Option<DependencyMap>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub conflict: DependencyMap,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub replace: DependencyMap,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub provide: DependencyMap,

    /// Package name to a free-text reason
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub suggest: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Autoload::is_empty")]
    pub autoload: Autoload,

    #[serde(rename = "autoload-dev", default, deserialize_with = "null_as_default", skip_serializing_if = "Autoload::is_empty")]
    pub autoload_dev: Autoload,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<Repository>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Config::is_empty")]
    pub config: Config,

    /// Script name to a command string or list of commands
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, Value>,

    #[serde(rename = "scripts-descriptions", default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts_descriptions: BTreeMap<String, String>,

    /// Arbitrary data for plugins and other tools
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub bin: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Archive::is_empty")]
    pub archive: Archive,

    /// `true`, or the name of a replacement package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abandoned: Option<Value>,

    #[serde(rename = "non-feature-branches", default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub non_feature_branches: Vec<String>,

    #[serde(rename = "minimum-stability", default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub minimum_stability: String,

    #[serde(rename = "prefer-stable", default, deserialize_with = "null_as_default", skip_serializing_if = "std::ops::Not::not")]
    pub prefer_stable: bool,

    /// Top-level keys not modelled above, kept verbatim
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Deserialize a field so that an explicit `null` reads as the type's default.
///
/// Other tools write `"description": null` or `"role": null`; those fields count
/// as absent rather than failing the whole document.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[allow(clippy::ref_option)]
fn is_none_or_empty(map: &Option<DependencyMap>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

impl ComposerJson {
    /// License identifiers, whether stored as a string or a list.
    ///
    /// Non-string entries are ignored.
    pub fn licenses(&self) -> Vec<&str> {
        match &self.license {
            Some(Value::String(license)) => vec![license.as_str()],
            Some(Value::Array(licenses)) => licenses.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
