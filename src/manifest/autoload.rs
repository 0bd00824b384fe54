//! Autoload configuration and PSR-4 namespace maps.
//!
//! The `psr-4` field is supposed to map namespace prefixes to directories, but
//! tools in the wild write whatever they like into it. [`NamespaceSlot`] keeps
//! the three shapes apart so reads never fail and writes know when to start over:
//!
//! - [`NamespaceSlot::Absent`] - field missing or `null`
//! - [`NamespaceSlot::Map`] - a JSON object, values of any type
//! - [`NamespaceSlot::Other`] - any other JSON value
//!
//! The slot serializes back to exactly what it holds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A loosely typed namespace map field (`psr-0` or `psr-4`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NamespaceSlot {
    /// Missing or `null`
    #[default]
    Absent,
    /// A JSON object; values are usually strings but may be anything
    Map(Map<String, Value>),
    /// A value of some other JSON type, kept verbatim
    Other(Value),
}

impl NamespaceSlot {
    /// Whether the field is missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The string-valued entries, or `None` if the slot is not map-shaped.
    ///
    /// Entries whose value is not a string (arrays of directories, numbers, ...)
    /// are skipped silently. An empty map is still `Some`.
    pub fn entries(&self) -> Option<BTreeMap<String, String>> {
        let Self::Map(map) = self else {
            return None;
        };

        Some(
            map.iter()
                .filter_map(|(namespace, path)| {
                    path.as_str().map(|p| (namespace.clone(), p.to_string()))
                })
                .collect(),
        )
    }

    /// Insert or overwrite `namespace -> path`.
    ///
    /// A slot that is not map-shaped is replaced with an empty map first and
    /// its previous content is lost.
    pub fn insert(&mut self, namespace: &str, path: &str) {
        if !matches!(self, Self::Map(_)) {
            if let Self::Other(previous) = self {
                tracing::warn!("Replacing non-map namespace field {} with a map", previous);
            }
            *self = Self::Map(Map::new());
        }

        if let Self::Map(map) = self {
            map.insert(namespace.to_string(), Value::String(path.to_string()));
        }
    }

    /// Delete `namespace`, returning whether it was present in a map-shaped slot.
    pub fn remove(&mut self, namespace: &str) -> bool {
        match self {
            Self::Map(map) => map.remove(namespace).is_some(),
            _ => false,
        }
    }
}

impl From<Value> for NamespaceSlot {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Object(map) => Self::Map(map),
            other => Self::Other(other),
        }
    }
}

impl From<BTreeMap<String, String>> for NamespaceSlot {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
    }
}

impl Serialize for NamespaceSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Map(map) => map.serialize(serializer),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for NamespaceSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// The `autoload` / `autoload-dev` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Autoload {
    /// PSR-0 mapping, passed through untouched
    #[serde(rename = "psr-0", default, skip_serializing_if = "NamespaceSlot::is_absent")]
    pub psr_0: NamespaceSlot,

    /// PSR-4 namespace prefix to directory mapping
    #[serde(rename = "psr-4", default, skip_serializing_if = "NamespaceSlot::is_absent")]
    pub psr_4: NamespaceSlot,

    /// Directories or files scanned for classes
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub classmap: Vec<String>,

    /// Files included on every request
    #[serde(default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Paths excluded from the classmap
    #[serde(rename = "exclude-from-classmap", default, deserialize_with = "crate::manifest::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub exclude_from_classmap: Vec<String>,
}

impl Autoload {
    /// Whether nothing would be written for this block.
    pub fn is_empty(&self) -> bool {
        self.psr_0.is_absent()
            && self.psr_4.is_absent()
            && self.classmap.is_empty()
            && self.files.is_empty()
            && self.exclude_from_classmap.is_empty()
    }
}

/// String-valued PSR-4 entries of `autoload`, or `None` if the field is not a map.
pub fn get_psr4_map(autoload: &Autoload) -> Option<BTreeMap<String, String>> {
    autoload.psr_4.entries()
}

/// Map `namespace` to `path` in the PSR-4 field, creating the map if needed.
///
/// Neither argument is checked; by convention namespaces end with `\`.
pub fn set_psr4(autoload: &mut Autoload, namespace: &str, path: &str) {
    tracing::debug!("Setting PSR-4 {} -> {}", namespace, path);
    autoload.psr_4.insert(namespace, path);
}

/// Remove `namespace` from the PSR-4 field, returning whether it was present.
pub fn remove_psr4(autoload: &mut Autoload, namespace: &str) -> bool {
    autoload.psr_4.remove(namespace)
}
