//! The `config` block: installer, cache and network options.
//!
//! The block is passthrough. Commonly used options get typed fields so callers
//! can read and set them; every other key lands in `other`. All fields are
//! optional so an explicit `false` or `0` survives a round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Composer `config` options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Seconds before a process is killed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_timeout: Option<u64>,

    /// Append vendor paths to PHP's include path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_include_path: Option<bool>,

    /// `dist`, `source`, `auto`, or a per-package map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_install: Option<Value>,

    /// Whether to save credentials after prompting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_auths: Option<Value>,

    /// Protocols used for github.com clones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_protocols: Option<Vec<String>>,

    /// Protocols used for gitlab clones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab_protocols: Option<Vec<String>>,

    /// Refuse plain HTTP downloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_http: Option<bool>,

    /// Certificate authority file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafile: Option<String>,

    /// Certificate authority directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capath: Option<String>,

    /// Fake platform package versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<BTreeMap<String, Value>>,

    /// Where dependencies are installed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_dir: Option<String>,

    /// Where binaries are linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_dir: Option<String>,

    /// Composer data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Root cache directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,

    /// Cache TTL in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_files_ttl: Option<u64>,

    /// Maximum cache size, e.g. `300MiB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_files_maxsize: Option<String>,

    /// Generate an optimized classmap on dump
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize_autoloader: Option<bool>,

    /// Only load classes from the classmap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classmap_authoritative: Option<bool>,

    /// Format used by `composer archive`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_format: Option<String>,

    /// Target directory of `composer archive`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_dir: Option<String>,

    /// Plugins allowed to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_plugins: Option<Value>,

    /// Sort packages when requiring new ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_packages: Option<bool>,

    /// Any other option
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Config {
    /// A config block with the defaults Composer documents.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            process_timeout: Some(300),
            use_include_path: Some(false),
            preferred_install: Some(Value::String("dist".to_string())),
            store_auths: Some(Value::Bool(false)),
            github_protocols: Some(vec!["https".to_string(), "ssh".to_string(), "git".to_string()]),
            gitlab_protocols: Some(vec!["https".to_string(), "ssh".to_string()]),
            secure_http: Some(true),
            vendor_dir: Some("vendor".to_string()),
            bin_dir: Some("vendor/bin".to_string()),
            optimize_autoloader: Some(false),
            ..Self::default()
        }
    }

    /// Whether nothing would be written for this block.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.process_timeout, Some(300));
        assert_eq!(config.preferred_install, Some(json!("dist")));
        assert_eq!(config.secure_http, Some(true));
        assert_eq!(config.vendor_dir.as_deref(), Some("vendor"));
        assert_eq!(config.bin_dir.as_deref(), Some("vendor/bin"));
        assert_eq!(config.github_protocols.as_ref().map(Vec::len), Some(3));
        assert!(!config.is_empty());
    }

    #[test]
    fn test_default_is_empty_and_serializes_to_empty_object() {
        let config = Config::default();
        assert!(config.is_empty());
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({}));
    }

    #[test]
    fn test_round_trip_keeps_false_and_unknown_keys() {
        let input = json!({
            "secure-http": false,
            "process-timeout": 0,
            "sort-packages": true,
            "allow-plugins": {"composer/installers": true},
            "discard-changes": "stash"
        });
        let config: Config = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(config.secure_http, Some(false));
        assert_eq!(config.process_timeout, Some(0));
        assert_eq!(config.other["discard-changes"], json!("stash"));
        assert_eq!(serde_json::to_value(&config).unwrap(), input);
    }
}
