//! Helpers shared by the CLI commands

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_BACKUP_SUFFIX, MANIFEST_FILENAME};
use crate::manifest::{ComposerJson, create_backup};

/// Turn an optional `--file` / positional path into a manifest path.
///
/// `None` means `./composer.json`; a directory means `composer.json` inside it.
pub fn resolve_manifest_path(path: Option<PathBuf>) -> PathBuf {
    match path {
        Some(path) if path.is_dir() => path.join(MANIFEST_FILENAME),
        Some(path) => path,
        None => PathBuf::from(MANIFEST_FILENAME),
    }
}

/// A loaded manifest and where it came from
#[derive(Debug)]
pub struct ManifestContext {
    /// Parsed manifest
    pub composer: ComposerJson,
    /// Path the manifest was read from and is written back to
    pub manifest_path: PathBuf,
}

impl ManifestContext {
    /// Load the manifest at `manifest_path`.
    pub fn load(manifest_path: impl AsRef<Path>) -> Result<Self> {
        let manifest_path = manifest_path.as_ref();

        let composer = ComposerJson::from_path(manifest_path)
            .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

        Ok(Self {
            composer,
            manifest_path: manifest_path.to_path_buf(),
        })
    }

    /// Write the manifest back, pretty-printed.
    ///
    /// With `backup`, the file on disk is first copied to `<path>.bak`.
    pub fn save(&self, backup: bool) -> Result<()> {
        if backup {
            let backup_path = create_backup(&self.manifest_path, DEFAULT_BACKUP_SUFFIX)
                .with_context(|| format!("Failed to back up {}", self.manifest_path.display()))?;
            println!("{} Backed up to {}", "✓".green(), backup_path.display());
        }

        self.composer
            .save(&self.manifest_path, true)
            .with_context(|| format!("Failed to save {}", self.manifest_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_manifest_path() {
        assert_eq!(resolve_manifest_path(None), PathBuf::from("composer.json"));

        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_manifest_path(Some(temp.path().to_path_buf())),
            temp.path().join("composer.json")
        );

        let file = temp.path().join("other.json");
        assert_eq!(resolve_manifest_path(Some(file.clone())), file);
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = ManifestContext::load(temp.path().join("composer.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }
}
