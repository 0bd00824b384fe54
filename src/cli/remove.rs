//! Remove a dependency.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::common::{ManifestContext, resolve_manifest_path};

/// Remove a package from `require` or `require-dev`.
#[derive(Args)]
pub struct RemoveCommand {
    /// Package name, vendor/project
    package: String,

    /// Remove from require-dev instead of require
    #[arg(long)]
    dev: bool,

    /// Path to composer.json or its directory (default: ./composer.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Copy composer.json to composer.json.bak before saving
    #[arg(long)]
    backup: bool,
}

impl RemoveCommand {
    pub fn execute(self) -> Result<()> {
        let mut ctx = ManifestContext::load(resolve_manifest_path(self.file))?;

        let (section, removed) = if self.dev {
            ("require-dev", ctx.composer.remove_dev_dependency(&self.package))
        } else {
            ("require", ctx.composer.remove_dependency(&self.package))
        };

        if !removed {
            return Err(anyhow!("{} is not listed in {}", self.package, section));
        }

        ctx.save(self.backup)?;

        println!("{} Removed {} from {}", "✓".green(), self.package.bright_white(), section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ComposerJson;
    use crate::test_utils::ManifestFixture;
    use tempfile::TempDir;

    fn command(dir: &TempDir, package: &str, dev: bool) -> RemoveCommand {
        RemoveCommand {
            package: package.to_string(),
            dev,
            file: Some(dir.path().to_path_buf()),
            backup: false,
        }
    }

    #[test]
    fn test_remove_dependency() {
        let temp = TempDir::new().unwrap();
        ManifestFixture::library().write_to(temp.path()).unwrap();

        command(&temp, "symfony/console", false).execute().unwrap();

        let composer = ComposerJson::from_dir(temp.path()).unwrap();
        assert!(!composer.dependency_exists("symfony/console"));
        assert!(composer.dependency_exists("php"));
    }

    #[test]
    fn test_remove_dev_dependency() {
        let temp = TempDir::new().unwrap();
        ManifestFixture::library().write_to(temp.path()).unwrap();

        command(&temp, "phpunit/phpunit", true).execute().unwrap();

        let composer = ComposerJson::from_dir(temp.path()).unwrap();
        assert_eq!(composer.require_dev, None);
    }

    #[test]
    fn test_remove_missing_package_fails() {
        let temp = TempDir::new().unwrap();
        let path = ManifestFixture::library().write_to(temp.path()).unwrap();
        let original = std::fs::read(&path).unwrap();

        let err = command(&temp, "phpunit/phpunit", false).execute().unwrap_err();
        assert!(err.to_string().contains("not listed in require"));
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }
}
