//! Add or update a dependency.
//!
//! The constraint is checked against the version grammar before anything is
//! written, so a rejected constraint leaves composer.json untouched.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::common::{ManifestContext, resolve_manifest_path};
use crate::version;

/// Add a package to `require` or `require-dev`.
#[derive(Args)]
pub struct RequireCommand {
    /// Package name, vendor/project
    package: String,

    /// Version constraint, e.g. ^1.0 (default: *)
    #[arg(default_value = "*")]
    constraint: String,

    /// Add to require-dev instead of require
    #[arg(long)]
    dev: bool,

    /// Path to composer.json or its directory (default: ./composer.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Copy composer.json to composer.json.bak before saving
    #[arg(long)]
    backup: bool,
}

impl RequireCommand {
    pub fn execute(self) -> Result<()> {
        version::validate(&self.constraint)
            .with_context(|| format!("Cannot require {}", self.package))?;

        let mut ctx = ManifestContext::load(resolve_manifest_path(self.file))?;

        let (section, existed) = if self.dev {
            let existed = ctx.composer.dev_dependency_exists(&self.package);
            ctx.composer.add_dev_dependency(&self.package, &self.constraint)?;
            ("require-dev", existed)
        } else {
            let existed = ctx.composer.dependency_exists(&self.package);
            ctx.composer.add_dependency(&self.package, &self.constraint)?;
            ("require", existed)
        };

        ctx.save(self.backup)?;

        let verb = if existed { "Updated" } else { "Added" };
        println!(
            "{} {} {} {} in {}",
            "✓".green(),
            verb,
            self.package.bright_white(),
            self.constraint,
            section
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ComposerJson;
    use crate::test_utils::ManifestFixture;
    use tempfile::TempDir;

    fn command(dir: &TempDir, package: &str, constraint: &str) -> RequireCommand {
        RequireCommand {
            package: package.to_string(),
            constraint: constraint.to_string(),
            dev: false,
            file: Some(dir.path().to_path_buf()),
            backup: false,
        }
    }

    #[test]
    fn test_require_adds_dependency() {
        let temp = TempDir::new().unwrap();
        ManifestFixture::library().write_to(temp.path()).unwrap();

        command(&temp, "monolog/monolog", "^3.0").execute().unwrap();

        let composer = ComposerJson::from_dir(temp.path()).unwrap();
        assert_eq!(composer.require.unwrap()["monolog/monolog"], "^3.0");
    }

    #[test]
    fn test_require_dev_with_backup() {
        let temp = TempDir::new().unwrap();
        let path = ManifestFixture::library().write_to(temp.path()).unwrap();
        let original = std::fs::read(&path).unwrap();

        let cmd = RequireCommand {
            dev: true,
            backup: true,
            ..command(&temp, "mockery/mockery", "^1.6")
        };
        cmd.execute().unwrap();

        assert_eq!(std::fs::read(temp.path().join("composer.json.bak")).unwrap(), original);
        let composer = ComposerJson::from_dir(temp.path()).unwrap();
        assert!(composer.dev_dependency_exists("mockery/mockery"));
        assert!(!composer.dependency_exists("mockery/mockery"));
    }

    #[test]
    fn test_require_invalid_constraint_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = ManifestFixture::library().write_to(temp.path()).unwrap();
        let original = std::fs::read(&path).unwrap();

        assert!(command(&temp, "monolog/monolog", "latest").execute().is_err());
        assert!(command(&temp, "Monolog", "^3.0").execute().is_err());
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }
}
