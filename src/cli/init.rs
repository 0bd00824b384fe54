//! Create a new `composer.json`.
//!
//! ```bash
//! composer-manifest init acme/blog --description "A small blogging engine"
//! composer-manifest init acme/app --description "Company intranet" --project --php ">=8.1"
//! composer-manifest init acme/blog --description "A small blogging engine" --path ./blog --force
//! ```
//!
//! Refuses to overwrite an existing manifest unless `--force` is given.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::constants::MANIFEST_FILENAME;
use crate::manifest::ComposerJson;

/// Create a project or library manifest.
#[derive(Args)]
pub struct InitCommand {
    /// Package name, vendor/project
    name: String,

    /// Package description, at least ten characters
    #[arg(short, long)]
    description: String,

    /// Create an application (`type: project`) instead of a library
    #[arg(long)]
    project: bool,

    /// PHP version constraint (default: ^7.4)
    #[arg(long, default_value = "")]
    php: String,

    /// Directory to create composer.json in (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing composer.json
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    pub fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let manifest_path = target_dir.join(MANIFEST_FILENAME);

        if manifest_path.exists() && !self.force {
            return Err(anyhow!(
                "Manifest already exists at {}. Use --force to overwrite",
                manifest_path.display()
            ));
        }

        if !self.php.is_empty() {
            crate::version::validate(&self.php).context("Invalid --php constraint")?;
        }

        let composer = if self.project {
            ComposerJson::create_project(&self.name, &self.description, &self.php)?
        } else {
            ComposerJson::create_library(&self.name, &self.description, &self.php)?
        };

        composer.save(&manifest_path, true)?;

        println!(
            "{} Initialized {} {} at {}",
            "✓".green(),
            composer.package_type,
            composer.name.bright_white(),
            manifest_path.display()
        );
        println!("\n{}", "Next steps:".cyan());
        println!(
            "  Add dependencies with {}",
            "composer-manifest require vendor/package ^1.0".bright_white()
        );

        Ok(())
    }
}
