//! Validate a manifest.
//!
//! Two passes run in order and the first failure is reported:
//!
//! 1. identity fields: package name grammar, description length,
//!    `minimum-stability`
//! 2. the version grammar over every `require` and `require-dev` constraint
//!
//! Exits non-zero when either pass fails. Parse errors are reported the same way.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::common::{ManifestContext, resolve_manifest_path};

/// Validate identity fields and version constraints.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to composer.json or its directory (default: ./composer.json)
    path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self) -> Result<()> {
        let ctx = ManifestContext::load(resolve_manifest_path(self.path))?;
        let path = ctx.manifest_path.display();

        ctx.composer.validate().with_context(|| format!("{path} is invalid"))?;
        ctx.composer
            .validate_constraints()
            .with_context(|| format!("{path} has an invalid version constraint"))?;

        tracing::debug!("{} dependencies checked", ctx.composer.all_dependencies().len());
        println!("{} {} is valid", "✓".green(), path);
        Ok(())
    }
}
