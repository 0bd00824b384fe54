//! Print a human-readable summary of a manifest.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::common::{ManifestContext, resolve_manifest_path};
use crate::manifest::ComposerJson;

/// Show name, description, type, license, dependencies and PSR-4 map.
#[derive(Args)]
pub struct ShowCommand {
    /// Path to composer.json or its directory (default: ./composer.json)
    path: Option<PathBuf>,
}

impl ShowCommand {
    pub fn execute(self) -> Result<()> {
        let ctx = ManifestContext::load(resolve_manifest_path(self.path))?;
        print!("{}", render(&ctx.composer));
        Ok(())
    }
}

fn field(label: &str, value: &str) -> String {
    let value = if value.is_empty() { "-" } else { value };
    format!("{} {}\n", format!("{label}:").bold(), value)
}

fn section(out: &mut String, title: &str, entries: &BTreeMap<String, String>, separator: &str) {
    out.push_str(&format!("\n{} ({})\n", title.cyan(), entries.len()));
    for (key, value) in entries {
        out.push_str(&format!("  {key}{separator}{value}\n"));
    }
}

pub(crate) fn render(composer: &ComposerJson) -> String {
    let mut out = String::new();
    out.push_str(&field("Name", &composer.name));
    out.push_str(&field("Description", &composer.description));
    out.push_str(&field("Type", &composer.package_type));
    out.push_str(&field("License", &composer.licenses().join(", ")));
    if !composer.minimum_stability.is_empty() {
        out.push_str(&field("Minimum stability", &composer.minimum_stability));
    }

    let empty = BTreeMap::new();
    section(&mut out, "Dependencies", composer.require.as_ref().unwrap_or(&empty), " ");
    section(&mut out, "Dev dependencies", composer.require_dev.as_ref().unwrap_or(&empty), " ");

    match composer.psr4_map() {
        Some(psr4) => section(&mut out, "PSR-4", &psr4, " => "),
        None if composer.autoload.psr_4.is_absent() => {}
        None => out.push_str(&format!("\n{} {}\n", "PSR-4".cyan(), "(not a map)".yellow())),
    }

    out
}
