//! Command-line interface for composer-manifest.
//!
//! Each subcommand lives in its own module and exposes an `execute` method
//! returning `anyhow::Result<()>`. Errors bubble up to `main`, which turns them
//! into an [`ErrorContext`](crate::core::ErrorContext) and exits non-zero.
//!
//! # Commands
//!
//! - `show` - print a summary of a manifest
//! - `init` - create a new project or library manifest
//! - `validate` - check identity fields and every version constraint
//! - `require` - add or update a dependency
//! - `remove` - drop a dependency
//!
//! # Examples
//!
//! ```bash
//! composer-manifest init acme/blog --description "A small blogging engine"
//! composer-manifest require symfony/console ^6.0
//! composer-manifest require phpunit/phpunit ^9.0 --dev --backup
//! composer-manifest --verbose validate
//! ```

pub mod common;
mod init;
mod remove;
mod require;
mod show;
mod validate;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution, built once from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive.
    ///
    /// When `None`, `RUST_LOG` is honored and warnings are shown by default.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Create a configuration with no log level override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Only the first call in a process has any effect.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Inspect and edit PHP `composer.json` manifests.
#[derive(Parser)]
#[command(
    name = "composer-manifest",
    about = "Inspect and edit PHP composer.json manifests",
    version,
    long_about = "composer-manifest reads, validates, creates and edits composer.json files without touching the network or the vendor directory."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a manifest
    Show(show::ShowCommand),

    /// Create a new composer.json
    Init(init::InitCommand),

    /// Validate a manifest and its version constraints
    Validate(validate::ValidateCommand),

    /// Add or update a dependency
    Require(require::RequireCommand),

    /// Remove a dependency
    Remove(remove::RemoveCommand),
}

impl Cli {
    /// Build the runtime configuration and run the selected command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(&config)
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig { log_level }
    }

    /// Run the selected command with an explicit configuration.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Show(cmd) => cmd.execute(),
            Commands::Init(cmd) => cmd.execute(),
            Commands::Validate(cmd) => cmd.execute(),
            Commands::Require(cmd) => cmd.execute(),
            Commands::Remove(cmd) => cmd.execute(),
        }
    }
}
