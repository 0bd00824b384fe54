//! Error handling for composer-manifest
//!
//! The library reports every failure through a single closed enumeration,
//! [`ComposerError`], returned by value from each grammar, accessor and I/O
//! function. Callers branch on the variant; nothing is stored in shared state.
//!
//! # Error Categories
//!
//! - **Name grammar**: [`ComposerError::EmptyName`], [`ComposerError::MalformedName`],
//!   [`ComposerError::InvalidVendorSegment`], [`ComposerError::InvalidProjectSegment`]
//! - **Version grammar**: [`ComposerError::InvalidVersionFormat`]
//! - **Document validation**: [`ComposerError::DescriptionTooShort`],
//!   [`ComposerError::InvalidStability`]
//! - **Ingestion**: [`ComposerError::MalformedInput`], [`ComposerError::StructuralMismatch`]
//! - **Byte sources and sinks**: [`ComposerError::SourceNotFound`],
//!   [`ComposerError::SourceUnreadable`], [`ComposerError::SinkUnwritable`]
//!
//! The CLI layer works with [`anyhow::Error`] and turns whatever bubbles up into an
//! [`ErrorContext`] through [`user_friendly_error`], which adds details and a
//! suggestion before printing in color.
//!
//! # Examples
//!
//! ```rust
//! use composer_manifest::core::ComposerError;
//! use composer_manifest::manifest::name;
//!
//! match name::validate("Acme/Blog") {
//!     Err(ComposerError::InvalidVendorSegment { vendor }) => assert_eq!(vendor, "Acme"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Result alias used by every library operation.
pub type Result<T> = std::result::Result<T, ComposerError>;

/// Every failure the library can report.
///
/// Validation variants are local and non-retryable; they are always handed
/// back to the caller of whichever accessor triggered them. I/O variants carry
/// the path involved and the underlying reason as text so the enum stays
/// `Clone` and comparable in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// Package name was the empty string
    #[error("Package name cannot be empty")]
    EmptyName,

    /// Package name does not contain exactly one `/`
    #[error("Invalid package name '{name}': expected the form vendor/project")]
    MalformedName {
        /// The rejected name
        name: String,
    },

    /// Vendor segment fails the lowercase alphanumeric grammar
    #[error(
        "Invalid vendor name '{vendor}': only lowercase alphanumerics separated by single '_', '-' or '.' are allowed"
    )]
    InvalidVendorSegment {
        /// The rejected vendor segment
        vendor: String,
    },

    /// Project segment fails the lowercase alphanumeric grammar
    #[error(
        "Invalid project name '{project}': only lowercase alphanumerics separated by single '_', '-' or '.' are allowed"
    )]
    InvalidProjectSegment {
        /// The rejected project segment
        project: String,
    },

    /// Version constraint matches none of the accepted forms
    #[error("Invalid version format: {version}")]
    InvalidVersionFormat {
        /// The rejected constraint
        version: String,
    },

    /// Description is non-empty but shorter than the minimum
    #[error("Description is too short ({length} characters), should be at least {minimum}")]
    DescriptionTooShort {
        /// Character count of the rejected description
        length: usize,
        /// Required minimum character count
        minimum: usize,
    },

    /// Minimum stability is not one of the known levels
    #[error("Invalid minimum-stability '{stability}', should be one of: dev, alpha, beta, RC, stable")]
    InvalidStability {
        /// The rejected stability string
        stability: String,
    },

    /// Input bytes are not valid JSON
    #[error("Invalid JSON format: {reason}")]
    MalformedInput {
        /// Parser message, including line and column
        reason: String,
    },

    /// Input is valid JSON but does not have the shape of a manifest
    #[error("Unexpected manifest structure: {reason}")]
    StructuralMismatch {
        /// What was found instead
        reason: String,
    },

    /// Byte source does not exist
    #[error("Manifest file not found: {path}")]
    SourceNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Byte source exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    SourceUnreadable {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        reason: String,
    },

    /// Byte sink could not be written
    #[error("Failed to write {path}: {reason}")]
    SinkUnwritable {
        /// Path that was written
        path: String,
        /// Underlying I/O error
        reason: String,
    },

    /// The document could not be turned into JSON
    #[error("Failed to serialize manifest: {reason}")]
    SerializationFailed {
        /// Serializer message
        reason: String,
    },
}

impl ComposerError {
    /// Whether this error came from one of the grammars or document validation
    /// rather than from ingestion or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::MalformedName { .. }
                | Self::InvalidVendorSegment { .. }
                | Self::InvalidProjectSegment { .. }
                | Self::InvalidVersionFormat { .. }
                | Self::DescriptionTooShort { .. }
                | Self::InvalidStability { .. }
        )
    }
}

/// Error wrapper carrying user-facing details and a suggestion.
///
/// Built by [`user_friendly_error`] for the CLI; library code never needs it.
#[derive(Debug)]
pub struct ErrorContext {
    /// Headline message
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with only a headline message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with actionable suggestions.
///
/// [`ComposerError`] values anywhere in the chain get tailored advice; the
/// outermost message is kept as the headline so `anyhow` context added by the
/// CLI is not lost.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let headline = format!("{error:#}");

    let Some(composer_error) = error.chain().find_map(|e| e.downcast_ref::<ComposerError>()) else {
        return ErrorContext::new(headline);
    };

    let context = ErrorContext::new(headline);
    match composer_error {
        ComposerError::EmptyName | ComposerError::MalformedName { .. } => context
            .with_details("Package names have exactly two segments separated by '/'")
            .with_suggestion("Use the form vendor/project, e.g. 'symfony/console'"),
        ComposerError::InvalidVendorSegment { .. } | ComposerError::InvalidProjectSegment { .. } => {
            context
                .with_details(
                    "Each segment starts with a lowercase letter or digit and may use single '_', '-' or '.' separators",
                )
                .with_suggestion("Lowercase the name and remove doubled or trailing separators")
        }
        ComposerError::InvalidVersionFormat { .. } => context
            .with_details(
                "Accepted: '*', 'dev-<branch>', an optionally prefixed version like '^1.2' or '>=7.4', or two such clauses separated by a space",
            )
            .with_suggestion("Try a caret constraint such as '^1.0'"),
        ComposerError::DescriptionTooShort { minimum, .. } => context
            .with_suggestion(format!("Write a description of at least {minimum} characters")),
        ComposerError::InvalidStability { .. } => {
            context.with_suggestion("Use one of: dev, alpha, beta, RC, stable")
        }
        ComposerError::MalformedInput { .. } => context
            .with_details("The file is not valid JSON")
            .with_suggestion("Check for missing commas, unmatched braces or trailing characters"),
        ComposerError::StructuralMismatch { .. } => context
            .with_details("composer.json must contain a JSON object with correctly typed fields")
            .with_suggestion("Make sure maps such as 'require' are objects of strings"),
        ComposerError::SourceNotFound { .. } => context
            .with_suggestion("Run the command from the project root or pass the path to composer.json"),
        ComposerError::SourceUnreadable { .. } | ComposerError::SinkUnwritable { .. } => {
            context.with_suggestion("Check file permissions and that the directory exists")
        }
        ComposerError::SerializationFailed { .. } => context,
    }
}
