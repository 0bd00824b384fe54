//! Defaults and limits used across the crate.
//!
//! Defining them centrally keeps the documented defaults of `create`,
//! validation and backups in one place.

/// File name looked up by directory-based loaders.
pub const MANIFEST_FILENAME: &str = "composer.json";

/// Package type assigned by `ComposerJson::create` and `create_library`.
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

/// Package type assigned by `ComposerJson::create_project`.
pub const PROJECT_PACKAGE_TYPE: &str = "project";

/// License assigned by `ComposerJson::create`.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Platform requirement key for the PHP interpreter.
pub const PHP_PACKAGE: &str = "php";

/// PHP constraint used when the caller does not supply one.
pub const DEFAULT_PHP_VERSION: &str = "^7.4";

/// Test framework seeded into `require-dev` for new projects.
pub const DEFAULT_TEST_FRAMEWORK: &str = "phpunit/phpunit";

/// Constraint for [`DEFAULT_TEST_FRAMEWORK`].
pub const DEFAULT_TEST_FRAMEWORK_VERSION: &str = "^9.0";

/// Directory the generated PSR-4 namespace points at.
pub const DEFAULT_SOURCE_DIR: &str = "src/";

/// Separator used inside PHP namespaces and as the PSR-4 prefix terminator.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Suffix appended to the manifest path by `create_backup` when none is given.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// Minimum number of characters for a non-empty description.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Indentation used for pretty-printed output, matching Composer's own.
pub const JSON_INDENT: &[u8] = b"    ";
