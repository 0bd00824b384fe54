//! Constructors for new manifests.

use crate::constants::{
    DEFAULT_LICENSE, DEFAULT_PACKAGE_TYPE, DEFAULT_PHP_VERSION, DEFAULT_SOURCE_DIR,
    DEFAULT_TEST_FRAMEWORK, DEFAULT_TEST_FRAMEWORK_VERSION, NAMESPACE_SEPARATOR, PHP_PACKAGE,
    PROJECT_PACKAGE_TYPE,
};
use crate::core::Result;
use crate::manifest::{Autoload, ComposerJson, DependencyMap, NamespaceSlot, name, validate};
use serde_json::{Map, Value};

impl ComposerJson {
    /// Create a new manifest with basic fields set.
    ///
    /// `name` may be empty; when given it must pass the name grammar, and a
    /// non-empty `description` must be at least ten characters long.
    ///
    /// The result has:
    /// - `type` = `library`, `license` = `MIT`
    /// - empty `require` and `require-dev`
    /// - a PSR-4 map with `Vendor\Project\` -> `src/` derived from the name,
    ///   or an empty PSR-4 map when no name was given
    ///
    /// # Examples
    ///
    /// ```rust
    /// use composer_manifest::manifest::ComposerJson;
    ///
    /// let composer = ComposerJson::create("vendor/project", "A sufficiently long description")?;
    /// assert_eq!(composer.package_type, "library");
    /// assert_eq!(composer.psr4_map().unwrap()["Vendor\\Project\\"], "src/");
    ///
    /// assert!(ComposerJson::create("badname", "A sufficiently long description").is_err());
    /// # Ok::<(), composer_manifest::core::ComposerError>(())
    /// ```
    pub fn create(name: &str, description: &str) -> Result<Self> {
        validate(name, description, "")?;

        let mut psr_4 = Map::new();
        if !name.is_empty() {
            let (vendor, project) = name::split(name)?;
            let namespace = format!("{}{}", name::to_namespace(vendor, project), NAMESPACE_SEPARATOR);
            psr_4.insert(namespace, Value::String(DEFAULT_SOURCE_DIR.to_string()));
        }

        tracing::debug!("Created manifest for {:?}", name);

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            package_type: DEFAULT_PACKAGE_TYPE.to_string(),
            license: Some(Value::String(DEFAULT_LICENSE.to_string())),
            require: Some(DependencyMap::new()),
            require_dev: Some(DependencyMap::new()),
            autoload: Autoload {
                psr_4: NamespaceSlot::Map(psr_4),
                ..Autoload::default()
            },
            ..Self::default()
        })
    }

    /// Create an application manifest.
    ///
    /// Like [`create`](Self::create), then `type` = `project`,
    /// `require.php` = `php_version` (or `^7.4` when empty), and
    /// `phpunit/phpunit` `^9.0` as a dev dependency.
    pub fn create_project(name: &str, description: &str, php_version: &str) -> Result<Self> {
        let mut composer = Self::create(name, description)?;
        composer.package_type = PROJECT_PACKAGE_TYPE.to_string();
        composer.seed_php_requirement(php_version);
        composer.require_dev.get_or_insert_with(DependencyMap::new).insert(
            DEFAULT_TEST_FRAMEWORK.to_string(),
            DEFAULT_TEST_FRAMEWORK_VERSION.to_string(),
        );
        Ok(composer)
    }

    /// Create a reusable library manifest.
    ///
    /// Like [`create`](Self::create), then `type` = `library` and
    /// `require.php` = `php_version` (or `^7.4` when empty).
    pub fn create_library(name: &str, description: &str, php_version: &str) -> Result<Self> {
        let mut composer = Self::create(name, description)?;
        composer.package_type = DEFAULT_PACKAGE_TYPE.to_string();
        composer.seed_php_requirement(php_version);
        Ok(composer)
    }

    // `php` is a platform package, not vendor/project, so it bypasses add_dependency.
    fn seed_php_requirement(&mut self, php_version: &str) {
        let version = if php_version.is_empty() {
            DEFAULT_PHP_VERSION
        } else {
            php_version
        };
        self.require
            .get_or_insert_with(DependencyMap::new)
            .insert(PHP_PACKAGE.to_string(), version.to_string());
    }
}
