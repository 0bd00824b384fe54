//! Accessors that read or modify a manifest in place.
//!
//! Each method delegates to the component module that owns the sub-record:
//! [`dependency`], [`autoload`], [`archive`]. Writers validate before touching
//! anything, so a failed call leaves the document unchanged.

use crate::core::Result;
use crate::manifest::{
    ComposerJson, DependencyMap, Repository, archive, autoload, dependency, name,
};
use std::collections::BTreeMap;

impl ComposerJson {
    /// Whether `package` is listed in `require`.
    pub fn dependency_exists(&self, package: &str) -> bool {
        dependency::exists(self.require.as_ref(), package)
    }

    /// Whether `package` is listed in `require-dev`.
    pub fn dev_dependency_exists(&self, package: &str) -> bool {
        dependency::exists(self.require_dev.as_ref(), package)
    }

    /// Add or update a runtime dependency.
    ///
    /// The package name must be `vendor/project`; the version string is stored
    /// as given. `require` is created if it was missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use composer_manifest::manifest::ComposerJson;
    ///
    /// let mut composer = ComposerJson::default();
    /// composer.add_dependency("symfony/console", "^5.4")?;
    /// assert!(composer.dependency_exists("symfony/console"));
    ///
    /// assert!(composer.add_dependency("not a name", "^1.0").is_err());
    /// # Ok::<(), composer_manifest::core::ComposerError>(())
    /// ```
    pub fn add_dependency(&mut self, package: &str, version: &str) -> Result<()> {
        name::validate(package)?;
        dependency::add(self.require.get_or_insert_with(DependencyMap::new), package, version)
    }

    /// Add or update a development dependency. See [`add_dependency`](Self::add_dependency).
    pub fn add_dev_dependency(&mut self, package: &str, version: &str) -> Result<()> {
        name::validate(package)?;
        dependency::add(self.require_dev.get_or_insert_with(DependencyMap::new), package, version)
    }

    /// Remove a runtime dependency, returning whether it was present.
    pub fn remove_dependency(&mut self, package: &str) -> bool {
        dependency::remove(self.require.as_mut(), package)
    }

    /// Remove a development dependency, returning whether it was present.
    pub fn remove_dev_dependency(&mut self, package: &str) -> bool {
        dependency::remove(self.require_dev.as_mut(), package)
    }

    /// `require` merged with `require-dev`; dev constraints win on collisions.
    pub fn all_dependencies(&self) -> DependencyMap {
        dependency::merge(self.require.as_ref(), self.require_dev.as_ref())
    }

    /// String-valued PSR-4 entries, or `None` if `autoload.psr-4` is not a map.
    pub fn psr4_map(&self) -> Option<BTreeMap<String, String>> {
        autoload::get_psr4_map(&self.autoload)
    }

    /// Map a namespace prefix (e.g. `App\`) to a directory in `autoload.psr-4`.
    pub fn set_psr4(&mut self, namespace: &str, path: &str) {
        autoload::set_psr4(&mut self.autoload, namespace, path);
    }

    /// Remove a namespace prefix from `autoload.psr-4`.
    pub fn remove_psr4(&mut self, namespace: &str) -> bool {
        autoload::remove_psr4(&mut self.autoload, namespace)
    }

    /// Exclude a path pattern from archives; repeated patterns are ignored.
    pub fn add_exclusion(&mut self, pattern: &str) {
        archive::add_exclusion(&mut self.archive, pattern);
    }

    /// Stop excluding a path pattern, returning whether it was listed.
    pub fn remove_exclusion(&mut self, pattern: &str) -> bool {
        archive::remove_exclusion(&mut self.archive, pattern)
    }

    /// Append a repository. Duplicates are allowed.
    pub fn add_repository(&mut self, repository: Repository) {
        tracing::debug!("Adding {} repository {}", repository.repo_type, repository.url);
        self.repositories.push(repository);
    }
}
