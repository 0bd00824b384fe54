//! Dependency map operations (`require`, `require-dev`).
//!
//! A dependency map goes from package name to version constraint. An absent
//! map (`None`) reads as empty; writers take `&mut DependencyMap`, so the
//! caller decides when to create it.

use crate::core::Result;
use crate::manifest::name;
use std::collections::BTreeMap;

/// Package name to version constraint.
pub type DependencyMap = BTreeMap<String, String>;

/// Whether `package` has an entry. `false` for an absent map.
pub fn exists(map: Option<&DependencyMap>, package: &str) -> bool {
    map.is_some_and(|m| m.contains_key(package))
}

/// Insert or overwrite `package -> version`.
///
/// Only the package name is validated; the constraint is stored as given.
/// Run [`crate::version::validate`] first if the constraint should be checked.
///
/// # Errors
///
/// Whatever [`name::validate`] reports. The map is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use composer_manifest::manifest::dependency::{self, DependencyMap};
///
/// let mut require = DependencyMap::new();
/// dependency::add(&mut require, "symfony/console", "^5.4")?;
/// dependency::add(&mut require, "symfony/console", "^6.0")?;
/// assert_eq!(require["symfony/console"], "^6.0");
///
/// assert!(dependency::add(&mut require, "php", ">=8.0").is_err());
/// assert_eq!(require.len(), 1);
/// # Ok::<(), composer_manifest::core::ComposerError>(())
/// ```
pub fn add(map: &mut DependencyMap, package: &str, version: &str) -> Result<()> {
    name::validate(package)?;

    tracing::debug!("Setting dependency {} = {:?}", package, version);
    map.insert(package.to_string(), version.to_string());
    Ok(())
}

/// Delete `package`, returning whether it was present.
pub fn remove(map: Option<&mut DependencyMap>, package: &str) -> bool {
    let removed = map.is_some_and(|m| m.remove(package).is_some());
    if removed {
        tracing::debug!("Removed dependency {}", package);
    }
    removed
}

/// A fresh map holding `base` overlaid with `overlay`; `overlay` wins on collisions.
///
/// Neither input is modified and absent inputs contribute nothing.
pub fn merge(base: Option<&DependencyMap>, overlay: Option<&DependencyMap>) -> DependencyMap {
    base.into_iter()
        .chain(overlay)
        .flat_map(|m| m.iter())
        .map(|(package, version)| (package.clone(), version.clone()))
        .collect()
}
