//! Sample `composer.json` documents for tests.

use crate::constants::MANIFEST_FILENAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A named `composer.json` payload.
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// A library with runtime and dev dependencies and a PSR-4 map
    pub fn library() -> Self {
        Self {
            name: "library".to_string(),
            content: r#"
{
    "name": "acme/blog",
    "description": "A small blogging engine",
    "type": "library",
    "license": "MIT",
    "require": {
        "php": "^8.1",
        "symfony/console": "^6.0"
    },
    "require-dev": {
        "phpunit/phpunit": "^9.0"
    },
    "autoload": {
        "psr-4": {
            "Acme\\Blog\\": "src/"
        }
    },
    "minimum-stability": "stable"
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Keys the typed model does not know about, plus passthrough sub-keys
    pub fn with_unknown_keys() -> Self {
        Self {
            name: "with_unknown_keys".to_string(),
            content: r#"
{
    "$schema": "https://getcomposer.org/schema.json",
    "name": "acme/blog",
    "funding": [{"type": "github", "url": "https://github.com/sponsors/acme"}],
    "authors": [{"name": "Jane Doe", "homepage": "https://jane.test", "x-github": "janedoe"}],
    "archive": {"exclude": ["/tests"], "name": "acme-blog"},
    "config": {"sort-packages": true, "platform": {"php": "8.1.0"}},
    "support": {"issues": "https://github.com/acme/blog/issues", "security": "https://acme.test/security"},
    "repositories": [{"type": "composer", "url": "https://repo.acme.test", "canonical": false}]
}
"#
            .trim()
            .to_string(),
        }
    }

    /// A constraint outside the version grammar
    pub fn invalid_constraint() -> Self {
        Self {
            name: "invalid_constraint".to_string(),
            content: r#"{"name": "acme/blog", "require": {"symfony/console": "latest"}}"#.to_string(),
        }
    }

    /// Explicit `null` for fields other tools leave unset
    pub fn with_nulls() -> Self {
        Self {
            name: "with_nulls".to_string(),
            content: r#"
{
    "name": null,
    "description": null,
    "keywords": null,
    "authors": [{"name": "A", "role": null}],
    "support": null,
    "autoload": {"psr-4": {"App\\": "src/"}, "classmap": null},
    "repositories": [{"type": "vcs", "url": "https://github.com/acme/fork", "options": null}],
    "archive": null,
    "minimum-stability": null,
    "prefer-stable": null
}
"#
            .trim()
            .to_string(),
        }
    }

    /// Not JSON at all
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"{"name": "acme/blog", "require": {"#.to_string(),
        }
    }

    /// A field with the wrong JSON type
    pub fn wrong_shape() -> Self {
        Self {
            name: "wrong_shape".to_string(),
            content: r#"{"name": "acme/blog", "require": ["symfony/console"]}"#.to_string(),
        }
    }

    /// Write the payload as `composer.json` inside `dir`
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILENAME);
        fs::write(&manifest_path, &self.content)?;
        Ok(manifest_path)
    }
}
