use composer_manifest::core::ComposerError;
use composer_manifest::manifest::{ComposerJson, Repository, create_backup};
use composer_manifest::test_utils::{ManifestFixture, init_test_logging};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_edit_save_reload() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let path = ManifestFixture::library().write_to(temp.path()).unwrap();

    let mut composer = ComposerJson::from_path(&path).unwrap();
    composer.add_dependency("monolog/monolog", "^3.0").unwrap();
    composer.remove_dev_dependency("phpunit/phpunit");
    composer.set_psr4("Acme\\Blog\\Tests\\", "tests/");
    composer.add_exclusion("/tests");
    composer.add_repository(Repository::new("vcs", "https://github.com/acme/fork"));
    composer.save(&path, true).unwrap();

    let reloaded = ComposerJson::from_path(&path).unwrap();
    assert_eq!(reloaded.require, composer.require);
    assert_eq!(reloaded.require_dev, None);
    assert_eq!(reloaded.psr4_map(), composer.psr4_map());
    assert_eq!(reloaded.archive.exclude, vec!["/tests"]);
    assert_eq!(reloaded.repositories, composer.repositories);
    assert!(reloaded.validate().is_ok());
    assert!(reloaded.validate_constraints().is_ok());
}

#[test]
fn test_saved_file_is_sorted_and_indented() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("composer.json");

    let composer = ComposerJson::create_project("acme/app", "Company intranet application", "").unwrap();
    composer.save(&path, true).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let autoload = content.find("\"autoload\"").unwrap();
    let name = content.find("\"name\"").unwrap();
    let require = content.find("\"require\"").unwrap();
    assert!(autoload < name && name < require);
    assert!(content.contains("\n    \"name\": \"acme/app\""));
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_compact_output_parses_back() {
    let composer = ComposerJson::create_library("acme/lib", "A reusable component", "").unwrap();
    let json = composer.to_json(false).unwrap();
    assert!(!json.contains('\n'));

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "library");
    assert_eq!(value["require"]["php"], "^7.4");
}

#[test]
fn test_backup_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("composer.json");
    // Odd formatting must survive untouched
    fs::write(&path, "{\"name\":   \"acme/blog\"}\r\n").unwrap();

    let backup = create_backup(&path, "").unwrap();
    assert_eq!(fs::read(&backup).unwrap(), fs::read(&path).unwrap());
}

#[test]
fn test_ingestion_edge_cases() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("composer.json");

    fs::write(&path, "null").unwrap();
    assert_eq!(ComposerJson::from_path(&path).unwrap(), ComposerJson::default());

    fs::write(&path, "[1,2,3]").unwrap();
    assert!(matches!(
        ComposerJson::from_path(&path),
        Err(ComposerError::StructuralMismatch { .. })
    ));

    fs::write(&path, "{").unwrap();
    assert!(matches!(ComposerJson::from_path(&path), Err(ComposerError::MalformedInput { .. })));
}
