use super::composer_cmd;
use composer_manifest::manifest::ComposerJson;
use composer_manifest::test_utils::ManifestFixture;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_then_show() {
    let temp = TempDir::new().unwrap();

    composer_cmd(temp.path())
        .args(["init", "acme/blog", "--description", "A small blogging engine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized library acme/blog"));

    composer_cmd(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: acme/blog"))
        .stdout(predicate::str::contains("php ^7.4"))
        .stdout(predicate::str::contains("Acme\\Blog\\ => src/"));
}

#[test]
fn test_init_project_with_php_version() {
    let temp = TempDir::new().unwrap();

    composer_cmd(temp.path())
        .args([
            "init",
            "acme/app",
            "--description",
            "Company intranet application",
            "--project",
            "--php",
            ">=8.1",
        ])
        .assert()
        .success();

    let composer = ComposerJson::from_dir(temp.path()).unwrap();
    assert_eq!(composer.package_type, "project");
    assert_eq!(composer.require.unwrap()["php"], ">=8.1");
    assert_eq!(composer.require_dev.unwrap()["phpunit/phpunit"], "^9.0");
}

#[test]
fn test_init_rejects_bad_name() {
    let temp = TempDir::new().unwrap();

    composer_cmd(temp.path())
        .args(["init", "badname", "--description", "A small blogging engine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vendor/project"));

    assert!(!temp.path().join("composer.json").exists());
}

#[test]
fn test_init_refuses_existing_manifest() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::library().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .args(["init", "acme/other", "--description", "Some other package"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_validate_valid_manifest() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::library().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_validate_reports_invalid_constraint() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::invalid_constraint().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("latest"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_validate_reports_malformed_json() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::invalid_syntax().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON format"));
}

#[test]
fn test_validate_missing_manifest() {
    let temp = TempDir::new().unwrap();

    composer_cmd(temp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("composer.json"));
}

#[test]
fn test_require_and_remove() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::library().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .args(["require", "monolog/monolog", "^3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    composer_cmd(temp.path())
        .args(["require", "monolog/monolog", ">=3.0 <4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let composer = ComposerJson::from_dir(temp.path()).unwrap();
    assert_eq!(composer.require.as_ref().unwrap()["monolog/monolog"], ">=3.0 <4.0");

    composer_cmd(temp.path())
        .args(["remove", "monolog/monolog"])
        .assert()
        .success();

    let composer = ComposerJson::from_dir(temp.path()).unwrap();
    assert!(!composer.dependency_exists("monolog/monolog"));
}

#[test]
fn test_require_invalid_constraint_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = ManifestFixture::library().write_to(temp.path()).unwrap();
    let original = fs::read(&path).unwrap();

    composer_cmd(temp.path())
        .args(["require", "monolog/monolog", "1.0.*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.0.*"));

    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_require_dev_with_backup_and_file_flag() {
    let temp = TempDir::new().unwrap();
    let path = ManifestFixture::library().write_to(temp.path()).unwrap();
    let original = fs::read(&path).unwrap();

    composer_cmd(temp.path().parent().unwrap())
        .args(["require", "mockery/mockery", "^1.6", "--dev", "--backup", "--file"])
        .arg(&path)
        .assert()
        .success();

    assert_eq!(fs::read(temp.path().join("composer.json.bak")).unwrap(), original);
    let composer = ComposerJson::from_path(&path).unwrap();
    assert!(composer.dev_dependency_exists("mockery/mockery"));
}

#[test]
fn test_remove_missing_package() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::library().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .args(["remove", "acme/unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not listed in require"));
}

#[test]
fn test_edits_keep_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let path = ManifestFixture::with_unknown_keys().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .args(["require", "acme/tool", "^1.0"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"$schema\""));
    assert!(content.contains("\"funding\""));
    assert!(content.contains("\"canonical\": false"));
    assert!(content.contains("\"security\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    ManifestFixture::library().write_to(temp.path()).unwrap();

    composer_cmd(temp.path())
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Reading manifest"));
}
