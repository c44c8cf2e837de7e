//! Integration tests for the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use motd::Config;

use crate::helpers::{motd, write_config};

#[test]
fn config_path_prints_given_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("motd.toml");

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("motd.toml"));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[image]"))
        .stdout(predicate::str::contains("~/.motd_image"))
        .stdout(predicate::str::contains("checkupdates"));
}

#[test]
fn config_init_creates_default_file_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sub").join("config.toml");

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_migrate_yes_adds_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "# mine\n[image]\ncolor = \"red\"\n");

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ path = \"~/.motd_image\""))
        .stdout(predicate::str::contains("updated successfully"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# mine"));
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.image.color, "red");
    assert_eq!(config.fortune, Config::default().fortune);
}

#[test]
fn config_migrate_without_tty_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let original = "[image]\ncolor = \"red\"\n";
    let path = write_config(temp_dir.path(), original);

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn config_migrate_up_to_date_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    Config::default().save_to(&path).unwrap();

    motd()
        .arg("--config")
        .arg(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn invalid_config_exits_1_naming_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "[image\n");

    motd()
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.toml"));
}
