use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("goalgather")
        .env("GOALGATHER_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("goalgather")
        .env("GOALGATHER_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("auth_delay_ms = 1500"));
    assert!(contents.contains("# image_cache_dir ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("goalgather")
        .env("GOALGATHER_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_generate_prints_defaults() {
    cargo_bin_cmd!("goalgather")
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("display_name = \"You\""));
}

#[test]
fn test_broken_config_is_reported_with_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "default_venue = \"arena\"\n").unwrap();

    cargo_bin_cmd!("goalgather")
        .env("GOALGATHER_HOME", dir.path())
        .arg("events")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"))
        .stderr(predicate::str::contains("arena"));
}
