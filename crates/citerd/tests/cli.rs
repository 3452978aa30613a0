//! Integration tests for the citer CLI commands.
//!
//! Only commands that stay offline are exercised here; every test gets its own configuration and
//! database in a temporary directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

// Helper function to create a clean command instance
fn citer() -> Command { Command::cargo_bin("citer").unwrap() }

// Helper to get temporary config and database paths
fn temp_paths() -> (tempfile::TempDir, PathBuf, PathBuf) {
  let dir = tempdir().unwrap();
  let config_path = dir.path().join("config.toml");
  let db_path = dir.path().join("citer.db");
  (dir, config_path, db_path)
}

fn init(config_path: &PathBuf, db_path: &PathBuf) {
  citer()
    .arg("init")
    .arg("--config")
    .arg(config_path)
    .arg("--db-path")
    .arg(db_path)
    .arg("--endpoint")
    .arg("http://127.0.0.1:9/api/website")
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("initialized successfully"));
}

#[test]
#[serial]
fn test_init_and_clean() {
  let (dir, config_path, db_path) = temp_paths();

  init(&config_path, &db_path);
  assert!(config_path.exists());
  assert!(db_path.exists());

  citer()
    .arg("clean")
    .arg("--config")
    .arg(&config_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Database files cleaned"));

  assert!(!db_path.exists());
  dir.close().unwrap();
}

#[test]
#[serial]
fn test_commands_require_init() {
  let (dir, config_path, _db_path) = temp_paths();

  citer()
    .arg("list")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("citer init"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_list_get_remove_on_empty_database() {
  let (dir, config_path, db_path) = temp_paths();
  init(&config_path, &db_path);

  citer()
    .arg("list")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No citations stored yet"));

  citer()
    .arg("get")
    .arg("abcdef")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No citation stored under id ABCDEF"));

  citer()
    .arg("remove")
    .arg("ABCDEF")
    .arg("--config")
    .arg(&config_path)
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("No citation stored under id ABCDEF"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_cite_invalid_url_fails_with_fallback() {
  let (dir, config_path, db_path) = temp_paths();
  init(&config_path, &db_path);

  citer()
    .arg("cite")
    .arg("not-a-url")
    .arg("--no-copy")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .failure()
    .stdout(predicate::str::contains("Citation generation failed"))
    .stdout(predicate::str::contains("Try the online version here: https://formatically.com"));

  citer()
    .arg("list")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No citations stored yet"));

  dir.close().unwrap();
}
