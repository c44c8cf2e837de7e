//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, load_fixture(name)).unwrap();
    (temp_dir, path)
}

/// Write `body` as `config.toml` inside `dir`.
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

/// The motd binary with a clean, color-free environment.
pub fn motd() -> Command {
    let mut cmd = Command::cargo_bin("motd").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MOTD_CONFIG");
    cmd
}

/// The motd binary without `NO_COLOR`, for testing color flags.
pub fn motd_colorable() -> Command {
    let mut cmd = Command::cargo_bin("motd").unwrap();
    cmd.env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("MOTD_CONFIG");
    cmd
}
