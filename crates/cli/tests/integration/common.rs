//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const DIRECTOR_UUID: &str = "8c0d4a3e-2f7b-4c1e-9a55-3d6f1b2e7c90";

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Isolated system directory.
///
/// Each test gets its own temporary directory holding `system_config.yml`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Copy a fixture into a fresh system directory.
  pub fn from_fixture(name: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("system_config.yml");
    std::fs::copy(fixture_path(name), &config_path).unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", name, e));
    Self { temp }
  }

  pub fn deployments_dir(&self) -> PathBuf {
    self.temp.path().join("deployments")
  }

  /// A cfgen command running inside the system directory.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("cfgen");
    cmd.current_dir(self.temp.path()).env_remove("CFGEN_DIRECTOR_UUID");
    cmd
  }
}
