//! Shared helpers for render integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use cfgen_lib::config::SystemConfig;
use tempfile::TempDir;

pub const DIRECTOR_UUID: &str = "8c0d4a3e-2f7b-4c1e-9a55-3d6f1b2e7c90";

/// Path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// A temporary system directory holding a copy of a fixture as `system_config.yml`.
pub struct SystemDir {
  pub temp: TempDir,
  pub config_path: PathBuf,
}

impl SystemDir {
  pub fn from_fixture(name: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("system_config.yml");
    fs::copy(fixture_path(name), &config_path).unwrap();
    Self { temp, config_path }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn load(&self) -> SystemConfig {
    SystemConfig::load(&self.config_path).unwrap()
  }

  pub fn deployments_dir(&self) -> PathBuf {
    self.path().join("deployments")
  }
}

/// Parse a written manifest for structural assertions.
pub fn read_yaml(path: &Path) -> serde_yaml::Value {
  let content = fs::read_to_string(path).unwrap();
  serde_yaml::from_str(&content).unwrap()
}
