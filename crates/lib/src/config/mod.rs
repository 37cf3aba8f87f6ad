//! System configuration.
//!
//! A system directory holds one YAML system config describing the target
//! infrastructure and the settings every generated credential, address and
//! disk is derived from. This module loads it and validates it into a
//! [`ValidatedConfig`] that the rest of the crate works with.

mod types;
mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use types::{NodeGroup, SystemConfig, ValidatedConfig};
pub use validate::{REQUIRED_FIELDS, missing_fields};

/// Errors that can occur while loading a system config file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read system config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse system config {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_yaml::Error },
}

impl SystemConfig {
  /// Load a system config from a YAML file.
  ///
  /// When the file does not name a `system_dir`, the directory containing the
  /// file is used. A relative `system_dir` is resolved against that directory.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let mut config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    let base_dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
      _ => PathBuf::from("."),
    };
    let base_dir = std::path::absolute(&base_dir).unwrap_or(base_dir);
    config.system_dir = Some(match config.system_dir.take() {
      Some(dir) if dir.is_relative() => base_dir.join(dir),
      Some(dir) => dir,
      None => base_dir,
    });

    debug!(path = %path.display(), system_dir = ?config.system_dir, "loaded system config");
    Ok(config)
  }

  /// Parse a system config from YAML text without touching the filesystem.
  pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
    serde_yaml::from_str(content)
  }
}
