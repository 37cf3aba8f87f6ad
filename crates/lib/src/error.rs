//! Error types for manifest rendering

use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::MergeError;

/// Errors that abort a render.
///
/// None of these are retried. Each one is either a configuration problem or
/// an environment problem that has to be fixed before rendering again.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("these SystemConfig fields must not be nil: {}", missing.join(", "))]
  ConfigurationIncomplete { missing: Vec<&'static str> },

  #[error("system name '{name}' cannot be used as a deployment file name")]
  InvalidSystemName { name: String },

  #[error("no core job in the manifest to receive template '{template}'")]
  MissingCoreJob { template: String },

  #[error("no server flavor policy for provider '{provider}'")]
  UnsupportedProvider { provider: String },

  #[error("property '{path}' is already set in the manifest")]
  PropertyCollision { path: String },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[from] serde_yaml::Error),
}

impl From<MergeError> for RenderError {
  fn from(err: MergeError) -> Self {
    match err {
      MergeError::Collision { path } => RenderError::PropertyCollision { path },
    }
  }
}

impl RenderError {
  /// Names of the missing fields, if this is an incomplete-configuration error.
  pub fn missing_fields(&self) -> &[&'static str] {
    match self {
      RenderError::ConfigurationIncomplete { missing } => missing,
      _ => &[],
    }
  }
}
