//! Writing rendered manifests to the system directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::DEPLOYMENTS_DIR;
use crate::error::RenderError;
use crate::manifest::Manifest;

/// Path of the core manifest: `<system_dir>/deployments/<system_name>-core.yml`.
pub fn manifest_path(system_dir: &Path, system_name: &str) -> PathBuf {
  system_dir
    .join(DEPLOYMENTS_DIR)
    .join(format!("{}-core.yml", system_name))
}

/// Serialize `manifest` as YAML and write it to [`manifest_path`].
///
/// The `deployments` directory is created if needed, and an existing file
/// is overwritten. The manifest is serialized before anything is created, so
/// a serialization failure leaves the filesystem untouched.
pub fn write_manifest(manifest: &Manifest, system_dir: &Path, system_name: &str) -> Result<PathBuf, RenderError> {
  let yaml = manifest.to_yaml()?;

  let path = manifest_path(system_dir, system_name);
  let deployments_dir = system_dir.join(DEPLOYMENTS_DIR);
  fs::create_dir_all(&deployments_dir).map_err(|source| RenderError::CreateDir {
    path: deployments_dir.clone(),
    source,
  })?;

  debug!(path = %path.display(), bytes = yaml.len(), "writing manifest");
  fs::write(&path, yaml).map_err(|source| RenderError::WriteFile {
    path: path.clone(),
    source,
  })?;

  Ok(path)
}
