//! Implementation of the `cfgen render` command.
//!
//! Loads a system config, composes its core manifest and writes it to
//! `<system_dir>/deployments/<system_name>-core.yml`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cfgen_lib::config::SystemConfig;
use cfgen_lib::render::ManifestComposer;

use crate::output::{print_stat, print_success};

pub fn cmd_render(file: &str, director_uuid: &str) -> Result<()> {
  let path = Path::new(file);

  debug!(config = %file, "loading system config");
  let config = SystemConfig::load(path).with_context(|| format!("Failed to load system config: {}", file))?;
  let composer = ManifestComposer::new(&config, director_uuid).context("Invalid system config")?;
  let manifest_path = composer.perform().context("Failed to render manifest")?;

  print_success("Rendered deployment manifest");
  print_stat("Deployment", &composer.config().deployment_name());
  print_stat("Contributors", &composer.contributors().len().to_string());
  print_stat("Path", &manifest_path.display().to_string());

  Ok(())
}
