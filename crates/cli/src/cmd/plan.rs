//! Implementation of the `cfgen plan` command.
//!
//! Composes the manifest exactly as `render` would and prints it to stdout.
//! Nothing is written to the system directory.

use std::path::Path;

use anyhow::{Context, Result};

use cfgen_lib::config::SystemConfig;
use cfgen_lib::render::{ManifestComposer, manifest_path};

pub fn cmd_plan(file: &str, director_uuid: &str) -> Result<()> {
  let path = Path::new(file);

  let config = SystemConfig::load(path).with_context(|| format!("Failed to load system config: {}", file))?;
  let composer = ManifestComposer::new(&config, director_uuid).context("Invalid system config")?;
  let manifest = composer.compose().context("Failed to compose manifest")?;
  let yaml = manifest.to_yaml().context("Failed to serialize manifest")?;

  let target = manifest_path(&composer.config().system_dir, &composer.config().system_name);
  eprintln!("# would write {}", target.display());
  print!("{}", yaml);

  Ok(())
}
