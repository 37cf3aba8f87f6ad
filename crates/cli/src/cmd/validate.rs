//! Implementation of the `cfgen validate` command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use cfgen_lib::config::{SystemConfig, missing_fields};
use cfgen_lib::flavor::cloud_properties_for_server_flavor;

use crate::output::{OutputFormat, print_error, print_json, print_success};

#[derive(Debug, Serialize)]
struct ValidationReport {
  valid: bool,
  missing: Vec<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  provider_error: Option<String>,
}

/// Report every missing field, and whether the provider can resolve the
/// core server flavor. Fails if either check fails.
pub fn cmd_validate(file: &str, output: OutputFormat) -> Result<()> {
  let path = Path::new(file);
  let config = SystemConfig::load(path).with_context(|| format!("Failed to load system config: {}", file))?;

  let missing = missing_fields(&config);
  let provider_error = match (&config.bosh_provider, &config.core_server_flavor) {
    (Some(provider), Some(flavor)) => cloud_properties_for_server_flavor(flavor, provider)
      .err()
      .map(|e| e.to_string()),
    _ => None,
  };

  let report = ValidationReport {
    valid: missing.is_empty() && provider_error.is_none(),
    missing,
    provider_error,
  };

  if output.is_json() {
    print_json(&report)?;
  } else if report.valid {
    print_success(&format!("{} is complete", file));
  } else {
    for field in &report.missing {
      print_error(&format!("missing field: {}", field));
    }
    if let Some(err) = &report.provider_error {
      print_error(err);
    }
  }

  if !report.valid {
    bail!("System config {} is not valid", file);
  }
  Ok(())
}
