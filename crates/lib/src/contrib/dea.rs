//! Worker tier (DEA) contributor.
//!
//! Without dedicated nodes the DEA runs on the core node. With a `dea` node
//! group it gets its own resource pool and job instead.

use serde_json::json;

use super::{DedicatedNodes, ServiceContributor};
use crate::config::ValidatedConfig;
use crate::error::RenderError;
use crate::manifest::{Manifest, Properties, properties_from};

pub const DEA_TEMPLATE: &str = "dea";

/// Runtimes every DEA offers to applications.
pub const DEFAULT_RUNTIMES: [&str; 5] = ["ruby18", "ruby19", "node", "node06", "java"];

#[derive(Debug, Clone, PartialEq)]
pub struct DeaConfig {
  nodes: Option<DedicatedNodes>,
  runtimes: Vec<String>,
}

impl DeaConfig {
  /// Whether the DEA gets its own servers.
  pub fn is_dedicated(&self) -> bool {
    self.nodes.is_some()
  }
}

impl ServiceContributor for DeaConfig {
  fn build_from_system_config(config: &ValidatedConfig) -> Result<Self, RenderError> {
    Ok(Self {
      nodes: DedicatedNodes::resolve(config.dea.as_ref(), config, None)?,
      runtimes: DEFAULT_RUNTIMES.iter().map(|r| r.to_string()).collect(),
    })
  }

  fn name(&self) -> &'static str {
    "dea"
  }

  fn add_core_jobs_to_manifest(&self, manifest: &mut Manifest) -> Result<(), RenderError> {
    if self.nodes.is_none() {
      manifest.add_core_template(DEA_TEMPLATE)?;
    }
    Ok(())
  }

  fn add_resource_pools_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_resource_pool(nodes.resource_pool(DEA_TEMPLATE));
    }
  }

  fn add_jobs_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_job(nodes.job(DEA_TEMPLATE, DEA_TEMPLATE));
    }
  }

  fn manifest_properties(&self) -> Properties {
    properties_from(json!({
      "dea": { "runtimes": self.runtimes },
    }))
  }
}
