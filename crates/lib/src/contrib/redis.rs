//! Redis service contributor.

use serde_json::json;

use super::{DedicatedNodes, ServiceContributor};
use crate::config::ValidatedConfig;
use crate::error::RenderError;
use crate::manifest::{Manifest, Properties, properties_from};

pub const REDIS_GATEWAY_TEMPLATE: &str = "redis_gateway";
pub const REDIS_NODE_TEMPLATE: &str = "redis_node";

#[derive(Debug, Clone, PartialEq)]
pub struct RedisServiceConfig {
  token: String,
  nodes: Option<DedicatedNodes>,
}

impl ServiceContributor for RedisServiceConfig {
  fn build_from_system_config(config: &ValidatedConfig) -> Result<Self, RenderError> {
    let nodes = DedicatedNodes::resolve(config.redis.as_ref(), config, Some(config.common_persistent_disk))?;
    Ok(Self {
      token: config.common_password.clone(),
      nodes,
    })
  }

  fn name(&self) -> &'static str {
    "redis"
  }

  fn add_core_jobs_to_manifest(&self, manifest: &mut Manifest) -> Result<(), RenderError> {
    manifest.add_core_template(REDIS_GATEWAY_TEMPLATE)
  }

  fn add_resource_pools_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_resource_pool(nodes.resource_pool(REDIS_NODE_TEMPLATE));
    }
  }

  fn add_jobs_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_job(nodes.job(REDIS_NODE_TEMPLATE, REDIS_NODE_TEMPLATE));
    }
  }

  // Plan sizes are per node; max_memory and max_swap are in megabytes.
  fn manifest_properties(&self) -> Properties {
    properties_from(json!({
      "redis_gateway": {
        "token": self.token,
        "supported_versions": ["2.2"],
        "version_aliases": { "current": "2.2" },
      },
      "service_plans": {
        "redis": {
          "free": {
            "job_management": { "low_water": 100, "high_water": 1400 },
            "configuration": {
              "capacity": 200,
              "max_memory": 16,
              "max_swap": 32,
              "max_clients": 500,
            },
          },
        },
      },
    }))
  }
}
