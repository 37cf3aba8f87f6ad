//! PostgreSQL service contributor.
//!
//! The gateway always runs on the core node. Service nodes only exist when a
//! `postgresql` node group is configured.

use serde_json::json;

use super::{DedicatedNodes, ServiceContributor};
use crate::config::ValidatedConfig;
use crate::error::RenderError;
use crate::manifest::{Manifest, Properties, properties_from};

pub const POSTGRESQL_GATEWAY_TEMPLATE: &str = "postgresql_gateway";
pub const POSTGRESQL_NODE_TEMPLATE: &str = "postgresql_node";

const SUPPORTED_VERSION: &str = "9.0";

#[derive(Debug, Clone, PartialEq)]
pub struct PostgresqlServiceConfig {
  token: String,
  nodes: Option<DedicatedNodes>,
}

impl ServiceContributor for PostgresqlServiceConfig {
  fn build_from_system_config(config: &ValidatedConfig) -> Result<Self, RenderError> {
    Ok(Self {
      token: config.common_password.clone(),
      nodes: DedicatedNodes::resolve(config.postgresql.as_ref(), config, Some(config.common_persistent_disk))?,
    })
  }

  fn name(&self) -> &'static str {
    "postgresql"
  }

  fn add_core_jobs_to_manifest(&self, manifest: &mut Manifest) -> Result<(), RenderError> {
    manifest.add_core_template(POSTGRESQL_GATEWAY_TEMPLATE)
  }

  fn add_resource_pools_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_resource_pool(nodes.resource_pool(POSTGRESQL_NODE_TEMPLATE));
    }
  }

  fn add_jobs_to_manifest(&self, manifest: &mut Manifest) {
    if let Some(nodes) = &self.nodes {
      manifest.add_job(nodes.job(POSTGRESQL_NODE_TEMPLATE, POSTGRESQL_NODE_TEMPLATE));
    }
  }

  fn manifest_properties(&self) -> Properties {
    properties_from(json!({
      "postgresql_gateway": {
        "token": self.token,
        "supported_versions": [SUPPORTED_VERSION],
        "version_aliases": { "current": SUPPORTED_VERSION },
      },
      "service_plans": {
        "postgresql": {
          "free": {
            "job_management": { "low_water": 100, "high_water": 1400 },
            "configuration": {
              "capacity": 200,
              "max_db_size": 128,
              "max_long_query": 3,
              "max_long_tx": 30,
              "max_clients": 20,
            },
          },
        },
      },
    }))
  }
}
