//! Manifest types.
//!
//! The top level of the manifest is typed so that the skeleton keys are
//! always present and in a fixed order. Cloud properties and the
//! `properties` tree are free-form mappings; contributors extend the latter
//! through [`Manifest::merge_properties`].
//!
//! # Structure
//!
//! ```yaml
//! name: cf1-core
//! director_uuid: ...
//! release: { name, version }
//! compilation: { workers, network, reuse_compilation_vms, cloud_properties }
//! update: { canaries, canary_watch_time, update_watch_time, max_in_flight, max_errors }
//! networks: [default, vip_network]
//! resource_pools: [core, ...]
//! jobs: [core, ...]
//! properties: { domain, router, nats, ccdb, cc, uaa, ... }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::merge::{MergeError, deep_merge};
use crate::consts::CORE_NAME;
use crate::error::RenderError;

/// Provider-specific machine properties of a resource pool or network.
pub type CloudProperties = Map<String, Value>;

/// The `properties` tree, keyed by component name.
pub type Properties = Map<String, Value>;

/// Take the mapping out of a JSON object; any other value gives an empty tree.
pub fn properties_from(value: Value) -> Properties {
  match value {
    Value::Object(map) => map,
    _ => Properties::new(),
  }
}

/// A complete deployment manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
  pub name: String,
  pub director_uuid: String,
  pub release: Release,
  pub compilation: Compilation,
  pub update: UpdatePolicy,
  pub networks: Vec<Network>,
  pub resource_pools: Vec<ResourcePool>,
  pub jobs: Vec<Job>,
  pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
  pub name: String,
  pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compilation {
  pub workers: u32,
  pub network: String,
  pub reuse_compilation_vms: bool,
  pub cloud_properties: CloudProperties,
}

/// Rolling update policy. Watch times are `<min>-<max>` millisecond ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePolicy {
  pub canaries: u32,
  pub canary_watch_time: String,
  pub update_watch_time: String,
  pub max_in_flight: u32,
  pub max_errors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
  Dynamic,
  Vip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: NetworkType,
  pub cloud_properties: CloudProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
  pub name: String,
  pub version: String,
}

/// A named group of identical servers that jobs are placed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
  pub name: String,
  pub network: String,
  pub size: u32,
  pub stemcell: Stemcell,
  pub cloud_properties: CloudProperties,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub persistent_disk: Option<u64>,
}

/// An instance group: which templates run, how many, and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  pub name: String,
  pub template: Vec<String>,
  pub instances: u32,
  pub resource_pool: String,
  pub networks: Vec<JobNetwork>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub persistent_disk: Option<u64>,
}

/// A job's attachment to a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNetwork {
  pub name: String,
  /// Which of `dns`/`gateway` this network provides.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub static_ips: Option<Vec<String>>,
}

impl JobNetwork {
  /// A network that provides DNS and the default gateway.
  pub fn default_gateway(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      default: Some(vec!["dns".to_string(), "gateway".to_string()]),
      static_ips: None,
    }
  }

  pub fn static_ip(name: impl Into<String>, ip: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      default: None,
      static_ips: Some(vec![ip.into()]),
    }
  }
}

impl Manifest {
  /// The job named `core`.
  pub fn core_job(&self) -> Option<&Job> {
    self.jobs.iter().find(|job| job.name == CORE_NAME)
  }

  fn core_job_mut(&mut self) -> Option<&mut Job> {
    self.jobs.iter_mut().find(|job| job.name == CORE_NAME)
  }

  /// Append a template to the core job.
  ///
  /// Templates already on the core job are not added twice.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::MissingCoreJob`] if the manifest has no core job.
  pub fn add_core_template(&mut self, template: &str) -> Result<(), RenderError> {
    let core = self.core_job_mut().ok_or_else(|| RenderError::MissingCoreJob {
      template: template.to_string(),
    })?;

    if core.template.iter().any(|t| t == template) {
      warn!(template, "template already on core job");
      return Ok(());
    }

    debug!(template, "adding template to core job");
    core.template.push(template.to_string());
    Ok(())
  }

  pub fn add_resource_pool(&mut self, pool: ResourcePool) {
    debug!(name = %pool.name, size = pool.size, "adding resource pool");
    self.resource_pools.push(pool);
  }

  pub fn add_job(&mut self, job: Job) {
    debug!(name = %job.name, instances = job.instances, "adding job");
    self.jobs.push(job);
  }

  /// Deep-merge `properties` into the manifest's property tree.
  ///
  /// # Errors
  ///
  /// Returns [`MergeError::Collision`] if any value in `properties` is
  /// already set; the manifest is left unchanged in that case.
  pub fn merge_properties(&mut self, properties: Properties) -> Result<(), MergeError> {
    deep_merge(&mut self.properties, properties)
  }

  /// Serialize to YAML.
  pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(self)
  }
}
