//! Service contributors.
//!
//! A contributor extends the base manifest with one platform service. Each
//! one has the same four extension points, applied in this order:
//!
//! 1. [`ServiceContributor::add_core_jobs_to_manifest`] appends templates to the core job
//! 2. [`ServiceContributor::add_resource_pools_to_manifest`] appends resource pools
//! 3. [`ServiceContributor::add_jobs_to_manifest`] appends jobs
//! 4. [`ServiceContributor::merge_manifest_properties`] deep-merges new properties
//!
//! Contributions are additive: nothing already in the manifest is removed or
//! rewritten. The set of contributors is closed and ordered, see
//! [`Contributor::registry`]; their order fixes the order of the core job's
//! templates in the rendered manifest.

mod dea;
mod postgresql;
mod redis;

use tracing::debug;

use crate::config::{NodeGroup, ValidatedConfig};
use crate::consts::DEFAULT_NETWORK;
use crate::error::RenderError;
use crate::flavor::cloud_properties_for_server_flavor;
use crate::manifest::{CloudProperties, Job, JobNetwork, Manifest, MergeError, Properties, ResourcePool, Stemcell};

pub use dea::{DEA_TEMPLATE, DEFAULT_RUNTIMES, DeaConfig};
pub use postgresql::{POSTGRESQL_GATEWAY_TEMPLATE, POSTGRESQL_NODE_TEMPLATE, PostgresqlServiceConfig};
pub use redis::{REDIS_GATEWAY_TEMPLATE, REDIS_NODE_TEMPLATE, RedisServiceConfig};

/// The extension contract every service contributor implements.
pub trait ServiceContributor {
  /// Build the contributor from a validated system config.
  ///
  /// Dedicated node flavors are resolved here, so an unsupported provider
  /// fails before any manifest is built.
  fn build_from_system_config(config: &ValidatedConfig) -> Result<Self, RenderError>
  where
    Self: Sized;

  /// Short name used in logs.
  fn name(&self) -> &'static str;

  fn add_core_jobs_to_manifest(&self, manifest: &mut Manifest) -> Result<(), RenderError>;

  fn add_resource_pools_to_manifest(&self, manifest: &mut Manifest);

  fn add_jobs_to_manifest(&self, manifest: &mut Manifest);

  /// Properties this contributor owns.
  fn manifest_properties(&self) -> Properties;

  fn merge_manifest_properties(&self, manifest: &mut Manifest) -> Result<(), MergeError> {
    manifest.merge_properties(self.manifest_properties())
  }
}

/// The registered contributors.
#[derive(Debug, Clone, PartialEq)]
pub enum Contributor {
  Dea(DeaConfig),
  Postgresql(PostgresqlServiceConfig),
  Redis(RedisServiceConfig),
}

impl Contributor {
  /// Build every contributor, in registration order: worker tier,
  /// PostgreSQL service, Redis service.
  pub fn registry(config: &ValidatedConfig) -> Result<Vec<Contributor>, RenderError> {
    Ok(vec![
      Contributor::Dea(DeaConfig::build_from_system_config(config)?),
      Contributor::Postgresql(PostgresqlServiceConfig::build_from_system_config(config)?),
      Contributor::Redis(RedisServiceConfig::build_from_system_config(config)?),
    ])
  }

  pub fn as_service(&self) -> &dyn ServiceContributor {
    match self {
      Contributor::Dea(c) => c,
      Contributor::Postgresql(c) => c,
      Contributor::Redis(c) => c,
    }
  }

  /// Run all four extension points against `manifest`.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::PropertyCollision`] if the properties clash with
  /// ones already in the manifest, or [`RenderError::MissingCoreJob`] if there
  /// is no core job to extend.
  pub fn apply(&self, manifest: &mut Manifest) -> Result<(), RenderError> {
    let service = self.as_service();
    let name = service.name();

    debug!(contributor = name, "adding core jobs");
    service.add_core_jobs_to_manifest(manifest)?;
    debug!(contributor = name, "adding resource pools");
    service.add_resource_pools_to_manifest(manifest);
    debug!(contributor = name, "adding jobs");
    service.add_jobs_to_manifest(manifest);
    debug!(contributor = name, "merging properties");
    service.merge_manifest_properties(manifest)?;

    Ok(())
  }
}

/// Dedicated servers for one contributor, resolved from a [`NodeGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct DedicatedNodes {
  pub count: u32,
  pub cloud_properties: CloudProperties,
  pub stemcell: Stemcell,
  pub persistent_disk: Option<u64>,
}

impl DedicatedNodes {
  /// Resolve `group`, if it asks for at least one server.
  ///
  /// The group's flavor (or the core flavor) is resolved for the system's
  /// provider. `persistent_disk` is attached to the pool and the job.
  pub fn resolve(
    group: Option<&NodeGroup>,
    config: &ValidatedConfig,
    persistent_disk: Option<u64>,
  ) -> Result<Option<Self>, RenderError> {
    let Some(group) = group.filter(|g| g.count > 0) else {
      return Ok(None);
    };

    let flavor = group.flavor_or(&config.core_server_flavor);
    let cloud_properties = cloud_properties_for_server_flavor(flavor, &config.bosh_provider)?;

    Ok(Some(Self {
      count: group.count,
      cloud_properties,
      stemcell: Stemcell {
        name: config.stemcell_name.clone(),
        version: config.stemcell_version.clone(),
      },
      persistent_disk,
    }))
  }

  pub fn resource_pool(&self, name: &str) -> ResourcePool {
    ResourcePool {
      name: name.to_string(),
      network: DEFAULT_NETWORK.to_string(),
      size: self.count,
      stemcell: self.stemcell.clone(),
      cloud_properties: self.cloud_properties.clone(),
      persistent_disk: self.persistent_disk,
    }
  }

  /// A job running `template` on every server of the pool named `name`.
  pub fn job(&self, name: &str, template: &str) -> Job {
    Job {
      name: name.to_string(),
      template: vec![template.to_string()],
      instances: self.count,
      resource_pool: name.to_string(),
      networks: vec![JobNetwork::default_gateway(DEFAULT_NETWORK)],
      persistent_disk: self.persistent_disk,
    }
  }
}
