//! Rendering a system config into its core deployment manifest.
//!
//! A render runs these phases once, in order, and stops at the first error:
//!
//! 1. validate the system config (in [`ManifestComposer::new`])
//! 2. resolve the core and compilation server flavors
//! 3. build the base manifest
//! 4. apply each contributor, in registration order
//! 5. write `deployments/<system_name>-core.yml`
//!
//! Nothing is written unless every earlier phase succeeded.

mod writer;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{SystemConfig, ValidatedConfig};
use crate::contrib::Contributor;
use crate::error::RenderError;
use crate::flavor::cloud_properties_for_server_flavor;
use crate::manifest::{BaseManifestInputs, Manifest, ManifestDefaults, base_manifest};

pub use writer::{manifest_path, write_manifest};

/// Composes the core deployment manifest of one system.
///
/// A composer is bound to the system config it was built from; build a new
/// one for every config.
#[derive(Debug, Clone)]
pub struct ManifestComposer {
  config: ValidatedConfig,
  director_uuid: String,
  defaults: ManifestDefaults,
  contributors: Vec<Contributor>,
}

impl ManifestComposer {
  /// Validate `system_config` and build its contributors.
  ///
  /// `director_uuid` identifies the director the manifest targets.
  ///
  /// # Errors
  ///
  /// - [`RenderError::ConfigurationIncomplete`] listing every missing field
  /// - [`RenderError::UnsupportedProvider`] if a dedicated node group needs a
  ///   flavor the provider has no policy for
  pub fn new(system_config: &SystemConfig, director_uuid: impl Into<String>) -> Result<Self, RenderError> {
    let config = system_config.validate()?;
    debug!(system = %config.system_name, "system config is valid");

    let contributors = Contributor::registry(&config)?;

    Ok(Self {
      config,
      director_uuid: director_uuid.into(),
      defaults: ManifestDefaults::default(),
      contributors,
    })
  }

  /// Replace the operational defaults the base manifest is built from.
  pub fn with_defaults(mut self, defaults: ManifestDefaults) -> Self {
    self.defaults = defaults;
    self
  }

  pub fn config(&self) -> &ValidatedConfig {
    &self.config
  }

  /// Contributors in the order they are applied.
  pub fn contributors(&self) -> &[Contributor] {
    &self.contributors
  }

  /// Build the base manifest, before any contributor has run.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::UnsupportedProvider`] if the provider has no
  /// flavor policy.
  pub fn base(&self) -> Result<Manifest, RenderError> {
    let config = &self.config;

    let core_cloud_properties = cloud_properties_for_server_flavor(&config.core_server_flavor, &config.bosh_provider)?;
    let compilation_cloud_properties =
      cloud_properties_for_server_flavor(&self.defaults.compilation_server_flavor, &config.bosh_provider)?;

    let deployment_name = config.deployment_name();
    let inputs = BaseManifestInputs {
      deployment_name: &deployment_name,
      director_uuid: &self.director_uuid,
      release_name: &config.release_name,
      release_version: &config.release_version,
      stemcell_name: &config.stemcell_name,
      stemcell_version: &config.stemcell_version,
      compilation_cloud_properties,
      core_cloud_properties,
      core_ip: &config.core_ip,
      root_dns: &config.root_dns,
      admin_emails: &config.admin_emails,
      common_password: &config.common_password,
      common_persistent_disk: config.common_persistent_disk,
      security_group: &config.aws_security_group,
    };

    debug!(deployment = %deployment_name, "building base manifest");
    Ok(base_manifest(&inputs, &self.defaults))
  }

  /// Compose the complete manifest without writing it.
  pub fn compose(&self) -> Result<Manifest, RenderError> {
    let mut manifest = self.base()?;

    for contributor in &self.contributors {
      contributor.apply(&mut manifest)?;
    }

    info!(
      deployment = %manifest.name,
      resource_pools = manifest.resource_pools.len(),
      jobs = manifest.jobs.len(),
      "composed manifest"
    );
    Ok(manifest)
  }

  /// Compose the manifest and write it below the system directory.
  ///
  /// Returns the path of the written file.
  pub fn perform(&self) -> Result<PathBuf, RenderError> {
    let manifest = self.compose()?;
    let path = write_manifest(&manifest, &self.config.system_dir, &self.config.system_name)?;
    info!(path = %path.display(), "wrote deployment manifest");
    Ok(path)
  }
}
