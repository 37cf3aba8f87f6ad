//! Required-field validation.
//!
//! Every missing field is reported at once so a user can fix the whole
//! config in one pass.

use tracing::debug;

use super::types::{SystemConfig, ValidatedConfig};
use crate::error::RenderError;

/// Fields that must be present before a manifest can be composed, in the
/// order they are reported.
pub const REQUIRED_FIELDS: [&str; 13] = [
  "system_dir",
  "bosh_provider",
  "release_name",
  "release_version",
  "stemcell_name",
  "stemcell_version",
  "core_server_flavor",
  "core_ip",
  "root_dns",
  "admin_emails",
  "common_password",
  "common_persistent_disk",
  "aws_security_group",
];

/// Names of the required fields that are absent from `config`.
///
/// Only presence is checked; an empty string or an empty list counts as set.
pub fn missing_fields(config: &SystemConfig) -> Vec<&'static str> {
  let present = [
    config.system_dir.is_some(),
    config.bosh_provider.is_some(),
    config.release_name.is_some(),
    config.release_version.is_some(),
    config.stemcell_name.is_some(),
    config.stemcell_version.is_some(),
    config.core_server_flavor.is_some(),
    config.core_ip.is_some(),
    config.root_dns.is_some(),
    config.admin_emails.is_some(),
    config.common_password.is_some(),
    config.common_persistent_disk.is_some(),
    config.aws_security_group.is_some(),
  ];

  REQUIRED_FIELDS
    .iter()
    .zip(present)
    .filter(|(_, present)| !present)
    .map(|(name, _)| *name)
    .collect()
}

/// The system name becomes `deployments/<name>-core.yml`, so it must stay a
/// single plain path component.
fn check_system_name(name: &str) -> Result<(), RenderError> {
  if name.is_empty() || name == "." || name == ".." || name.chars().any(std::path::is_separator) {
    debug!(name, "system name is not a plain file name");
    return Err(RenderError::InvalidSystemName {
      name: name.to_string(),
    });
  }
  Ok(())
}

impl SystemConfig {
  /// Check every required field and produce a [`ValidatedConfig`].
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::ConfigurationIncomplete`] naming every missing
  /// field. `system_name` is only reported when it is absent and cannot be
  /// derived from `system_dir`. Returns [`RenderError::InvalidSystemName`]
  /// when the name is empty, `.`/`..`, or contains a path separator.
  pub fn validate(&self) -> Result<ValidatedConfig, RenderError> {
    let (
      Some(system_dir),
      Some(bosh_provider),
      Some(release_name),
      Some(release_version),
      Some(stemcell_name),
      Some(stemcell_version),
      Some(core_server_flavor),
      Some(core_ip),
      Some(root_dns),
      Some(admin_emails),
      Some(common_password),
      Some(common_persistent_disk),
      Some(aws_security_group),
    ) = (
      self.system_dir.clone(),
      self.bosh_provider.clone(),
      self.release_name.clone(),
      self.release_version.clone(),
      self.stemcell_name.clone(),
      self.stemcell_version.clone(),
      self.core_server_flavor.clone(),
      self.core_ip.clone(),
      self.root_dns.clone(),
      self.admin_emails.clone(),
      self.common_password.clone(),
      self.common_persistent_disk,
      self.aws_security_group.clone(),
    )
    else {
      let missing = missing_fields(self);
      debug!(?missing, "system config is incomplete");
      return Err(RenderError::ConfigurationIncomplete { missing });
    };

    let system_name = self
      .system_name
      .clone()
      .or_else(|| system_dir.file_name().map(|name| name.to_string_lossy().into_owned()))
      .ok_or_else(|| RenderError::ConfigurationIncomplete {
        missing: vec!["system_name"],
      })?;
    check_system_name(&system_name)?;

    Ok(ValidatedConfig {
      system_dir,
      system_name,
      bosh_provider,
      release_name,
      release_version,
      stemcell_name,
      stemcell_version,
      core_server_flavor,
      core_ip,
      root_dns,
      admin_emails,
      common_password,
      common_persistent_disk,
      aws_security_group,
      dea: self.dea.clone(),
      postgresql: self.postgresql.clone(),
      redis: self.redis.clone(),
    })
  }
}
