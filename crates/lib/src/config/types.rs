//! System configuration types.
//!
//! [`SystemConfig`] mirrors the YAML file: every field is optional so that a
//! partially filled config can be loaded and reported on. [`ValidatedConfig`]
//! is what validation produces, with every required field present.

use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Settings for one deployed system, as loaded from disk.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
  /// Working directory of the system; rendered manifests go below it.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub system_dir: Option<PathBuf>,
  /// Name of the system. Defaults to the final component of `system_dir`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub system_name: Option<String>,
  /// Infrastructure provider identifier, e.g. `aws`.
  #[serde(default)]
  pub bosh_provider: Option<String>,
  #[serde(default)]
  pub release_name: Option<String>,
  #[serde(default, deserialize_with = "string_or_number")]
  pub release_version: Option<String>,
  #[serde(default)]
  pub stemcell_name: Option<String>,
  #[serde(default, deserialize_with = "string_or_number")]
  pub stemcell_version: Option<String>,
  /// Server size of the core node, in the provider's own naming.
  #[serde(default)]
  pub core_server_flavor: Option<String>,
  /// Public address of the core node.
  #[serde(default)]
  pub core_ip: Option<String>,
  /// Root DNS domain; the API endpoint is `api.<root_dns>`.
  #[serde(default)]
  pub root_dns: Option<String>,
  #[serde(default)]
  pub admin_emails: Option<Vec<String>>,
  /// Password shared by every generated credential.
  #[serde(default)]
  pub common_password: Option<String>,
  /// Persistent disk size in megabytes.
  #[serde(default)]
  pub common_persistent_disk: Option<u64>,
  /// Security group applied to both networks.
  #[serde(default)]
  pub aws_security_group: Option<String>,
  /// Dedicated worker (DEA) nodes. Without it the DEA runs on the core node.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dea: Option<NodeGroup>,
  /// Dedicated PostgreSQL service nodes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub postgresql: Option<NodeGroup>,
  /// Dedicated Redis service nodes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub redis: Option<NodeGroup>,
}

/// A group of dedicated servers for one contributor.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeGroup {
  /// Number of servers. Zero means the component stays on the core node.
  #[serde(default)]
  pub count: u32,
  /// Server size; falls back to the core server flavor.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub server_flavor: Option<String>,
}

impl NodeGroup {
  pub fn new(count: u32, server_flavor: impl Into<String>) -> Self {
    Self {
      count,
      server_flavor: Some(server_flavor.into()),
    }
  }

  /// The group's server flavor, or `default` when it has none.
  pub fn flavor_or<'a>(&'a self, default: &'a str) -> &'a str {
    self.server_flavor.as_deref().unwrap_or(default)
  }
}

/// A system config with every required field present.
///
/// Only [`SystemConfig::validate`] constructs one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
  pub system_dir: PathBuf,
  pub system_name: String,
  pub bosh_provider: String,
  pub release_name: String,
  pub release_version: String,
  pub stemcell_name: String,
  pub stemcell_version: String,
  pub core_server_flavor: String,
  pub core_ip: String,
  pub root_dns: String,
  pub admin_emails: Vec<String>,
  pub common_password: String,
  pub common_persistent_disk: u64,
  pub aws_security_group: String,
  pub dea: Option<NodeGroup>,
  pub postgresql: Option<NodeGroup>,
  pub redis: Option<NodeGroup>,
}

impl ValidatedConfig {
  /// Deployment name of the core manifest, `<system_name>-core`.
  pub fn deployment_name(&self) -> String {
    format!("{}-core", self.system_name)
  }
}

/// Versions are often written unquoted in YAML (`version: 1`), so accept
/// integers as well as strings. Unquoted decimals are rejected: YAML reads
/// `1.10` as the float `1.1`, which would pin the wrong version.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Version {
    String(String),
    Integer(i64),
    Float(f64),
  }

  match Option::<Version>::deserialize(deserializer)? {
    None => Ok(None),
    Some(Version::String(s)) => Ok(Some(s)),
    Some(Version::Integer(i)) => Ok(Some(i.to_string())),
    Some(Version::Float(f)) => Err(D::Error::custom(format!(
      "unquoted decimal version {f} loses trailing zeros; quote it exactly as released"
    ))),
  }
}
