//! Server flavor resolution.
//!
//! Converts a server flavor (such as `m1.large` on AWS) into the
//! `cloud_properties` fragment of a resource pool. Each provider has its own
//! shape for these properties, so a provider without a policy here is an
//! error rather than a guess.

use serde_json::Value;
use tracing::debug;

use crate::consts::AWS_PROVIDER;
use crate::error::RenderError;
use crate::manifest::CloudProperties;

/// Resolve `server_flavor` into cloud properties for `provider`.
///
/// For AWS the flavor is already an instance type:
///
/// ```
/// use cfgen_lib::flavor::cloud_properties_for_server_flavor;
///
/// let props = cloud_properties_for_server_flavor("m1.large", "aws").unwrap();
/// assert_eq!(props["instance_type"], "m1.large");
/// ```
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedProvider`] for any other provider.
pub fn cloud_properties_for_server_flavor(server_flavor: &str, provider: &str) -> Result<CloudProperties, RenderError> {
  match provider {
    AWS_PROVIDER => {
      debug!(provider, server_flavor, "resolved server flavor");
      let mut props = CloudProperties::new();
      props.insert("instance_type".to_string(), Value::from(server_flavor));
      Ok(props)
    }
    _ => Err(RenderError::UnsupportedProvider {
      provider: provider.to_string(),
    }),
  }
}
