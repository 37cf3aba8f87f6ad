/// Subdirectory of the system directory that holds rendered manifests.
pub const DEPLOYMENTS_DIR: &str = "deployments";

/// Name of the core resource pool and of the core job.
pub const CORE_NAME: &str = "core";

/// Name of the dynamic network every job attaches to.
pub const DEFAULT_NETWORK: &str = "default";

/// Name of the network carrying the core node's static address.
pub const VIP_NETWORK: &str = "vip_network";

/// Provider identifier for Amazon Web Services.
pub const AWS_PROVIDER: &str = "aws";
