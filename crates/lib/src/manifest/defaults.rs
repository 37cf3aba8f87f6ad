//! Operational constants of the base manifest.
//!
//! Every number and placeholder secret the base manifest uses that is not
//! derived from the system config lives here, so the policy can be read and
//! tested on its own and overridden in one place.

use std::fmt;

/// A watch window, in milliseconds, rendered as `<min>-<max>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchWindow {
  pub min_ms: u32,
  pub max_ms: u32,
}

impl WatchWindow {
  pub const fn new(min_ms: u32, max_ms: u32) -> Self {
    Self { min_ms, max_ms }
  }
}

impl fmt::Display for WatchWindow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.min_ms, self.max_ms)
  }
}

/// Per-account resource limits enforced by the cloud controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCapacity {
  pub memory: u32,
  pub app_uris: u32,
  pub services: u32,
  pub apps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDefaults {
  // compilation
  pub compilation_workers: u32,
  pub compilation_server_flavor: String,

  // update
  pub canaries: u32,
  pub canary_watch_time: WatchWindow,
  pub update_watch_time: WatchWindow,
  pub max_in_flight: u32,
  pub max_errors: u32,

  // core node
  pub core_instances: u32,

  // ports
  pub router_status_port: u16,
  pub nats_port: u16,
  pub db_port: u16,
  pub uaa_port: u16,
  pub resque_port: u16,
  pub vcap_redis_port: u16,

  // component tuning
  pub router_inactivity_timeout: u32,
  pub postgres_max_connections: u32,
  pub admin_account_capacity: AccountCapacity,
  pub default_account_capacity: AccountCapacity,
  pub new_stager_percent: u32,
  pub max_upload_size: u32,
  pub max_staging_duration: u32,
  pub max_active_staging_tasks: u32,
  pub dea_max_memory: u32,
  pub vcap_redis_maxmemory: u64,
  pub uaa_catalina_opts: String,

  // placeholder secrets
  pub cc_token: String,
  pub uaa_token_secret: String,
  pub uaa_client_secret: String,
}

impl Default for ManifestDefaults {
  fn default() -> Self {
    let capacity = AccountCapacity {
      memory: 2048,
      app_uris: 32,
      services: 16,
      apps: 16,
    };

    Self {
      compilation_workers: 10,
      compilation_server_flavor: "m1.medium".to_string(),
      canaries: 1,
      canary_watch_time: WatchWindow::new(30_000, 150_000),
      update_watch_time: WatchWindow::new(30_000, 150_000),
      max_in_flight: 4,
      max_errors: 1,
      core_instances: 1,
      router_status_port: 8080,
      nats_port: 4222,
      db_port: 2544,
      uaa_port: 8100,
      resque_port: 3456,
      vcap_redis_port: 3456,
      router_inactivity_timeout: 600,
      postgres_max_connections: 30,
      admin_account_capacity: capacity,
      default_account_capacity: capacity,
      new_stager_percent: 100,
      max_upload_size: 5,
      max_staging_duration: 120,
      max_active_staging_tasks: 20,
      dea_max_memory: 512,
      vcap_redis_maxmemory: 500_000_000,
      uaa_catalina_opts: "-Xmx128m -Xms30m -XX:MaxPermSize=128m".to_string(),
      cc_token: "TOKEN".to_string(),
      uaa_token_secret: "TOKEN_SECRET".to_string(),
      uaa_client_secret: "CLIENT_SECRET".to_string(),
    }
  }
}
