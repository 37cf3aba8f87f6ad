//! The base manifest every system starts from.
//!
//! The base describes a single core node running the whole platform: the
//! message bus, router, cloud controller and its database, UAA, stager and
//! the internal Redis. Every address points at the core node and every
//! credential is the shared password. Contributors extend it afterwards.

use serde_json::{Value, json};

use super::defaults::{AccountCapacity, ManifestDefaults};
use super::types::{
  CloudProperties, Compilation, Job, JobNetwork, Manifest, Network, NetworkType, Properties, Release, ResourcePool,
  Stemcell, UpdatePolicy, properties_from,
};
use crate::consts::{CORE_NAME, DEFAULT_NETWORK, VIP_NETWORK};

/// Templates the core job always runs, in order.
pub const CORE_TEMPLATES: [&str; 9] = [
  "postgres",
  "nats",
  "router",
  "health_manager",
  "cloud_controller",
  "acm",
  "stager",
  "uaa",
  "vcap_redis",
];

/// Fully resolved inputs of [`base_manifest`].
///
/// Nothing here is validated; callers validate the system config first.
#[derive(Debug, Clone)]
pub struct BaseManifestInputs<'a> {
  pub deployment_name: &'a str,
  pub director_uuid: &'a str,
  pub release_name: &'a str,
  pub release_version: &'a str,
  pub stemcell_name: &'a str,
  pub stemcell_version: &'a str,
  pub compilation_cloud_properties: CloudProperties,
  pub core_cloud_properties: CloudProperties,
  pub core_ip: &'a str,
  pub root_dns: &'a str,
  pub admin_emails: &'a [String],
  pub common_password: &'a str,
  pub common_persistent_disk: u64,
  pub security_group: &'a str,
}

/// Build the base manifest.
///
/// The result depends only on `inputs` and `defaults`.
pub fn base_manifest(inputs: &BaseManifestInputs<'_>, defaults: &ManifestDefaults) -> Manifest {
  Manifest {
    name: inputs.deployment_name.to_string(),
    director_uuid: inputs.director_uuid.to_string(),
    release: Release {
      name: inputs.release_name.to_string(),
      version: inputs.release_version.to_string(),
    },
    compilation: Compilation {
      workers: defaults.compilation_workers,
      network: DEFAULT_NETWORK.to_string(),
      reuse_compilation_vms: true,
      cloud_properties: inputs.compilation_cloud_properties.clone(),
    },
    update: UpdatePolicy {
      canaries: defaults.canaries,
      canary_watch_time: defaults.canary_watch_time.to_string(),
      update_watch_time: defaults.update_watch_time.to_string(),
      max_in_flight: defaults.max_in_flight,
      max_errors: defaults.max_errors,
    },
    networks: vec![
      network(DEFAULT_NETWORK, NetworkType::Dynamic, inputs.security_group),
      network(VIP_NETWORK, NetworkType::Vip, inputs.security_group),
    ],
    resource_pools: vec![ResourcePool {
      name: CORE_NAME.to_string(),
      network: DEFAULT_NETWORK.to_string(),
      size: defaults.core_instances,
      stemcell: Stemcell {
        name: inputs.stemcell_name.to_string(),
        version: inputs.stemcell_version.to_string(),
      },
      cloud_properties: inputs.core_cloud_properties.clone(),
      persistent_disk: Some(inputs.common_persistent_disk),
    }],
    jobs: vec![Job {
      name: CORE_NAME.to_string(),
      template: CORE_TEMPLATES.iter().map(|t| t.to_string()).collect(),
      instances: defaults.core_instances,
      resource_pool: CORE_NAME.to_string(),
      networks: vec![
        JobNetwork::default_gateway(DEFAULT_NETWORK),
        JobNetwork::static_ip(VIP_NETWORK, inputs.core_ip),
      ],
      persistent_disk: Some(inputs.common_persistent_disk),
    }],
    properties: base_properties(inputs, defaults),
  }
}

fn network(name: &str, kind: NetworkType, security_group: &str) -> Network {
  let mut cloud_properties = CloudProperties::new();
  cloud_properties.insert("security_groups".to_string(), json!([security_group]));
  Network {
    name: name.to_string(),
    kind,
    cloud_properties,
  }
}

fn capacity(capacity: &AccountCapacity) -> Value {
  json!({
    "memory": capacity.memory,
    "app_uris": capacity.app_uris,
    "services": capacity.services,
    "apps": capacity.apps,
  })
}

fn base_properties(inputs: &BaseManifestInputs<'_>, d: &ManifestDefaults) -> Properties {
  let ip = inputs.core_ip;
  let password = inputs.common_password;

  properties_from(json!({
    "domain": inputs.root_dns,
    "env": null,
    "networks": { "apps": DEFAULT_NETWORK, "management": DEFAULT_NETWORK },
    "router": {
      "client_inactivity_timeout": d.router_inactivity_timeout,
      "app_inactivity_timeout": d.router_inactivity_timeout,
      "local_route": ip,
      "status": { "port": d.router_status_port, "user": "router", "password": password },
    },
    "nats": { "user": "nats", "password": password, "address": ip, "port": d.nats_port },
    "db": "ccdb",
    "ccdb": {
      "template": "postgres",
      "address": ip,
      "port": d.db_port,
      "databases": [
        { "tag": "cc", "name": "appcloud" },
        { "tag": "acm", "name": "acm" },
        { "tag": "uaa", "name": "uaa" },
      ],
      "roles": [
        { "name": "root", "password": password, "tag": "admin" },
        { "name": "acm", "password": password, "tag": "acm" },
        { "name": "uaa", "password": password, "tag": "uaa" },
      ],
    },
    "cc": {
      "description": "Cloud Foundry",
      "srv_api_uri": format!("http://api.{}", inputs.root_dns),
      "password": password,
      "token": d.cc_token,
      "allow_debug": true,
      "allow_registration": true,
      "admins": inputs.admin_emails,
      "admin_account_capacity": capacity(&d.admin_account_capacity),
      "default_account_capacity": capacity(&d.default_account_capacity),
      "new_stager_percent": d.new_stager_percent,
      "staging_upload_user": "vcap",
      "staging_upload_password": password,
      "uaa": {
        "enabled": true,
        "resource_id": "cloud_controller",
        "token_creation_email_filter": [""],
      },
      "service_extension": { "service_lifecycle": { "max_upload_size": d.max_upload_size } },
      "use_nginx": false,
    },
    "postgresql_server": { "max_connections": d.postgres_max_connections, "listen_address": "0.0.0.0" },
    "acm": { "user": "acm", "password": password },
    "acmdb": {
      "address": ip,
      "port": d.db_port,
      "roles": [{ "tag": "admin", "name": "acm", "password": password }],
      "databases": [{ "tag": "acm", "name": "acm" }],
    },
    "service_lifecycle": {
      "download_url": ip,
      "mount_point": "/var/vcap/service_lifecycle",
      "tmp_dir": "/var/vcap/service_lifecycle/tmp_dir",
      "resque": { "host": ip, "port": d.resque_port, "password": password },
    },
    "stager": {
      "max_staging_duration": d.max_staging_duration,
      "max_active_tasks": d.max_active_staging_tasks,
      "queues": ["staging"],
    },
    "uaa": {
      "cc": { "token_secret": d.uaa_token_secret, "client_secret": d.uaa_client_secret },
      "admin": { "client_secret": d.uaa_client_secret },
      "login": { "client_secret": d.uaa_client_secret },
      "batch": { "username": "uaa", "password": password },
      "port": d.uaa_port,
      "catalina_opts": d.uaa_catalina_opts,
      "no_ssl": true,
    },
    "uaadb": {
      "address": ip,
      "port": d.db_port,
      "roles": [{ "tag": "admin", "name": "uaa", "password": password }],
      "databases": [{ "tag": "uaa", "name": "uaa" }],
    },
    "vcap_redis": {
      "address": ip,
      "port": d.vcap_redis_port,
      "password": password,
      "maxmemory": d.vcap_redis_maxmemory,
    },
    "service_plans": {},
    "dea": { "max_memory": d.dea_max_memory },
  }))
}
