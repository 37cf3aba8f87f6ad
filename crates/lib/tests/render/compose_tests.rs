use cfgen_lib::contrib::{Contributor, ServiceContributor};
use cfgen_lib::manifest::{CORE_TEMPLATES, ManifestDefaults, WatchWindow};
use cfgen_lib::render::ManifestComposer;

use super::common::{DIRECTOR_UUID, SystemDir};

#[test]
fn core_only_system_adds_no_pools_or_jobs() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let manifest = ManifestComposer::new(&system.load(), DIRECTOR_UUID)
    .unwrap()
    .compose()
    .unwrap();

  assert_eq!(manifest.resource_pools.len(), 1);
  assert_eq!(manifest.jobs.len(), 1);

  let template = &manifest.core_job().unwrap().template;
  let (base, contributed) = template.split_at(CORE_TEMPLATES.len());
  assert_eq!(base, CORE_TEMPLATES);
  assert_eq!(contributed, ["dea", "postgresql_gateway", "redis_gateway"]);
}

#[test]
fn dedicated_groups_get_pools_and_jobs() {
  let system = SystemDir::from_fixture("aws-dedicated.yml");
  let composer = ManifestComposer::new(&system.load(), DIRECTOR_UUID).unwrap();
  let manifest = composer.compose().unwrap();

  let pools: Vec<_> = manifest
    .resource_pools
    .iter()
    .map(|p| (p.name.as_str(), p.size))
    .collect();
  assert_eq!(pools, vec![("core", 1), ("dea", 3), ("postgresql_node", 1)]);

  let dea_pool = &manifest.resource_pools[1];
  assert_eq!(dea_pool.cloud_properties["instance_type"], "m2.xlarge");
  assert_eq!(dea_pool.stemcell.version, "0.6.7");

  let pg_job = &manifest.jobs[2];
  assert_eq!(pg_job.template, vec!["postgresql_node"]);
  assert_eq!(pg_job.persistent_disk, Some(8192));
  // the postgresql group has no flavor of its own
  assert_eq!(manifest.resource_pools[2].cloud_properties["instance_type"], "m1.large");

  let template = &manifest.core_job().unwrap().template;
  assert!(!template.iter().any(|t| t == "dea"));
  assert!(template.ends_with(&["postgresql_gateway".to_string(), "redis_gateway".to_string()]));
}

#[test]
fn registry_builds_each_contributor_once() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let composer = ManifestComposer::new(&system.load(), DIRECTOR_UUID).unwrap();

  let contributors = composer.contributors();
  assert_eq!(contributors.len(), 3);
  assert!(matches!(contributors[0], Contributor::Dea(_)));
  assert!(matches!(contributors[1], Contributor::Postgresql(_)));
  assert!(matches!(contributors[2], Contributor::Redis(_)));
  assert_eq!(contributors[2].as_service().name(), "redis");
}

#[test]
fn custom_defaults_flow_into_manifest() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let defaults = ManifestDefaults {
    compilation_workers: 4,
    compilation_server_flavor: "c1.medium".to_string(),
    canary_watch_time: WatchWindow::new(5_000, 60_000),
    ..ManifestDefaults::default()
  };
  let manifest = ManifestComposer::new(&system.load(), DIRECTOR_UUID)
    .unwrap()
    .with_defaults(defaults)
    .compose()
    .unwrap();

  assert_eq!(manifest.compilation.workers, 4);
  assert_eq!(manifest.compilation.cloud_properties["instance_type"], "c1.medium");
  assert_eq!(manifest.update.canary_watch_time, "5000-60000");
  assert_eq!(manifest.update.update_watch_time, "30000-150000");
}

#[test]
fn versions_are_rendered_as_strings() {
  let system = SystemDir::from_fixture("aws-dedicated.yml");
  let manifest = ManifestComposer::new(&system.load(), DIRECTOR_UUID)
    .unwrap()
    .compose()
    .unwrap();

  assert_eq!(manifest.release.version, "124");
  assert_eq!(manifest.name, "cf2-core");
  assert_eq!(manifest.director_uuid, DIRECTOR_UUID);
}
