use std::fs;

use cfgen_lib::RenderError;
use cfgen_lib::config::{REQUIRED_FIELDS, SystemConfig};
use cfgen_lib::render::ManifestComposer;
use tracing_test::traced_test;

use super::common::{DIRECTOR_UUID, SystemDir, read_yaml};

#[test]
fn end_to_end_core_manifest() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let path = ManifestComposer::new(&system.load(), DIRECTOR_UUID)
    .unwrap()
    .perform()
    .unwrap();

  assert_eq!(path, system.deployments_dir().join("cf1-core.yml"));

  let yaml = read_yaml(&path);
  assert_eq!(yaml["name"].as_str(), Some("cf1-core"));
  assert_eq!(yaml["director_uuid"].as_str(), Some(DIRECTOR_UUID));
  assert_eq!(
    yaml["properties"]["cc"]["srv_api_uri"].as_str(),
    Some("http://api.cf.example.com")
  );
  assert_eq!(yaml["properties"]["ccdb"]["roles"][0]["password"].as_str(), Some("p@ss"));

  let cloud_properties = yaml["resource_pools"][0]["cloud_properties"].as_mapping().unwrap();
  assert_eq!(cloud_properties.len(), 1);
  assert_eq!(
    cloud_properties.get("instance_type").and_then(|v| v.as_str()),
    Some("m1.large")
  );

  for key in [
    "name",
    "director_uuid",
    "release",
    "compilation",
    "update",
    "networks",
    "resource_pools",
    "jobs",
    "properties",
  ] {
    assert!(yaml.get(key).is_some(), "missing top-level key {}", key);
  }
}

#[test]
fn renders_are_byte_identical() {
  let first = SystemDir::from_fixture("aws-dedicated.yml");
  let second = SystemDir::from_fixture("aws-dedicated.yml");

  // the manifest does not depend on where the system directory is
  let a = ManifestComposer::new(&first.load(), DIRECTOR_UUID).unwrap().perform().unwrap();
  let b = ManifestComposer::new(&second.load(), DIRECTOR_UUID).unwrap().perform().unwrap();
  assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());

  // rendering again over the existing file changes nothing
  let before = fs::read(&a).unwrap();
  ManifestComposer::new(&first.load(), DIRECTOR_UUID).unwrap().perform().unwrap();
  assert_eq!(fs::read(&a).unwrap(), before);
}

#[test]
fn unsupported_provider_writes_nothing() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let mut config = system.load();
  config.bosh_provider = Some("vsphere".to_string());

  let err = ManifestComposer::new(&config, DIRECTOR_UUID).unwrap().perform().unwrap_err();
  assert!(matches!(err, RenderError::UnsupportedProvider { ref provider } if provider == "vsphere"));
  assert!(!system.deployments_dir().exists());
}

#[test]
fn incomplete_config_reports_all_fields_and_writes_nothing() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let config = SystemConfig {
    system_dir: Some(system.path().to_path_buf()),
    ..SystemConfig::default()
  };

  let err = ManifestComposer::new(&config, DIRECTOR_UUID).unwrap_err();
  assert_eq!(err.missing_fields(), &REQUIRED_FIELDS[1..]);
  assert!(err.to_string().contains("aws_security_group"));
  assert!(!system.deployments_dir().exists());
}

#[test]
#[traced_test]
fn perform_logs_written_path() {
  let system = SystemDir::from_fixture("aws-core.yml");
  ManifestComposer::new(&system.load(), DIRECTOR_UUID).unwrap().perform().unwrap();

  assert!(logs_contain("composed manifest"));
  assert!(logs_contain("wrote deployment manifest"));
  assert!(logs_contain("cf1-core.yml"));
}

#[test]
fn escaping_system_name_writes_nothing() {
  let system = SystemDir::from_fixture("aws-core.yml");
  let mut config = system.load();
  config.system_name = Some("../escaped".into());

  let err = ManifestComposer::new(&config, DIRECTOR_UUID).unwrap_err();
  assert!(matches!(err, RenderError::InvalidSystemName { .. }));
  assert!(!system.path().join("escaped-core.yml").exists());
  assert!(!system.deployments_dir().exists());
}
