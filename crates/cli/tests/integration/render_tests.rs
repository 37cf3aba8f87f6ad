use predicates::prelude::*;

use super::common::{DIRECTOR_UUID, TestEnv};

#[test]
fn render_writes_core_manifest() {
  let env = TestEnv::from_fixture("system_config.yml");

  env
    .cmd()
    .args(["render", "--director-uuid", DIRECTOR_UUID])
    .assert()
    .success()
    .stdout(predicate::str::contains("cf1-core.yml"))
    .stdout(predicate::str::contains("cf1-core"));

  let path = env.deployments_dir().join("cf1-core.yml");
  let manifest: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
  assert_eq!(manifest["director_uuid"].as_str(), Some(DIRECTOR_UUID));
  assert_eq!(
    manifest["properties"]["cc"]["srv_api_uri"].as_str(),
    Some("http://api.cf.example.com")
  );
}

#[test]
fn director_uuid_from_environment() {
  let env = TestEnv::from_fixture("system_config.yml");

  env
    .cmd()
    .env("CFGEN_DIRECTOR_UUID", "from-env")
    .arg("render")
    .assert()
    .success();

  let content = std::fs::read_to_string(env.deployments_dir().join("cf1-core.yml")).unwrap();
  assert!(content.contains("director_uuid: from-env"));
}

#[test]
fn unsupported_provider_writes_nothing() {
  let env = TestEnv::from_fixture("vsphere.yml");

  env
    .cmd()
    .args(["render", "--director-uuid", DIRECTOR_UUID])
    .assert()
    .failure()
    .stderr(predicate::str::contains("vsphere"));

  assert!(!env.deployments_dir().exists());
}

#[test]
fn incomplete_config_lists_missing_fields() {
  let env = TestEnv::from_fixture("incomplete.yml");

  env
    .cmd()
    .args(["render", "--director-uuid", DIRECTOR_UUID])
    .assert()
    .failure()
    .stderr(predicate::str::contains("release_version"))
    .stderr(predicate::str::contains("aws_security_group"));

  assert!(!env.deployments_dir().exists());
}
