use predicates::prelude::*;

use super::common::{DIRECTOR_UUID, TestEnv};

#[test]
fn plan_prints_manifest_without_writing() {
  let env = TestEnv::from_fixture("system_config.yml");

  env
    .cmd()
    .args(["plan", "--director-uuid", DIRECTOR_UUID])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("name: cf1-core"))
    .stdout(predicate::str::contains("redis_gateway"))
    .stderr(predicate::str::contains("would write"));

  assert!(!env.deployments_dir().exists());
}

#[test]
fn plan_matches_rendered_file() {
  let env = TestEnv::from_fixture("system_config.yml");

  let planned = env
    .cmd()
    .args(["plan", "--director-uuid", DIRECTOR_UUID])
    .output()
    .unwrap();
  assert!(planned.status.success());

  env
    .cmd()
    .args(["render", "--director-uuid", DIRECTOR_UUID])
    .assert()
    .success();

  let written = std::fs::read(env.deployments_dir().join("cf1-core.yml")).unwrap();
  assert_eq!(planned.stdout, written);
}
