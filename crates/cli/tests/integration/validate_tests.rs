use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn complete_config_is_valid() {
  TestEnv::from_fixture("system_config.yml")
    .cmd()
    .arg("validate")
    .assert()
    .success()
    .stdout(predicate::str::contains("is complete"));
}

#[test]
fn missing_fields_are_all_reported() {
  TestEnv::from_fixture("incomplete.yml")
    .cmd()
    .arg("validate")
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing field: release_version"))
    .stderr(predicate::str::contains("missing field: common_password"))
    .stderr(predicate::str::contains("missing field: aws_security_group"));
}

#[test]
fn json_report() {
  let output = TestEnv::from_fixture("vsphere.yml")
    .cmd()
    .args(["validate", "--output", "json"])
    .output()
    .unwrap();
  assert!(!output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["valid"], false);
  assert_eq!(report["missing"], serde_json::json!([]));
  assert!(report["provider_error"].as_str().unwrap().contains("vsphere"));
}
