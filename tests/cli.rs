//! CLI integration tests driving the compiled binary against pre-rendered
//! manifests, so no helm installation is required.

use assert_cmd::Command;
use predicates::prelude::*;

fn chart_images() -> Command {
    Command::cargo_bin("chart-images").unwrap()
}

#[test]
fn get_from_manifest_file_renders_table() {
    chart_images()
        .args(["get", "--manifest", "tests/fixtures/rendered.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quay.io/prometheus/node-exporter:v1.1.2"))
        .stdout(predicate::str::contains("prometheus-standalone-server"));
}

#[test]
fn get_from_manifest_file_json() {
    let output = chart_images()
        .args([
            "get",
            "--manifest",
            "tests/fixtures/rendered.yaml",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["kind"], "DaemonSet");
    assert_eq!(
        records[0]["images"][0],
        "quay.io/prometheus/node-exporter:v1.1.2"
    );
}

#[test]
fn get_from_stdin_with_unique_and_registry() {
    let blob = std::fs::read_to_string("tests/fixtures/rendered.yaml").unwrap();

    chart_images()
        .args([
            "get",
            "--manifest",
            "-",
            "--unique",
            "--registry",
            "quay.io",
            "--format",
            "yaml",
        ])
        .write_stdin(blob)
        .assert()
        .success()
        .stdout(predicate::str::contains("quay.io/prometheus/prometheus:v2.26.0"))
        .stdout(predicate::str::contains("busybox").not());
}

#[test]
fn broken_document_aborts_unless_skipped() {
    let blob = "kind: Pod\nmetadata: [broken\n---\nkind: Pod\nmetadata:\n  name: ok\nspec:\n  containers:\n  - image: ok:1\n";

    chart_images()
        .args(["get", "--manifest", "-"])
        .write_stdin(blob)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode document 0"));

    chart_images()
        .args(["get", "--manifest", "-", "--skip-broken"])
        .write_stdin(blob)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:1"));
}

#[test]
fn output_flag_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("images.json");

    chart_images()
        .args([
            "get",
            "--manifest",
            "tests/fixtures/rendered.yaml",
            "--format",
            "json",
        ])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("k8s.gcr.io/kube-state-metrics/kube-state-metrics:v2.0.0"));
}
