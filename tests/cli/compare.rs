use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Workspace, failing_document, passing_document};

fn store_before_and_after(ws: &Workspace) {
    ws.write("before.json", &failing_document());
    ws.write("after.json", &passing_document());
    ws.cmd().args(["scan", "before.json", "--output", "snap/old.json"]).assert().code(1);
    ws.cmd().args(["scan", "after.json", "--output", "snap/new.yaml"]).assert().code(0);
}

#[test]
fn text_comparison_reports_trends_and_verdict() {
    let ws = Workspace::new();
    store_before_and_after(&ws);

    ws.cmd()
        .args(["compare", "snap/old.json", "snap/new.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Summary"))
        .stdout(predicate::str::contains("avg_mi"))
        .stdout(predicate::str::contains("Verdict: failed -> passed"));
}

#[test]
fn json_comparison() {
    let ws = Workspace::new();
    store_before_and_after(&ws);

    let output = ws.cmd().args(["compare", "snap/old.json", "snap/new.yaml", "--format", "json"]).output().unwrap();

    assert!(output.status.success());
    let diff: Value = serde_json::from_slice(&output.stdout).unwrap();
    let avg_mi = diff["metrics"].as_array().unwrap().iter().find(|m| m["metric"] == "avg_mi").unwrap();
    assert_eq!(avg_mi["delta"], 27.0);
    assert_eq!(avg_mi["trend"], "improved");
    assert_eq!(diff["verdict"]["old"], false);
    assert_eq!(diff["verdict"]["new"], true);
}

#[test]
fn missing_snapshot_is_an_error() {
    let ws = Workspace::new();
    ws.cmd().args(["compare", "nope.json", "also-nope.json"]).assert().code(2);
}
