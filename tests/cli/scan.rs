use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Workspace, document, failing_document, file, function, passing_document};

#[test]
fn passing_scan_exits_zero_with_text_summary() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd()
        .args(["scan", "m.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Maintainability snapshot for: /work/app"))
        .stdout(predicate::str::contains("Avg MI (all files)         : 72.0"))
        .stdout(predicate::str::contains("[WATCH]  app/core.py"))
        .stdout(predicate::str::contains("[OVER]  app/core.py:14  Engine.run"))
        .stdout(predicate::str::contains("[FAIL]").not());
}

#[test]
fn failing_scan_exits_one_and_prints_fail_lines() {
    let ws = Workspace::new();
    ws.write("m.json", &failing_document());

    ws.cmd()
        .args(["scan", "m.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] Average MI 45.0 is below threshold 60.0"))
        .stdout(predicate::str::contains("[FAIL] Typing coverage 0.0% is below threshold 80.0%"));
}

#[test]
fn json_output_is_a_snapshot() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    let output = ws.cmd().args(["scan", "m.json", "--format", "json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["file_count"], 2);
    assert_eq!(snapshot["avg_mi"], 72.0);
    assert_eq!(snapshot["typing_coverage_pct"], 100.0);
    assert_eq!(snapshot["passed"], true);
    assert_eq!(snapshot["lowest_mi_files"][0]["path"], "app/core.py");
    assert_eq!(snapshot["most_complex_functions"][0]["qualified_name"], "Engine.run");
}

#[test]
fn yaml_output() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd()
        .args(["scan", "m.json", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root_path: /work/app"))
        .stdout(predicate::str::contains("passed: true"));
}

#[test]
fn yaml_measurements_are_read_by_extension() {
    let ws = Workspace::new();
    ws.write(
        "m.yaml",
        "root: /y\nfiles:\n  - path: a.py\n    sloc: 5\n    maintainability_index: 88.0\n    cc_grade: A\nfunctions: []\n",
    );

    ws.cmd()
        .args(["scan", "m.yaml", "--fail-typing-below", "0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Maintainability snapshot for: /y"));
}

#[test]
fn flag_overrides_environment_floor() {
    let ws = Workspace::new();
    ws.write("m.json", &failing_document());

    ws.cmd()
        .args(["scan", "m.json", "--fail-mi-below", "40", "--fail-typing-below", "0"])
        .env("QUALITY_PROBE_FAIL_MI_BELOW", "99")
        .assert()
        .code(0);
}

#[test]
fn environment_floor_applies_without_flag() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd()
        .args(["scan", "m.json"])
        .env("QUALITY_PROBE_FAIL_MI_BELOW", "80")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] Average MI 72.0 is below threshold 80.0"));
}

#[test]
fn invalid_environment_value_is_an_error() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd()
        .args(["scan", "m.json"])
        .env("QUALITY_PROBE_FAIL_TYPING_BELOW", "lots")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("QUALITY_PROBE_FAIL_TYPING_BELOW"));
}

#[test]
fn zero_top_is_rejected() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd().args(["scan", "m.json", "--top", "0"]).assert().code(2).stderr(predicate::str::contains("--top"));
}

#[test]
fn top_limits_hotspot_lists() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    let output = ws.cmd().args(["scan", "m.json", "--format", "json", "--top", "1"]).output().unwrap();

    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["lowest_mi_files"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["most_complex_functions"].as_array().unwrap().len(), 1);
}

#[test]
fn hotspot_exclude_skips_matching_files() {
    let ws = Workspace::new();
    ws.write(
        "m.json",
        &document(
            "/r",
            vec![file("app/tests/test_core.py", 10, 20.0, "A"), file("app/core.py", 10, 70.0, "A")],
            vec![function("app/core.py", "f", 1, 1, true)],
        ),
    );

    let output = ws
        .cmd()
        .args(["scan", "m.json", "--format", "json", "--hotspot-exclude", "**/tests/**"])
        .output()
        .unwrap();

    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["file_count"], 2);
    assert_eq!(snapshot["lowest_mi_files"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["lowest_mi_files"][0]["path"], "app/core.py");
}

#[test]
fn empty_file_list_is_an_error() {
    let ws = Workspace::new();
    ws.write("m.json", &document("/r", vec![], vec![]));

    ws.cmd()
        .args(["scan", "m.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to aggregate"));
}

#[test]
fn duplicate_records_are_an_error() {
    let ws = Workspace::new();
    ws.write("m.json", &document("/r", vec![file("a.py", 1, 70.0, "A"), file("a.py", 2, 60.0, "A")], vec![]));

    ws.cmd().args(["scan", "m.json"]).assert().code(2).stderr(predicate::str::contains("duplicate file record"));
}

#[test]
fn missing_measurements_file_is_an_error() {
    let ws = Workspace::new();
    ws.cmd().args(["scan", "absent.json"]).assert().code(2);
}

#[test]
fn output_flag_stores_snapshot() {
    let ws = Workspace::new();
    ws.write("m.json", &failing_document());

    ws.cmd().args(["scan", "m.json", "--output", "snapshots/before.json"]).assert().code(1);

    let stored: Value = serde_json::from_str(&ws.read("snapshots/before.json")).unwrap();
    assert_eq!(stored["passed"], false);
    assert_eq!(stored["avg_mi"], 45.0);
    assert!(ws.path().join("snapshots/before.json").is_file());
}

#[test]
fn root_flag_overrides_document_root() {
    let ws = Workspace::new();
    ws.write("m.json", &passing_document());

    ws.cmd()
        .args(["scan", "m.json", "--root", "/elsewhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maintainability snapshot for: /elsewhere"));
}
