use quality_probe_domain::{
    FileMetric, FunctionMetric, SnapshotFormat, SnapshotOptions, Thresholds, build_snapshot, deserialize,
    evaluate, serialize,
};
use quality_probe_shared_kernel::{CcGrade, CognitiveComplexity, DomainError};

fn file(path: &str, sloc: usize, mi: f64) -> FileMetric {
    FileMetric::new(path, sloc, mi, CcGrade::B).expect("valid file")
}

fn function(path: &str, name: &str, line: u32, cc: usize, typed: bool) -> FunctionMetric {
    FunctionMetric::new(path, name, line, cc, typed).expect("valid function")
}

#[test]
fn two_files_straddling_the_watch_floor() {
    let files = vec![file("a.py", 120, 54.0), file("b.py", 80, 90.0)];

    let snapshot = build_snapshot("/repo", &files, &[], &SnapshotOptions::default()).expect("non-empty");

    assert_eq!(snapshot.avg_mi(), 72.0);
    assert_eq!(snapshot.low_mi_file_count(), 1);
    assert_eq!(snapshot.avg_sloc_per_file(), 100.0);
}

#[test]
fn zero_functions_is_not_an_error() {
    let snapshot =
        build_snapshot("/repo", &[file("a.py", 5, 70.0)], &[], &SnapshotOptions::default()).expect("non-empty");

    assert_eq!(snapshot.function_count(), 0);
    assert_eq!(snapshot.typing_coverage_pct(), 0.0);
    assert_eq!(snapshot.avg_cognitive_complexity(), 0.0);
    assert_eq!(snapshot.max_cognitive_complexity(), CognitiveComplexity::ZERO);
}

#[test]
fn fewer_files_than_top_k_are_all_listed_in_ascending_order() {
    let files = vec![file("b.py", 1, 81.0), file("a.py", 1, 33.0)];

    let snapshot = build_snapshot("/repo", &files, &[], &SnapshotOptions::with_top_k(5)).expect("non-empty");

    let listed: Vec<_> = snapshot.lowest_mi_files().iter().map(|h| h.path.as_str()).collect();
    assert_eq!(listed, vec!["a.py", "b.py"]);
}

#[test]
fn no_files_is_empty_input() {
    let functions = vec![function("a.py", "f", 1, 2, true)];
    let result = build_snapshot("/repo", &[], &functions, &SnapshotOptions::default());
    assert_eq!(result, Err(DomainError::EmptyInput));
}

#[test]
fn complexity_tie_is_broken_by_file_path_before_line() {
    let files = vec![file("a.py", 1, 70.0), file("b.py", 1, 70.0)];
    let functions = vec![function("b.py", "g", 5, 4, true), function("a.py", "f", 10, 4, true)];

    let snapshot = build_snapshot("/repo", &files, &functions, &SnapshotOptions::default()).expect("non-empty");

    let order: Vec<_> = snapshot.most_complex_functions().iter().map(|h| h.location()).collect();
    assert_eq!(order, vec!["a.py:10 f", "b.py:5 g"]);
}

#[test]
fn json_layout_has_fixed_key_order_and_rounded_floats() {
    let files = vec![file("a.py", 10, 50.04), file("b.py", 11, 60.0), file("c.py", 12, 70.0)];
    let functions = vec![function("a.py", "f", 1, 3, true), function("a.py", "g", 9, 4, false), function("c.py", "h", 2, 5, false)];
    let snapshot = evaluate(
        build_snapshot("/repo", &files, &functions, &SnapshotOptions::with_top_k(1)).expect("non-empty"),
        &Thresholds::default(),
    );

    let json = serialize(&snapshot, SnapshotFormat::Json).expect("serializable");

    assert!(json.ends_with('\n'));
    let keys: Vec<_> = json
        .lines()
        .filter(|line| line.starts_with("  \"") && !line.starts_with("   "))
        .filter_map(|line| line.trim().split('"').nth(1))
        .collect();
    assert_eq!(
        keys,
        vec![
            "root_path",
            "file_count",
            "total_sloc",
            "avg_sloc_per_file",
            "avg_mi",
            "low_mi_file_count",
            "cc_grade_histogram",
            "high_cc_func_count",
            "function_count",
            "typed_function_count",
            "typing_coverage_pct",
            "avg_cognitive_complexity",
            "max_cognitive_complexity",
            "lowest_mi_files",
            "most_complex_functions",
            "passed",
        ]
    );
    assert!(json.contains("\"typing_coverage_pct\": 33.3"));
    assert!(json.contains("\"maintainability_index\": 50.0"));
    assert!(json.contains("\"passed\": false"));
}

#[test]
fn unknown_keys_are_ignored_and_missing_verdict_is_none() {
    let json = r#"{
        "root_path": "/repo",
        "file_count": 1,
        "total_sloc": 10,
        "avg_sloc_per_file": 10.0,
        "avg_mi": 70.0,
        "low_mi_file_count": 0,
        "cc_grade_histogram": {"A": 1},
        "high_cc_func_count": 0,
        "function_count": 0,
        "typed_function_count": 0,
        "typing_coverage_pct": 0.0,
        "avg_cognitive_complexity": 0.0,
        "max_cognitive_complexity": 0,
        "lowest_mi_files": [{"path": "a.py", "maintainability_index": 70.0}],
        "most_complex_functions": [],
        "analyzer_version": "9.9"
    }"#;

    let snapshot = deserialize(json, SnapshotFormat::Json).expect("forward compatible");

    assert_eq!(snapshot.passed(), None);
    assert_eq!(snapshot.cc_grade_histogram().count(CcGrade::A), 1);
    assert_eq!(snapshot.cc_grade_histogram().count(CcGrade::F), 0);
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_round_trip() {
    let files = vec![file("a.py", 10, 61.26)];
    let functions = vec![function("a.py", "f", 1, 3, true)];
    let snapshot = build_snapshot("/repo", &files, &functions, &SnapshotOptions::default()).expect("non-empty");

    let text = serialize(&snapshot, SnapshotFormat::Yaml).expect("serializable");
    let back = deserialize(&text, SnapshotFormat::Yaml).expect("parsable");

    assert_eq!(back, snapshot.rounded());
}
