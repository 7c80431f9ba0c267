use serde_json::{Value, json};

pub fn file(path: &str, sloc: usize, mi: f64, grade: &str) -> Value {
    json!({ "path": path, "sloc": sloc, "maintainability_index": mi, "cc_grade": grade })
}

pub fn function(file_path: &str, name: &str, line: u32, complexity: usize, typed: bool) -> Value {
    json!({
        "file_path": file_path,
        "qualified_name": name,
        "line_number": line,
        "cognitive_complexity": complexity,
        "is_typed": typed,
    })
}

pub fn document(root: &str, files: Vec<Value>, functions: Vec<Value>) -> String {
    json!({ "root": root, "files": files, "functions": functions }).to_string()
}

/// Healthy project: avg MI 72.0, typing 100%.
pub fn passing_document() -> String {
    document(
        "/work/app",
        vec![file("app/core.py", 400, 54.0, "C"), file("app/util.py", 10, 90.0, "A")],
        vec![
            function("app/core.py", "Engine.run", 14, 22, true),
            function("app/util.py", "slugify", 3, 2, true),
        ],
    )
}

/// Avg MI 45.0 and typing 0%.
pub fn failing_document() -> String {
    document(
        "/work/app",
        vec![file("app/core.py", 120, 40.0, "D"), file("app/util.py", 30, 50.0, "B")],
        vec![function("app/core.py", "Engine.run", 14, 31, false)],
    )
}
