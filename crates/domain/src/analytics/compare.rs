// domain analytics snapshot comparison
use std::collections::BTreeSet;

use quality_probe_shared_kernel::CcGrade;
use serde::Serialize;

use crate::{codec::round_one_decimal, model::Snapshot};

/// Safely convert usize to i64, capping at i64::MAX to avoid wrap-around
fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn signed_diff(new_val: usize, old_val: usize) -> i64 {
    if new_val >= old_val { to_i64(new_val - old_val) } else { -to_i64(old_val - new_val) }
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(value: usize) -> f64 {
    value as f64
}

/// Which direction of change counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Better {
    Higher,
    Lower,
    Neither,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improved,
    Regressed,
    Unchanged,
    Changed,
}

impl Trend {
    fn of(delta: f64, better: Better) -> Self {
        if delta == 0.0 {
            return Self::Unchanged;
        }
        match (better, delta > 0.0) {
            (Better::Higher, true) | (Better::Lower, false) => Self::Improved,
            (Better::Higher, false) | (Better::Lower, true) => Self::Regressed,
            (Better::Neither, _) => Self::Changed,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Improved => "improved",
            Self::Regressed => "regressed",
            Self::Unchanged => "unchanged",
            Self::Changed => "changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: &'static str,
    pub old: f64,
    pub new: f64,
    pub delta: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeDelta {
    pub grade: CcGrade,
    pub old: usize,
    pub new: usize,
    pub delta: i64,
}

/// Entries that appeared in or dropped out of one ranked list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HotspotChurn {
    pub entered: Vec<String>,
    pub left: Vec<String>,
}

impl HotspotChurn {
    fn between(old: BTreeSet<String>, new: BTreeSet<String>) -> Self {
        Self {
            entered: new.difference(&old).cloned().collect(),
            left: old.difference(&new).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.left.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictChange {
    pub old: Option<bool>,
    pub new: Option<bool>,
}

impl VerdictChange {
    pub fn changed(&self) -> bool {
        self.old != self.new
    }
}

/// Difference between two snapshots of the same project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotDiff {
    pub old_root: String,
    pub new_root: String,
    pub metrics: Vec<MetricDelta>,
    pub grades: Vec<GradeDelta>,
    pub verdict: VerdictChange,
    pub lowest_mi_files: HotspotChurn,
    pub most_complex_functions: HotspotChurn,
}

impl SnapshotDiff {
    pub fn regressions(&self) -> impl Iterator<Item = &MetricDelta> {
        self.metrics.iter().filter(|m| m.trend == Trend::Regressed)
    }
}

/// Compare `old` against `new`. Deltas are `new - old`.
pub fn compare(old: &Snapshot, new: &Snapshot) -> SnapshotDiff {
    SnapshotDiff {
        old_root: old.root_path().to_string(),
        new_root: new.root_path().to_string(),
        metrics: metric_deltas(old, new),
        grades: grade_deltas(old, new),
        verdict: VerdictChange { old: old.passed(), new: new.passed() },
        lowest_mi_files: HotspotChurn::between(file_keys(old), file_keys(new)),
        most_complex_functions: HotspotChurn::between(function_keys(old), function_keys(new)),
    }
}

fn metric_deltas(old: &Snapshot, new: &Snapshot) -> Vec<MetricDelta> {
    let rows: [(&'static str, fn(&Snapshot) -> f64, Better); 11] = [
        ("file_count", |s| count_as_f64(s.file_count()), Better::Neither),
        ("total_sloc", |s| s.total_sloc().as_f64(), Better::Neither),
        ("avg_sloc_per_file", Snapshot::avg_sloc_per_file, Better::Lower),
        ("avg_mi", Snapshot::avg_mi, Better::Higher),
        ("low_mi_file_count", |s| count_as_f64(s.low_mi_file_count()), Better::Lower),
        ("high_cc_func_count", |s| count_as_f64(s.high_cc_func_count()), Better::Lower),
        ("function_count", |s| count_as_f64(s.function_count()), Better::Neither),
        ("typed_function_count", |s| count_as_f64(s.typed_function_count()), Better::Higher),
        ("typing_coverage_pct", Snapshot::typing_coverage_pct, Better::Higher),
        ("avg_cognitive_complexity", Snapshot::avg_cognitive_complexity, Better::Lower),
        ("max_cognitive_complexity", |s| s.max_cognitive_complexity().as_f64(), Better::Lower),
    ];
    rows.into_iter()
        .map(|(metric, value, better)| {
            let (old_value, new_value) = (round_one_decimal(value(old)), round_one_decimal(value(new)));
            let delta = round_one_decimal(new_value - old_value);
            MetricDelta { metric, old: old_value, new: new_value, delta, trend: Trend::of(delta, better) }
        })
        .collect()
}

fn grade_deltas(old: &Snapshot, new: &Snapshot) -> Vec<GradeDelta> {
    CcGrade::ALL
        .into_iter()
        .map(|grade| {
            let (o, n) = (old.cc_grade_histogram().count(grade), new.cc_grade_histogram().count(grade));
            GradeDelta { grade, old: o, new: n, delta: signed_diff(n, o) }
        })
        .collect()
}

fn file_keys(snapshot: &Snapshot) -> BTreeSet<String> {
    snapshot.lowest_mi_files().iter().map(|h| h.path.to_string()).collect()
}

fn function_keys(snapshot: &Snapshot) -> BTreeSet<String> {
    snapshot.most_complex_functions().iter().map(|h| h.location()).collect()
}
