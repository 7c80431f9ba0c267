use quality_probe_shared_kernel::{CognitiveComplexity, Sloc};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::aggregate::AggregateSummary,
    codec::{one_decimal, round_one_decimal},
    model::value_objects::{FileHotspot, FunctionHotspot, GradeHistogram},
};

/// Aggregate result of one probe run.
///
/// Built once by [`crate::build_snapshot`] and never mutated afterwards;
/// [`crate::evaluate`] consumes a snapshot and returns a new one with
/// `passed` set. Field order here is the serialized key order, so new fields
/// go at the end and must tolerate absence when reading older snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    root_path: String,
    file_count: usize,
    total_sloc: Sloc,
    #[serde(serialize_with = "one_decimal")]
    avg_sloc_per_file: f64,
    #[serde(serialize_with = "one_decimal")]
    avg_mi: f64,
    low_mi_file_count: usize,
    cc_grade_histogram: GradeHistogram,
    high_cc_func_count: usize,
    function_count: usize,
    typed_function_count: usize,
    #[serde(serialize_with = "one_decimal")]
    typing_coverage_pct: f64,
    #[serde(serialize_with = "one_decimal")]
    avg_cognitive_complexity: f64,
    max_cognitive_complexity: CognitiveComplexity,
    lowest_mi_files: Vec<FileHotspot>,
    most_complex_functions: Vec<FunctionHotspot>,
    #[serde(default)]
    passed: Option<bool>,
}

impl Snapshot {
    pub(crate) fn assemble(
        root_path: String,
        summary: AggregateSummary,
        lowest_mi_files: Vec<FileHotspot>,
        most_complex_functions: Vec<FunctionHotspot>,
    ) -> Self {
        Self {
            root_path,
            file_count: summary.file_count,
            total_sloc: summary.total_sloc,
            avg_sloc_per_file: summary.avg_sloc_per_file,
            avg_mi: summary.avg_mi,
            low_mi_file_count: summary.low_mi_file_count,
            cc_grade_histogram: summary.cc_grade_histogram,
            high_cc_func_count: summary.high_cc_func_count,
            function_count: summary.function_count,
            typed_function_count: summary.typed_function_count,
            typing_coverage_pct: summary.typing_coverage_pct,
            avg_cognitive_complexity: summary.avg_cognitive_complexity,
            max_cognitive_complexity: summary.max_cognitive_complexity,
            lowest_mi_files,
            most_complex_functions,
            passed: None,
        }
    }

    pub(crate) fn with_passed(self, passed: bool) -> Self {
        Self { passed: Some(passed), ..self }
    }

    /// Copy with every float rounded the way the serializer writes it.
    ///
    /// `deserialize(serialize(s)) == s.rounded()` holds for every snapshot.
    pub fn rounded(&self) -> Self {
        let mut copy = self.clone();
        copy.avg_sloc_per_file = round_one_decimal(copy.avg_sloc_per_file);
        copy.avg_mi = round_one_decimal(copy.avg_mi);
        copy.typing_coverage_pct = round_one_decimal(copy.typing_coverage_pct);
        copy.avg_cognitive_complexity = round_one_decimal(copy.avg_cognitive_complexity);
        for hotspot in &mut copy.lowest_mi_files {
            hotspot.maintainability_index = round_one_decimal(hotspot.maintainability_index);
        }
        copy
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn total_sloc(&self) -> Sloc {
        self.total_sloc
    }

    pub fn avg_sloc_per_file(&self) -> f64 {
        self.avg_sloc_per_file
    }

    /// Unweighted mean: every file counts once regardless of its size.
    pub fn avg_mi(&self) -> f64 {
        self.avg_mi
    }

    pub fn low_mi_file_count(&self) -> usize {
        self.low_mi_file_count
    }

    pub fn cc_grade_histogram(&self) -> &GradeHistogram {
        &self.cc_grade_histogram
    }

    pub fn high_cc_func_count(&self) -> usize {
        self.high_cc_func_count
    }

    pub fn function_count(&self) -> usize {
        self.function_count
    }

    pub fn typed_function_count(&self) -> usize {
        self.typed_function_count
    }

    pub fn typing_coverage_pct(&self) -> f64 {
        self.typing_coverage_pct
    }

    pub fn avg_cognitive_complexity(&self) -> f64 {
        self.avg_cognitive_complexity
    }

    pub fn max_cognitive_complexity(&self) -> CognitiveComplexity {
        self.max_cognitive_complexity
    }

    pub fn lowest_mi_files(&self) -> &[FileHotspot] {
        &self.lowest_mi_files
    }

    pub fn most_complex_functions(&self) -> &[FunctionHotspot] {
        &self.most_complex_functions
    }

    /// `None` until the snapshot has gone through [`crate::evaluate`].
    pub fn passed(&self) -> Option<bool> {
        self.passed
    }
}
