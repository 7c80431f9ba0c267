use quality_probe_shared_kernel::{CognitiveComplexity, DomainError, DomainResult, Sloc};

use crate::{
    analytics::severity::{GradeScale, MiBands},
    model::{FileMetric, FunctionMetric, GradeHistogram},
};

/// Scalar and histogram part of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    pub file_count: usize,
    pub total_sloc: Sloc,
    pub avg_sloc_per_file: f64,
    pub avg_mi: f64,
    pub low_mi_file_count: usize,
    pub cc_grade_histogram: GradeHistogram,
    pub high_cc_func_count: usize,
    pub function_count: usize,
    pub typed_function_count: usize,
    pub typing_coverage_pct: f64,
    pub avg_cognitive_complexity: f64,
    pub max_cognitive_complexity: CognitiveComplexity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FunctionTotals {
    count: usize,
    typed: usize,
    high: usize,
    complexity_sum: CognitiveComplexity,
    complexity_max: CognitiveComplexity,
}

/// Folds the complete record set of a run into summary statistics.
pub struct Aggregator;

impl Aggregator {
    /// Fails only when `files` is empty.
    pub fn aggregate(
        files: &[FileMetric],
        functions: &[FunctionMetric],
        bands: &MiBands,
        scale: &GradeScale,
    ) -> DomainResult<AggregateSummary> {
        if files.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let file_count = files.len();
        let total_sloc: Sloc = files.iter().map(FileMetric::sloc).sum();
        let low_mi_file_count = files
            .iter()
            .filter(|f| bands.is_low(f.maintainability_index().value()))
            .count();
        let cc_grade_histogram: GradeHistogram = files.iter().map(FileMetric::cc_grade).collect();

        let totals = Self::fold_functions(functions, scale);

        Ok(AggregateSummary {
            file_count,
            total_sloc,
            avg_sloc_per_file: total_sloc.as_f64() / count_as_f64(file_count),
            avg_mi: Self::mean_mi(files),
            low_mi_file_count,
            cc_grade_histogram,
            high_cc_func_count: totals.high,
            function_count: totals.count,
            typed_function_count: totals.typed,
            typing_coverage_pct: ratio_pct(totals.typed, totals.count),
            avg_cognitive_complexity: mean_or_zero(totals.complexity_sum.as_f64(), totals.count),
            max_cognitive_complexity: totals.complexity_max,
        })
    }

    /// Arithmetic mean over files, not weighted by SLOC.
    ///
    /// Values are summed in ascending order so that the result does not
    /// depend on the order the analyzer emitted the records in. If the plain
    /// sum overflows, each value is scaled by `1/n` before summing.
    fn mean_mi(files: &[FileMetric]) -> f64 {
        let mut values: Vec<_> = files.iter().map(FileMetric::maintainability_index).collect();
        values.sort_unstable();
        let n = count_as_f64(values.len());
        let sum: f64 = values.iter().map(|mi| mi.value()).sum();
        if sum.is_finite() { sum / n } else { values.iter().map(|mi| mi.value() / n).sum() }
    }

    fn fold_functions(functions: &[FunctionMetric], scale: &GradeScale) -> FunctionTotals {
        let init = FunctionTotals {
            count: 0,
            typed: 0,
            high: 0,
            complexity_sum: CognitiveComplexity::ZERO,
            complexity_max: CognitiveComplexity::ZERO,
        };
        functions.iter().fold(init, |mut acc, function| {
            let complexity = function.cognitive_complexity();
            acc.count += 1;
            acc.typed += usize::from(function.is_typed());
            acc.high += usize::from(scale.is_high(complexity));
            acc.complexity_sum += complexity;
            acc.complexity_max = acc.complexity_max.max(complexity);
            acc
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Zero when there is nothing to divide by.
fn mean_or_zero(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count_as_f64(count) }
}

fn ratio_pct(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { 100.0 * count_as_f64(part) / count_as_f64(whole) }
}
