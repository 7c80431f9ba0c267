use quality_probe_shared_kernel::DomainResult;

use crate::{
    analytics::{aggregate::Aggregator, rank::HotspotRanker},
    config::SnapshotOptions,
    model::{FileMetric, FunctionMetric, Snapshot},
};

/// Build an unevaluated snapshot from the complete record set of one run.
///
/// Fails with [`DomainError::EmptyInput`](quality_probe_shared_kernel::DomainError::EmptyInput)
/// when `files` is empty. Function records are not required to reference a
/// known file; the join by `file_path` is informational only.
pub fn build_snapshot(
    root: impl Into<String>,
    files: &[FileMetric],
    functions: &[FunctionMetric],
    options: &SnapshotOptions,
) -> DomainResult<Snapshot> {
    let summary = Aggregator::aggregate(files, functions, &options.mi_bands, &options.grade_scale)?;
    let ranker = HotspotRanker::new(options);
    Ok(Snapshot::assemble(
        root.into(),
        summary,
        ranker.lowest_mi_files(files),
        ranker.most_complex_functions(functions),
    ))
}
