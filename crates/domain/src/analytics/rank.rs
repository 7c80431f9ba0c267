// domain analytics hotspot ranking
use std::cmp::Ordering;

use crate::{
    config::SnapshotOptions,
    model::{FileHotspot, FileMetric, FunctionHotspot, FunctionMetric},
};

/// Sort direction of the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Lowest MI first; equal MI ordered by path.
pub fn compare_files(a: &FileMetric, b: &FileMetric) -> Ordering {
    SortOrder::Ascending
        .apply(a.maintainability_index().cmp(&b.maintainability_index()))
        .then_with(|| a.path().cmp(b.path()))
}

/// Highest complexity first; equal complexity ordered by file, then line.
///
/// The qualified name is a last resort so that two records at the same
/// location (e.g. overloads reported on one line) still order stably.
pub fn compare_functions(a: &FunctionMetric, b: &FunctionMetric) -> Ordering {
    SortOrder::Descending
        .apply(a.cognitive_complexity().cmp(&b.cognitive_complexity()))
        .then_with(|| a.file_path().cmp(b.file_path()))
        .then_with(|| a.line_number().cmp(&b.line_number()))
        .then_with(|| a.qualified_name().cmp(b.qualified_name()))
}

/// Produces the two ranked hotspot lists of a snapshot.
///
/// Both orderings are total over valid records, so the output depends only
/// on the input multiset and never on the order records arrived in.
pub struct HotspotRanker<'a> {
    options: &'a SnapshotOptions,
}

impl<'a> HotspotRanker<'a> {
    pub fn new(options: &'a SnapshotOptions) -> Self {
        Self { options }
    }

    /// At most `top_k` files, fewer when fewer are eligible.
    pub fn lowest_mi_files(&self, files: &[FileMetric]) -> Vec<FileHotspot> {
        let mut eligible: Vec<&FileMetric> = files
            .iter()
            .filter(|f| !self.options.is_excluded_from_hotspots(f.path()))
            .collect();
        eligible.sort_by(|a, b| compare_files(a, b));
        eligible
            .into_iter()
            .take(self.options.top_k)
            .map(|f| FileHotspot {
                path: f.path().clone(),
                maintainability_index: f.maintainability_index().value(),
            })
            .collect()
    }

    pub fn most_complex_functions(&self, functions: &[FunctionMetric]) -> Vec<FunctionHotspot> {
        let mut ranked: Vec<&FunctionMetric> = functions.iter().collect();
        ranked.sort_by(|a, b| compare_functions(a, b));
        ranked
            .into_iter()
            .take(self.options.top_k)
            .map(|f| FunctionHotspot {
                file_path: f.file_path().clone(),
                line_number: f.line_number(),
                qualified_name: f.qualified_name().to_string(),
                cognitive_complexity: f.cognitive_complexity(),
            })
            .collect()
    }
}
