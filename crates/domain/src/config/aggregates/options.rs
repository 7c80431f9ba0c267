use crate::{
    analytics::severity::{GradeScale, MiBands},
    config::GlobPattern,
};

/// Everything `build_snapshot` needs besides the records themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotOptions {
    /// Maximum length of each hotspot list. Zero yields empty lists.
    pub top_k: usize,
    pub mi_bands: MiBands,
    pub grade_scale: GradeScale,
    /// Files matching any of these are left out of `lowest_mi_files` only.
    pub hotspot_exclusions: Vec<GlobPattern>,
}

impl SnapshotOptions {
    pub const DEFAULT_TOP_K: usize = 5;

    pub fn with_top_k(top_k: usize) -> Self {
        Self { top_k, ..Self::default() }
    }

    pub fn is_excluded_from_hotspots(&self, path: &str) -> bool {
        self.hotspot_exclusions.iter().any(|pattern| pattern.matches(path))
    }
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
            mi_bands: MiBands::default(),
            grade_scale: GradeScale::default(),
            hotspot_exclusions: Vec::new(),
        }
    }
}
