use std::path::PathBuf;

use quality_probe_domain::{Snapshot, SnapshotOptions, Thresholds, Verdict};

/// Input of a single probe run.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub measurements: PathBuf,
    /// Overrides the root reported in the measurement document.
    pub root: Option<String>,
    pub options: SnapshotOptions,
    pub thresholds: Thresholds,
    /// Where to store the evaluated snapshot; the extension picks the format.
    pub save_to: Option<PathBuf>,
}

impl ProbeRequest {
    pub fn new(measurements: impl Into<PathBuf>) -> Self {
        Self {
            measurements: measurements.into(),
            root: None,
            options: SnapshotOptions::default(),
            thresholds: Thresholds::default(),
            save_to: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeOutput {
    pub snapshot: Snapshot,
    pub verdict: Verdict,
}
