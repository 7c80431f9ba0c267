use std::path::Path;

use log::debug;
use quality_probe_domain::{Snapshot, SnapshotDiff, SnapshotFormat, compare, deserialize};
use quality_probe_ports::SnapshotStore;
use quality_probe_shared_kernel::{ApplicationError, Result};

/// Loads two stored snapshots and diffs them.
pub struct CompareSnapshots<'a> {
    store: &'a dyn SnapshotStore,
}

impl<'a> CompareSnapshots<'a> {
    pub fn new(store: &'a dyn SnapshotStore) -> Self {
        Self { store }
    }

    pub fn run(&self, old: &Path, new: &Path) -> Result<SnapshotDiff> {
        let old_snapshot = self.load(old)?;
        let new_snapshot = self.load(new)?;
        let diff = compare(&old_snapshot, &new_snapshot);
        debug!("{} metrics regressed between {} and {}", diff.regressions().count(), old.display(), new.display());
        Ok(diff)
    }

    fn load(&self, location: &Path) -> Result<Snapshot> {
        let wrap = |e| ApplicationError::ComparisonFailed {
            reason: format!("cannot read snapshot {}", location.display()),
            source: Some(Box::new(e)),
        };
        let text = self.store.load(location).map_err(wrap)?;
        let format = SnapshotFormat::from_extension(location.extension().and_then(|e| e.to_str()));
        Ok(deserialize(&text, format).map_err(wrap)?)
    }
}
