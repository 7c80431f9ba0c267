// crates/ports/src/snapshot_store.rs
use std::path::Path;

use quality_probe_shared_kernel::Result;

/// Port for persisting serialized snapshots.
pub trait SnapshotStore: Send + Sync {
    fn load(&self, location: &Path) -> Result<String>;
    fn save(&self, location: &Path, contents: &str) -> Result<()>;
}
