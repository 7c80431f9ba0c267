use std::path::Path;

use log::debug;
use quality_probe_ports::SnapshotStore;
use quality_probe_shared_kernel::Result;

use super::{FileReader, FileWriter};

/// Snapshot store backed by plain files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSnapshotStore;

impl SnapshotStore for FsSnapshotStore {
    fn load(&self, location: &Path) -> Result<String> {
        debug!("reading snapshot {}", location.display());
        Ok(FileReader::read_to_string(location)?)
    }

    fn save(&self, location: &Path, contents: &str) -> Result<()> {
        debug!("writing snapshot {} ({} bytes)", location.display(), contents.len());
        Ok(FileWriter::atomic_write(location, contents.as_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.json");
        FsSnapshotStore.save(&path, "{\"a\":1}\n").unwrap();
        assert_eq!(FsSnapshotStore.load(&path).unwrap(), "{\"a\":1}\n");
    }
}
