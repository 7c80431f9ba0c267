use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use quality_probe_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileReader::read_to_string(&path).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { path: p, .. } if p == path));
    }
}
