// crates/infra/src/measurement/document.rs
use std::{collections::HashSet, path::Path};

use log::{debug, warn};
use quality_probe_ports::{MeasurementSet, MeasurementSource};
use quality_probe_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Encoding of a measurement document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DocumentFormat {
    pub fn detect(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn parse(self, text: &str) -> Result<MeasurementSet> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Reads `{ root, files, functions }` documents written by the analyzers.
///
/// Duplicate file paths and duplicate function identities are rejected here
/// so that the aggregation core never has to second-guess its input.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeasurementDocumentReader;

impl MeasurementDocumentReader {
    pub fn parse(path: &Path, text: &str) -> Result<MeasurementSet> {
        let format = DocumentFormat::detect(path);
        let set = format.parse(text).map_err(|e| InfrastructureError::InvalidInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::reject_duplicates(path, &set)?;
        Ok(set)
    }

    fn reject_duplicates(path: &Path, set: &MeasurementSet) -> InfraResult<()> {
        let invalid = |reason: String| InfrastructureError::InvalidInput { path: path.to_path_buf(), reason };

        let mut seen_files = HashSet::with_capacity(set.files.len());
        if let Some(dup) = set.files.iter().find(|f| !seen_files.insert(f.path.as_str())) {
            return Err(invalid(format!("duplicate file record '{}'", dup.path)));
        }

        let mut seen_functions = HashSet::with_capacity(set.functions.len());
        if let Some(dup) = set
            .functions
            .iter()
            .find(|f| !seen_functions.insert(f.key()))
        {
            return Err(invalid(format!(
                "duplicate function record '{}:{} {}'",
                dup.file_path, dup.line_number, dup.qualified_name
            )));
        }

        let orphans = set.functions.iter().filter(|f| !seen_files.contains(f.file_path.as_str())).count();
        if orphans > 0 {
            warn!("{orphans} function records reference files missing from {}", path.display());
        }
        Ok(())
    }
}

impl MeasurementSource for MeasurementDocumentReader {
    fn collect(&self, location: &Path) -> Result<MeasurementSet> {
        let text = FileReader::read_to_string(location)?;
        let set = Self::parse(location, &text)?;
        debug!(
            "{}: {} files, {} functions",
            location.display(),
            set.files.len(),
            set.functions.len()
        );
        Ok(set)
    }
}
