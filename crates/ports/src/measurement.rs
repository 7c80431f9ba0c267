// crates/ports/src/measurement.rs
use std::path::Path;

use quality_probe_shared_kernel::{CcGrade, Result};
use serde::{Deserialize, Serialize};

/// Per-file record as written by the file-level analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecordDto {
    pub path: String,
    pub sloc: usize,
    pub maintainability_index: f64,
    pub cc_grade: CcGrade,
}

/// Per-function record as written by the function-level analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRecordDto {
    pub file_path: String,
    pub qualified_name: String,
    pub line_number: u32,
    pub cognitive_complexity: usize,
    pub is_typed: bool,
}

impl FunctionRecordDto {
    /// Identity of the record: `(file_path, qualified_name, line_number)`.
    pub fn key(&self) -> (&str, &str, u32) {
        (&self.file_path, &self.qualified_name, self.line_number)
    }
}

/// Complete record set of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Project root the analyzers ran against, if they reported one.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub files: Vec<FileRecordDto>,
    #[serde(default)]
    pub functions: Vec<FunctionRecordDto>,
}

/// Port for loading measurements.
///
/// Implementations must return every record of the run; the core does no
/// streaming aggregation.
pub trait MeasurementSource: Send + Sync {
    fn collect(&self, location: &Path) -> Result<MeasurementSet>;
}
