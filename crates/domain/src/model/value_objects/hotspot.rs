use quality_probe_shared_kernel::{CognitiveComplexity, LineNumber, RecordPath};
use serde::{Deserialize, Serialize};

use crate::codec::one_decimal;

/// Entry of the lowest-maintainability file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHotspot {
    pub path: RecordPath,
    #[serde(serialize_with = "one_decimal")]
    pub maintainability_index: f64,
}

/// Entry of the most-complex function list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionHotspot {
    pub file_path: RecordPath,
    pub line_number: LineNumber,
    pub qualified_name: String,
    pub cognitive_complexity: CognitiveComplexity,
}

impl FunctionHotspot {
    /// `path:line name`, the identity used when comparing two runs.
    pub fn location(&self) -> String {
        format!("{}:{} {}", self.file_path, self.line_number, self.qualified_name)
    }
}
