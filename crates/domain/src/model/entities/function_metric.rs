use quality_probe_shared_kernel::{CognitiveComplexity, DomainError, DomainResult, LineNumber, RecordPath};
use serde::{Deserialize, Serialize};

/// Measurements for one function or method.
///
/// `file_path` is a lookup key into the file set, not an ownership link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FunctionMetricRecord")]
pub struct FunctionMetric {
    qualified_name: String,
    file_path: RecordPath,
    line_number: LineNumber,
    cognitive_complexity: CognitiveComplexity,
    is_typed: bool,
}

impl FunctionMetric {
    pub fn new(
        file_path: impl Into<String>,
        qualified_name: impl Into<String>,
        line_number: u32,
        cognitive_complexity: usize,
        is_typed: bool,
    ) -> DomainResult<Self> {
        let qualified_name = qualified_name.into();
        if qualified_name.trim().is_empty() {
            return Err(DomainError::invalid_record("qualified_name", "must not be empty"));
        }
        Ok(Self {
            qualified_name,
            file_path: RecordPath::new(file_path)?,
            line_number: LineNumber::new(line_number)?,
            cognitive_complexity: CognitiveComplexity::new(cognitive_complexity),
            is_typed,
        })
    }

    #[inline]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    #[inline]
    pub fn file_path(&self) -> &RecordPath {
        &self.file_path
    }

    #[inline]
    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    #[inline]
    pub fn cognitive_complexity(&self) -> CognitiveComplexity {
        self.cognitive_complexity
    }

    #[inline]
    pub fn is_typed(&self) -> bool {
        self.is_typed
    }
}

#[derive(Deserialize)]
struct FunctionMetricRecord {
    qualified_name: String,
    file_path: String,
    line_number: u32,
    cognitive_complexity: usize,
    is_typed: bool,
}

impl TryFrom<FunctionMetricRecord> for FunctionMetric {
    type Error = DomainError;

    fn try_from(raw: FunctionMetricRecord) -> Result<Self, Self::Error> {
        Self::new(raw.file_path, raw.qualified_name, raw.line_number, raw.cognitive_complexity, raw.is_typed)
    }
}
