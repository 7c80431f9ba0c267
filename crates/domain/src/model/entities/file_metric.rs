use quality_probe_shared_kernel::{CcGrade, DomainResult, MaintainabilityIndex, RecordPath, Sloc};
use serde::{Deserialize, Serialize};

/// Measurements for one scanned source file.
///
/// Every field is a validated value object, so a `FileMetric` that exists
/// (whether built through [`FileMetric::new`] or deserialized) is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetric {
    path: RecordPath,
    sloc: Sloc,
    maintainability_index: MaintainabilityIndex,
    cc_grade: CcGrade,
}

impl FileMetric {
    pub fn new(path: impl Into<String>, sloc: usize, maintainability_index: f64, cc_grade: CcGrade) -> DomainResult<Self> {
        Ok(Self {
            path: RecordPath::new(path)?,
            sloc: Sloc::new(sloc),
            maintainability_index: MaintainabilityIndex::new(maintainability_index)?,
            cc_grade,
        })
    }

    #[inline]
    pub fn path(&self) -> &RecordPath {
        &self.path
    }

    #[inline]
    pub fn sloc(&self) -> Sloc {
        self.sloc
    }

    #[inline]
    pub fn maintainability_index(&self) -> MaintainabilityIndex {
        self.maintainability_index
    }

    #[inline]
    pub fn cc_grade(&self) -> CcGrade {
        self.cc_grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_malformed_values() {
        assert!(FileMetric::new("", 10, 70.0, CcGrade::A).is_err());
        assert!(FileMetric::new("a.py", 10, f64::NAN, CcGrade::A).is_err());
    }

    #[test]
    fn deserializes_and_validates() {
        let json = r#"{"path":"app/core.py","sloc":120,"maintainability_index":54.0,"cc_grade":"C"}"#;
        let metric: FileMetric = serde_json::from_str(json).expect("valid record");
        assert_eq!(metric.path().as_str(), "app/core.py");
        assert_eq!(metric.sloc(), Sloc::new(120));
        assert_eq!(metric.cc_grade(), CcGrade::C);

        let negative = r#"{"path":"a.py","sloc":-1,"maintainability_index":54.0,"cc_grade":"C"}"#;
        assert!(serde_json::from_str::<FileMetric>(negative).is_err());
    }
}
