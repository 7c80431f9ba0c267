// crates/shared-kernel/src/value_objects/record.rs
use std::{borrow::Borrow, cmp::Ordering, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Relative path of a measured source file, as reported by the analyzer.
///
/// Kept as a plain UTF-8 string rather than a `PathBuf` so that ordering and
/// serialization are byte-identical on every platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordPath(String);

impl RecordPath {
    pub fn new(path: impl Into<String>) -> DomainResult<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(DomainError::invalid_record("path", "must not be empty"));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RecordPath {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordPath> for String {
    fn from(path: RecordPath) -> Self {
        path.0
    }
}

impl Deref for RecordPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for RecordPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RecordPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based source line of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LineNumber(u32);

impl LineNumber {
    pub fn new(line: u32) -> DomainResult<Self> {
        if line == 0 {
            return Err(DomainError::invalid_record("line_number", "line numbers are 1-based"));
        }
        Ok(Self(line))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LineNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineNumber> for u32 {
    fn from(line: LineNumber) -> Self {
        line.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maintainability index of a file. Usually 0–100 but unbounded below.
///
/// Only finite values are representable, which makes the total order below
/// agree with the numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MaintainabilityIndex(f64);

impl MaintainabilityIndex {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_record(
                "maintainability_index",
                format!("must be a finite number, got {value}"),
            ));
        }
        // -0.0 would sort below 0.0 under total_cmp
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Eq for MaintainabilityIndex {}

impl PartialOrd for MaintainabilityIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MaintainabilityIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for MaintainabilityIndex {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaintainabilityIndex> for f64 {
    fn from(mi: MaintainabilityIndex) -> Self {
        mi.0
    }
}

impl fmt::Display for MaintainabilityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
