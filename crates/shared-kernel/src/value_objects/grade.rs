// crates/shared-kernel/src/value_objects/grade.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Cyclomatic-complexity letter grade. `A` is the simplest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CcGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl CcGrade {
    pub const ALL: [CcGrade; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// D, E and F count as high-complexity grades.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::D | Self::E | Self::F)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for CcGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CcGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown complexity grade: {other}")),
        }
    }
}
