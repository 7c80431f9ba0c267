//! Severity bands shared by aggregation, ranking and display.

use std::fmt;

use quality_probe_shared_kernel::{CcGrade, CognitiveComplexity, DomainError, DomainResult};

/// Maintainability band of a single MI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MiBand {
    Watch,
    Moderate,
    High,
}

impl MiBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watch => "WATCH",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for MiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band limits: below `watch_floor` is WATCH, at or above `high_floor` is HIGH.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiBands {
    watch_floor: f64,
    high_floor: f64,
}

impl MiBands {
    pub const DEFAULT_WATCH_FLOOR: f64 = 60.0;
    pub const DEFAULT_HIGH_FLOOR: f64 = 80.0;

    pub fn new(watch_floor: f64, high_floor: f64) -> DomainResult<Self> {
        if !watch_floor.is_finite() || !high_floor.is_finite() || watch_floor > high_floor {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("MI bands need finite floors with watch <= high, got {watch_floor} / {high_floor}"),
            });
        }
        Ok(Self { watch_floor, high_floor })
    }

    pub fn watch_floor(&self) -> f64 {
        self.watch_floor
    }

    pub fn high_floor(&self) -> f64 {
        self.high_floor
    }

    pub fn classify(&self, mi: f64) -> MiBand {
        if mi < self.watch_floor {
            MiBand::Watch
        } else if mi < self.high_floor {
            MiBand::Moderate
        } else {
            MiBand::High
        }
    }

    /// Strictly below the watch floor.
    pub fn is_low(&self, mi: f64) -> bool {
        mi < self.watch_floor
    }
}

impl Default for MiBands {
    fn default() -> Self {
        Self { watch_floor: Self::DEFAULT_WATCH_FLOOR, high_floor: Self::DEFAULT_HIGH_FLOOR }
    }
}

/// Upper bounds (inclusive) of grades A through E; anything above is F.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeScale {
    upper_bounds: [usize; 5],
}

impl GradeScale {
    pub const DEFAULT_UPPER_BOUNDS: [usize; 5] = [5, 10, 20, 30, 40];

    pub fn new(upper_bounds: [usize; 5]) -> DomainResult<Self> {
        if upper_bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("grade breakpoints must be strictly increasing, got {upper_bounds:?}"),
            });
        }
        Ok(Self { upper_bounds })
    }

    pub fn grade_for(&self, complexity: CognitiveComplexity) -> CcGrade {
        let value = complexity.value();
        self.upper_bounds
            .iter()
            .zip(CcGrade::ALL)
            .find_map(|(bound, grade)| (value <= *bound).then_some(grade))
            .unwrap_or(CcGrade::F)
    }

    pub fn is_high(&self, complexity: CognitiveComplexity) -> bool {
        self.grade_for(complexity).is_high()
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self { upper_bounds: Self::DEFAULT_UPPER_BOUNDS }
    }
}

/// Whether a function exceeds the readability target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityFlag {
    Ok,
    Over,
}

impl ComplexityFlag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Over => "OVER",
        }
    }
}

impl fmt::Display for ComplexityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityTarget(usize);

impl ComplexityTarget {
    pub const DEFAULT: usize = 15;

    pub const fn new(target: usize) -> Self {
        Self(target)
    }

    pub const fn value(self) -> usize {
        self.0
    }

    pub fn flag(self, complexity: CognitiveComplexity) -> ComplexityFlag {
        if complexity.value() > self.0 { ComplexityFlag::Over } else { ComplexityFlag::Ok }
    }
}

impl Default for ComplexityTarget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
