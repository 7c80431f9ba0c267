use quality_probe_shared_kernel::{DomainError, DomainResult};

/// Quality gate floors, already resolved from flags, environment and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    mi_floor: f64,
    typing_floor_pct: f64,
}

impl Thresholds {
    pub const DEFAULT_MI_FLOOR: f64 = 60.0;
    pub const DEFAULT_TYPING_FLOOR_PCT: f64 = 80.0;

    /// Both floors must be finite. A typing floor above 100 is accepted and
    /// simply cannot be met.
    pub fn new(mi_floor: f64, typing_floor_pct: f64) -> DomainResult<Self> {
        if !mi_floor.is_finite() {
            return Err(DomainError::InvalidConfiguration { reason: format!("mi_floor must be finite, got {mi_floor}") });
        }
        if !typing_floor_pct.is_finite() {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("typing_floor_pct must be finite, got {typing_floor_pct}"),
            });
        }
        Ok(Self { mi_floor, typing_floor_pct })
    }

    pub fn mi_floor(&self) -> f64 {
        self.mi_floor
    }

    pub fn typing_floor_pct(&self) -> f64 {
        self.typing_floor_pct
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { mi_floor: Self::DEFAULT_MI_FLOOR, typing_floor_pct: Self::DEFAULT_TYPING_FLOOR_PCT }
    }
}
