//! Pass/fail gate over the two headline metrics.

use std::fmt;

use serde::Serialize;

use crate::{config::Thresholds, model::Snapshot};

/// Metric a threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateMetric {
    AvgMi,
    TypingCoveragePct,
}

impl GateMetric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AvgMi => "average MI",
            Self::TypingCoveragePct => "typing coverage",
        }
    }
}

impl fmt::Display for GateMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdBreach {
    pub metric: GateMetric,
    pub actual: f64,
    pub floor: f64,
}

impl ThresholdBreach {
    const MAX_PRECISION: usize = 6;

    /// Decimal places needed to print `actual` apart from `floor`.
    ///
    /// One place normally; more when the one-decimal value would read equal
    /// to the floor (59.96 against 60 prints as 59.96, not 60.0).
    pub fn precision(&self) -> usize {
        (1..=Self::MAX_PRECISION)
            .find(|&p| format!("{:.p$}", self.actual) != format!("{:.p$}", self.floor))
            .unwrap_or(Self::MAX_PRECISION)
    }
}

impl fmt::Display for ThresholdBreach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision();
        let unit = match self.metric {
            GateMetric::AvgMi => "",
            GateMetric::TypingCoveragePct => "%",
        };
        write!(f, "{} {:.p$}{unit} < {:.1}{unit}", self.metric, self.actual, self.floor)
    }
}

/// Outcome of checking a snapshot against its floors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub breaches: Vec<ThresholdBreach>,
}

/// Compare both metrics with their floors. Equal to the floor passes.
///
/// The comparison uses the exact in-memory values, not the one-decimal
/// values a serialized snapshot carries, so a stored `avg_mi` of `60.0` can
/// sit next to `passed: false` when the exact mean was `59.96`.
pub fn check(snapshot: &Snapshot, thresholds: &Thresholds) -> Verdict {
    let gates = [
        (GateMetric::AvgMi, snapshot.avg_mi(), thresholds.mi_floor()),
        (GateMetric::TypingCoveragePct, snapshot.typing_coverage_pct(), thresholds.typing_floor_pct()),
    ];
    let breaches: Vec<ThresholdBreach> = gates
        .into_iter()
        .filter(|(_, actual, floor)| actual < floor)
        .map(|(metric, actual, floor)| ThresholdBreach { metric, actual, floor })
        .collect();
    Verdict { passed: breaches.is_empty(), breaches }
}

/// Consume `snapshot` and return it with `passed` set.
///
/// Re-evaluating an already evaluated snapshot overwrites the old verdict.
pub fn evaluate(snapshot: Snapshot, thresholds: &Thresholds) -> Snapshot {
    let passed = check(&snapshot, thresholds).passed;
    snapshot.with_passed(passed)
}
