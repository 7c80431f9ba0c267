pub mod aggregate;
pub mod compare;
pub mod evaluate;
pub mod rank;
pub mod severity;
pub mod snapshot_builder;

pub use aggregate::{AggregateSummary, Aggregator};
pub use compare::{GradeDelta, HotspotChurn, MetricDelta, SnapshotDiff, Trend, VerdictChange, compare};
pub use evaluate::{GateMetric, ThresholdBreach, Verdict, check, evaluate};
pub use rank::{HotspotRanker, SortOrder};
pub use severity::{ComplexityFlag, ComplexityTarget, GradeScale, MiBand, MiBands};
pub use snapshot_builder::build_snapshot;
