#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod codec;
pub mod config;
pub mod model;

pub use analytics::{SnapshotDiff, Verdict, build_snapshot, check, compare, evaluate};
pub use codec::{SnapshotFormat, deserialize, serialize};
pub use config::{GlobPattern, SnapshotOptions, Thresholds};
pub use model::{FileMetric, FunctionMetric, Snapshot};
