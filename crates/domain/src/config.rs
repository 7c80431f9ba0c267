pub mod aggregates;
pub mod value_objects;

pub use aggregates::SnapshotOptions;
pub use value_objects::{GlobPattern, Thresholds};
