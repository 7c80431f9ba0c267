// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod persistence;

pub use measurement::MeasurementDocumentReader;
pub use persistence::FsSnapshotStore;
