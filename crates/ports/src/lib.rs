//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`measurement`]: Loading the per-file and per-function records written by the analyzers
//! - [`snapshot_store`]: Reading and writing stored snapshots
//!
//! Port DTOs carry raw analyzer values. Validation into domain entities
//! happens in the use case layer.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod snapshot_store;

pub use measurement::{FileRecordDto, FunctionRecordDto, MeasurementSet, MeasurementSource};
pub use snapshot_store::SnapshotStore;
