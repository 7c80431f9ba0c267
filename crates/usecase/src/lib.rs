//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: Collect measurements, build and evaluate a snapshot
//! - [`compare`]: Diff two stored snapshots
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod compare;
pub mod dto;
pub mod orchestrator;

pub use compare::CompareSnapshots;
pub use dto::{ProbeOutput, ProbeRequest};
pub use orchestrator::RunProbe;
