// tests/common/mod.rs
//! Shared helpers for CLI tests.

pub mod fixtures;
pub mod workspace;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use workspace::Workspace;
