// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, QualityProbeError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    CcGrade, CognitiveComplexity, LineNumber, MaintainabilityIndex, RecordPath, Sloc,
};
