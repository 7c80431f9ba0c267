// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod grade;
pub mod record;

pub use counts::{CognitiveComplexity, Sloc};
pub use grade::CcGrade;
pub use record::{LineNumber, MaintainabilityIndex, RecordPath};
