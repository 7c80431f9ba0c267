pub mod histogram;
pub mod hotspot;
pub mod snapshot;

pub use histogram::GradeHistogram;
pub use hotspot::{FileHotspot, FunctionHotspot};
pub use snapshot::Snapshot;
