pub mod entities;
pub mod value_objects;

pub use entities::{FileMetric, FunctionMetric};
pub use value_objects::{FileHotspot, FunctionHotspot, GradeHistogram, Snapshot};
