pub mod document;

pub use document::{DocumentFormat, MeasurementDocumentReader};
