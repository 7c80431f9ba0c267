pub mod file_metric;
pub mod function_metric;

pub use file_metric::FileMetric;
pub use function_metric::FunctionMetric;
