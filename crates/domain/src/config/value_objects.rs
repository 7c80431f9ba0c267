pub mod glob_pattern;
pub mod thresholds;

pub use glob_pattern::GlobPattern;
pub use thresholds::Thresholds;
