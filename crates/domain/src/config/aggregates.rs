pub mod options;

pub use options::SnapshotOptions;
