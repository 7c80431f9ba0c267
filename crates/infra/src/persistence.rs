pub mod file_reader;
pub mod file_writer;
pub mod snapshot_store;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use snapshot_store::FsSnapshotStore;
