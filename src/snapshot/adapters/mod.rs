//! Snapshot adapters.

pub mod file;
pub mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;
