pub mod filestore;
pub mod generic;
pub mod memory;
pub mod timed;

pub use filestore::FileReadStateStore;
pub use memory::{ActivityItem, MemoryItemStore, MemoryReadStateStore, StatusItem};
pub use timed::{TimedItemStore, TimedReadStateStore};
