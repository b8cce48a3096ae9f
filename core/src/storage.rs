//! Concrete [`KeyValueStore`](storefront_common::storage::KeyValueStore)
//! backends.
//!
//! * [`file`]: one JSON document per key inside a data directory.
//! * [`memory`]: a process-local map, used where nothing should touch disk.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
