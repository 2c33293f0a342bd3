//! Local storage backends for the persisted session.

mod atomic_json;
mod file_local_store;
mod memory_local_store;

pub use atomic_json::AtomicJsonFile;
pub use file_local_store::FileLocalStore;
pub use memory_local_store::MemoryLocalStore;
