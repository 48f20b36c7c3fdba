//! Repository Layer
//!
//! Key-value store abstraction, its implementations, and the record store
//! adapter that maps the record list onto a single key.

mod traits;
mod memory;
mod file_store;
mod record_store;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use file_store::FileStore;
pub use record_store::{RecordStore, ITEMS_KEY};
