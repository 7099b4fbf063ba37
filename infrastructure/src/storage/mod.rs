//! Storage adapters implementing the
//! [`KeyValueStorage`](quotebox_application::KeyValueStorage) port.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
