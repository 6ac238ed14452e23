pub mod file;
pub mod memory;
pub mod null;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use null::NullStore;
