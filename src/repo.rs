use std::fmt::Debug;

pub mod file;
pub mod memory;

pub use file::DeckRepository;
pub use memory::MemoryStorage;

/// Path-addressable byte storage supplied by the caller
pub trait StorageProvider: Send + Sync + Debug {
    /// Read the raw bytes stored at `path`
    fn read(&self, path: &str) -> Option<Vec<u8>>;

    /// Write raw bytes to `path`, returning whether the write succeeded
    fn write(&mut self, path: &str, data: &[u8]) -> bool;

    /// List every stored path
    fn list(&self) -> Vec<String>;
}
