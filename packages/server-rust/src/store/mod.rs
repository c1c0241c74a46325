//! Store implementations backing the controller API.

pub mod memory;

pub use memory::MemoryStore;
