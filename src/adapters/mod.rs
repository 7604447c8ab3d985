//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - one JSON file per storage key in a data directory
//! - `memory/` - in-process map, for tests and scratch stores

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
