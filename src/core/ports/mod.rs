//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the tracking logic and the
//! persistence layer. Implementations live in the `adapters` module.

mod key_value_store;

pub use key_value_store::KeyValueStore;
