//! toolish - A command-line workout tracker
//!
//! This library provides the core functionality for tracking personal records,
//! the latest session of every exercise and the dates on which each workout
//! day was completed.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod intake;
pub mod output;
pub mod paths;
pub mod store;
