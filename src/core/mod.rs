//! Core domain logic for toolish
//!
//! This module contains pure business logic with no I/O dependencies.
//! Persistence is abstracted through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ExerciseKey`, `SetEntry`, `PersonalRecord`, `CompletionLog`)
//! - `services/` - Pure computations over those types (best values, day completion, dates)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
