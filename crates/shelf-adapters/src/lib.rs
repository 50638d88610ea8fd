//! Infrastructure adapters for Shelf.
//!
//! This crate implements the ports defined in `shelf-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod journal;
pub mod scenario_source;

// Re-export commonly used adapters
pub use journal::{JournalEntry, MemoryJournal, TracingJournal};
pub use scenario_source::{InMemoryScenarioSource, TomlScenarioSource};
