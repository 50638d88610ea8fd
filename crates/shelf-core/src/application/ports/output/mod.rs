//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shelf-adapters` crate provides implementations.

use crate::application::{events::LoanEvent, scenario::Scenario};
use crate::error::ShelfResult;

/// Port for scenario retrieval.
///
/// Implemented by:
/// - `shelf_adapters::scenario_source::TomlScenarioSource` (files)
/// - `shelf_adapters::scenario_source::InMemoryScenarioSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ScenarioSource: Send + Sync {
    /// Human-readable origin of the scenario, used in logs and errors.
    fn describe(&self) -> String;

    /// Read and parse the scenario.
    fn load(&self) -> ShelfResult<Scenario>;
}

/// Port for recording circulation events.
///
/// Implemented by:
/// - `shelf_adapters::journal::MemoryJournal` (inspection, testing)
/// - `shelf_adapters::journal::TracingJournal` (structured log events)
#[cfg_attr(test, mockall::automock)]
pub trait LoanJournal: Send + Sync {
    fn record(&self, event: &LoanEvent) -> ShelfResult<()>;
}
