//! Application layer for Shelf.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CirculationService, ScenarioService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Scenario / Report**: DTOs going in and coming out of a run
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! lending rules itself. Those live in `crate::domain`.

pub mod error;
pub mod events;
pub mod ports;
pub mod report;
pub mod scenario;
pub mod services;

pub use services::{CirculationService, ScenarioRun, ScenarioService};

// Re-export port traits (for adapter implementation)
pub use ports::{LoanJournal, ScenarioSource};

pub use error::ApplicationError;
pub use events::LoanEvent;
pub use report::{Admission, EntityKind, InventoryLine, ScenarioReport, StepOutcome};
pub use scenario::{BookSpec, PatronSpec, Scenario, Step};
