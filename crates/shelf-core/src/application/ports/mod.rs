//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `shelf-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ScenarioSource`: where scenarios come from
//!   - `LoanJournal`: where circulation events go
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{LoanJournal, ScenarioSource};

#[cfg(test)]
pub use output::{MockLoanJournal, MockScenarioSource};
