//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "lend a book" or "run a scenario".

pub mod circulation_service;
pub mod scenario_service;

pub use circulation_service::CirculationService;
pub use scenario_service::{ScenarioRun, ScenarioService};
