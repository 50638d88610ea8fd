//! In-memory scenario source.

use shelf_core::{
    application::{ports::ScenarioSource, scenario::Scenario},
    error::ShelfResult,
};

/// Serves a scenario built in code. Used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioSource {
    name: String,
    scenario: Scenario,
}

impl InMemoryScenarioSource {
    pub fn new(name: impl Into<String>, scenario: Scenario) -> Self {
        Self {
            name: name.into(),
            scenario,
        }
    }
}

impl ScenarioSource for InMemoryScenarioSource {
    fn describe(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn load(&self) -> ShelfResult<Scenario> {
        Ok(self.scenario.clone())
    }
}
