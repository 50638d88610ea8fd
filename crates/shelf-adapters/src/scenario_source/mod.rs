//! [`ScenarioSource`](shelf_core::application::ports::ScenarioSource) adapters.

pub mod memory;
pub mod toml_file;

pub use memory::InMemoryScenarioSource;
pub use toml_file::TomlScenarioSource;
