//! TOML file scenario source.
//!
//! # File format
//!
//! ```toml
//! [library]                # optional; configured defaults apply otherwise
//! max_books    = 3
//! max_borrowed = 1
//! max_patrons  = 2
//!
//! [[books]]
//! key    = "dune"          # unique among books
//! title  = "Dune"
//! author = "Herbert"
//! year   = 1965
//! dramatic    = 4          # genre values default to 0
//! educational = 1
//!
//! [[patrons]]
//! key        = "ada"
//! first_name = "Ada"
//! last_name  = "Lovelace"
//! dramatic   = 3
//! threshold  = 10
//!
//! [[steps]]
//! action = "borrow"        # borrow | return | suggest | available
//! book   = "dune"
//! patron = "ada"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use shelf_core::{
    application::{ApplicationError, ports::ScenarioSource, scenario::Scenario},
    error::ShelfResult,
};

/// Reads a scenario from a TOML file on every [`load`](ScenarioSource::load).
#[derive(Debug, Clone)]
pub struct TomlScenarioSource {
    path: PathBuf,
}

impl TomlScenarioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse scenario text. `origin` only names the text in errors.
    pub fn parse(origin: &str, text: &str) -> ShelfResult<Scenario> {
        toml::from_str(text).map_err(|e| {
            ApplicationError::ScenarioLoad {
                source_name: origin.to_string(),
                reason: e.message().to_string(),
            }
            .into()
        })
    }

    fn load_error(&self, reason: impl ToString) -> ApplicationError {
        ApplicationError::ScenarioLoad {
            source_name: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ScenarioSource for TomlScenarioSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ShelfResult<Scenario> {
        if !self.path.is_file() {
            return Err(self.load_error("file not found").into());
        }

        let text = fs::read_to_string(&self.path).map_err(|e| self.load_error(e))?;
        let scenario = Self::parse(&self.describe(), &text)?;

        debug!(
            books = scenario.books.len(),
            patrons = scenario.patrons.len(),
            steps = scenario.steps.len(),
            "Scenario parsed"
        );
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{application::scenario::Step, error::ShelfError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"
[library]
max_books = 2
max_borrowed = 1
max_patrons = 1

[[books]]
key = "tintin"
title = "Tintin in Tibet"
author = "Herge"
year = 1960
comic = 5

[[patrons]]
key = "ada"
first_name = "Ada"
last_name = "Lovelace"
comic = 2
threshold = 10

[[steps]]
action = "borrow"
book = "tintin"
patron = "ada"

[[steps]]
action = "available"
book = "tintin"
"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_complete_scenario() {
        let file = write_temp(SCENARIO);
        let scenario = TomlScenarioSource::new(file.path()).load().unwrap();

        assert_eq!(scenario.library.unwrap().max_books(), 2);
        assert_eq!(scenario.books[0].comic, 5);
        assert_eq!(scenario.books[0].dramatic, 0);
        assert_eq!(scenario.patrons[0].threshold, 10);
        assert_eq!(
            scenario.steps[1],
            Step::Available {
                book: "tintin".into()
            }
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let source = TomlScenarioSource::new("/absolutely/does/not/exist.toml");
        assert!(matches!(
            source.load(),
            Err(ShelfError::Application(ApplicationError::ScenarioLoad { .. }))
        ));
    }

    #[test]
    fn zero_limits_are_rejected_at_parse_time() {
        let err = TomlScenarioSource::parse(
            "inline",
            "[library]\nmax_books = 0\nmax_borrowed = 1\nmax_patrons = 1\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_books"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = TomlScenarioSource::parse(
            "inline",
            "[[books]]\nkey = \"a\"\ntitle = \"A\"\nauthor = \"B\"\ncolour = \"red\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result =
            TomlScenarioSource::parse("inline", "[[steps]]\naction = \"burn\"\nbook = \"a\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn describe_names_the_path() {
        let source = TomlScenarioSource::new("library/day1.toml");
        assert_eq!(source.describe(), "library/day1.toml");
        assert_eq!(source.path(), Path::new("library/day1.toml"));
    }
}
