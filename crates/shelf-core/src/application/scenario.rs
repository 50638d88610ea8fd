//! Scenario DTOs: a declarative description of a library session.
//!
//! A scenario lists the books and patrons to admit (in order) and the
//! circulation steps to run against them. Entities are referred to by a
//! free-form `key` rather than by id, since ids are only known once the
//! library has admitted them.
//!
//! ```toml
//! [library]
//! max_books = 2
//! max_borrowed = 1
//! max_patrons = 1
//!
//! [[books]]
//! key = "tintin"
//! title = "Tintin in Tibet"
//! author = "Herge"
//! year = 1960
//! comic = 5
//!
//! [[patrons]]
//! key = "ada"
//! first_name = "Ada"
//! last_name = "Lovelace"
//! comic = 2
//! threshold = 10
//!
//! [[steps]]
//! action = "borrow"
//! book = "tintin"
//! patron = "ada"
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{Book, GenreProfile, LibraryLimits, Patron};

/// A complete scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Capacities; falls back to the caller's defaults when absent.
    #[serde(default)]
    pub library: Option<LibraryLimits>,
    #[serde(default)]
    pub books: Vec<BookSpec>,
    #[serde(default)]
    pub patrons: Vec<PatronSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookSpec {
    pub key: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub comic: u32,
    #[serde(default)]
    pub dramatic: u32,
    #[serde(default)]
    pub educational: u32,
}

impl BookSpec {
    pub fn to_book(&self) -> Book {
        Book::new(
            self.title.clone(),
            self.author.clone(),
            self.year,
            GenreProfile::new(self.comic, self.dramatic, self.educational),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatronSpec {
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub comic: u32,
    #[serde(default)]
    pub dramatic: u32,
    #[serde(default)]
    pub educational: u32,
    #[serde(default)]
    pub threshold: u32,
}

impl PatronSpec {
    pub fn to_patron(&self) -> Patron {
        Patron::new(
            self.first_name.clone(),
            self.last_name.clone(),
            GenreProfile::new(self.comic, self.dramatic, self.educational),
            self.threshold,
        )
    }
}

/// One circulation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Borrow { book: String, patron: String },
    Return { book: String },
    Suggest { patron: String },
    Available { book: String },
}

impl Scenario {
    /// Limits declared by the scenario, or `fallback`.
    pub fn limits_or(&self, fallback: LibraryLimits) -> LibraryLimits {
        self.library.unwrap_or(fallback)
    }

    /// Check keys are unique per kind and every step names a declared key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let books = unique_keys("book", self.books.iter().map(|b| b.key.as_str()))?;
        let patrons = unique_keys("patron", self.patrons.iter().map(|p| p.key.as_str()))?;

        for step in &self.steps {
            match step {
                Step::Borrow { book, patron } => {
                    require("book", &books, book)?;
                    require("patron", &patrons, patron)?;
                }
                Step::Return { book } | Step::Available { book } => require("book", &books, book)?,
                Step::Suggest { patron } => require("patron", &patrons, patron)?,
            }
        }

        Ok(())
    }
}

fn require(kind: &'static str, known: &HashSet<&str>, key: &str) -> Result<(), ApplicationError> {
    if known.contains(key) {
        Ok(())
    } else {
        Err(ApplicationError::UnknownKey {
            kind,
            key: key.to_string(),
        })
    }
}

fn unique_keys<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, ApplicationError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ApplicationError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(key: &str) -> BookSpec {
        BookSpec {
            key: key.into(),
            title: "T".into(),
            author: "A".into(),
            year: 2000,
            comic: 1,
            dramatic: 0,
            educational: 0,
        }
    }

    fn patron(key: &str) -> PatronSpec {
        PatronSpec {
            key: key.into(),
            first_name: "F".into(),
            last_name: "L".into(),
            comic: 1,
            dramatic: 0,
            educational: 0,
            threshold: 0,
        }
    }

    #[test]
    fn valid_scenario_passes() {
        let scenario = Scenario {
            books: vec![book("a")],
            patrons: vec![patron("p")],
            steps: vec![
                Step::Borrow {
                    book: "a".into(),
                    patron: "p".into(),
                },
                Step::Suggest { patron: "p".into() },
            ],
            ..Scenario::default()
        };
        assert_eq!(scenario.validate(), Ok(()));
    }

    #[test]
    fn duplicate_book_key_is_rejected() {
        let scenario = Scenario {
            books: vec![book("a"), book("a")],
            ..Scenario::default()
        };
        assert_eq!(
            scenario.validate(),
            Err(ApplicationError::DuplicateKey {
                kind: "book",
                key: "a".into()
            })
        );
    }

    #[test]
    fn step_with_undeclared_patron_is_rejected() {
        let scenario = Scenario {
            books: vec![book("a")],
            steps: vec![Step::Borrow {
                book: "a".into(),
                patron: "ghost".into(),
            }],
            ..Scenario::default()
        };
        assert!(matches!(
            scenario.validate(),
            Err(ApplicationError::UnknownKey { kind: "patron", .. })
        ));
    }

    #[test]
    fn specs_build_entities() {
        let b = book("a").to_book();
        assert_eq!(b.comic_value(), 1);
        let p = patron("p").to_patron();
        assert_eq!(p.to_string(), "F L");
        assert!(p.will_enjoy(&b));
    }

    #[test]
    fn steps_deserialize_by_action_tag() {
        let step: Step =
            serde_json::from_str(r#"{"action":"return","book":"a"}"#).unwrap();
        assert_eq!(step, Step::Return { book: "a".into() });
    }
}
