//! Results of running a scenario.

use std::fmt;

use serde::Serialize;

use crate::domain::LibraryLimits;

/// Everything a scenario run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub limits: LibraryLimits,
    pub admissions: Vec<Admission>,
    pub steps: Vec<StepOutcome>,
    pub inventory: Vec<InventoryLine>,
}

impl ScenarioReport {
    pub fn rejected(&self) -> impl Iterator<Item = &Admission> {
        self.admissions.iter().filter(|a| a.id.is_none())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Book,
    Patron,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Patron => f.write_str("patron"),
        }
    }
}

/// Whether a declared book or patron got a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admission {
    pub kind: EntityKind,
    pub key: String,
    /// Slot id, absent when the library was full.
    pub id: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

/// What one scenario step did. Books and patrons are named by scenario key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Borrowed {
        book: String,
        patron: String,
    },
    Refused {
        book: String,
        patron: String,
        reason: String,
    },
    Returned {
        book: String,
    },
    ReturnFailed {
        book: String,
        reason: String,
    },
    Suggested {
        patron: String,
        book: Option<String>,
    },
    Availability {
        book: String,
        available: bool,
    },
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed { book, patron } => write!(f, "{patron} borrowed {book}"),
            Self::Refused {
                book,
                patron,
                reason,
            } => write!(f, "{patron} could not borrow {book}: {reason}"),
            Self::Returned { book } => write!(f, "{book} returned"),
            Self::ReturnFailed { book, reason } => write!(f, "{book} not returned: {reason}"),
            Self::Suggested {
                patron,
                book: Some(book),
            } => write!(f, "suggested {book} to {patron}"),
            Self::Suggested { patron, book: None } => write!(f, "nothing to suggest to {patron}"),
            Self::Availability { book, available } => {
                let state = if *available { "available" } else { "unavailable" };
                write!(f, "{book} is {state}")
            }
        }
    }
}

/// Final state of one catalog slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryLine {
    pub id: usize,
    pub key: String,
    pub title: String,
    /// Key of the patron holding the book.
    pub borrower: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_lines_read_naturally() {
        let refused = StepOutcome::Refused {
            book: "dune".into(),
            patron: "ada".into(),
            reason: "limit".into(),
        };
        assert_eq!(refused.to_string(), "ada could not borrow dune: limit");

        let nothing = StepOutcome::Suggested {
            patron: "ada".into(),
            book: None,
        };
        assert_eq!(nothing.to_string(), "nothing to suggest to ada");
    }

    #[test]
    fn outcomes_serialize_with_tag() {
        let json = serde_json::to_value(StepOutcome::Availability {
            book: "dune".into(),
            available: true,
        })
        .unwrap();
        assert_eq!(json["outcome"], "availability");
        assert_eq!(json["available"], true);
    }
}
