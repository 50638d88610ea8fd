// ============================================================================
// domain/error.rs - CIRCULATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{BookId, PatronId, Score};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid library limits: {field} must be greater than zero")]
    InvalidLimits { field: &'static str },

    // ========================================================================
    // Capacity Errors
    // ========================================================================
    #[error("Catalog is full ({capacity} books)")]
    CatalogFull { capacity: usize },

    #[error("Patron registry is full ({capacity} patrons)")]
    PatronRegistryFull { capacity: usize },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No book with id {0} in the catalog")]
    UnknownBook(BookId),

    #[error("No patron with id {0} is registered")]
    UnknownPatron(PatronId),

    // ========================================================================
    // Borrowing Refusals
    // ========================================================================
    #[error("Book {book} is already borrowed by patron {borrower}")]
    BookUnavailable { book: BookId, borrower: PatronId },

    #[error("Patron {patron} already holds {limit} books, the most allowed")]
    BorrowLimitReached { patron: PatronId, limit: usize },

    #[error("Patron {patron} would not enjoy book {book} (score {score} < threshold {threshold})")]
    NotEnjoyed {
        patron: PatronId,
        book: BookId,
        score: Score,
        threshold: u32,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLimits { field } => vec![
                format!("Set '{}' to a positive number", field),
                "Limits come from the scenario's [library] table or the config file".into(),
            ],
            Self::CatalogFull { capacity } => vec![
                format!("The catalog holds at most {} books", capacity),
                "Raise max_books to add more".into(),
            ],
            Self::PatronRegistryFull { capacity } => vec![
                format!("At most {} patrons can register", capacity),
                "Raise max_patrons to register more".into(),
            ],
            Self::UnknownBook(_) | Self::UnknownPatron(_) => vec![
                "Ids are slot indices handed out when adding or registering".into(),
                "Check that the entity was admitted before using its id".into(),
            ],
            Self::BookUnavailable { .. } => vec![
                "Return the book before lending it again".into(),
            ],
            Self::BorrowLimitReached { limit, .. } => vec![
                format!("Return one of the {} borrowed books first", limit),
            ],
            Self::NotEnjoyed { .. } => vec![
                "Ask the library for a suggestion instead".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLimits { .. } => ErrorCategory::Validation,
            Self::CatalogFull { .. } | Self::PatronRegistryFull { .. } => ErrorCategory::Capacity,
            Self::UnknownBook(_) | Self::UnknownPatron(_) => ErrorCategory::NotFound,
            Self::BookUnavailable { .. }
            | Self::BorrowLimitReached { .. }
            | Self::NotEnjoyed { .. } => ErrorCategory::Refused,
        }
    }

    /// `true` for the outcomes of a borrow request that was well-formed but
    /// turned down by the lending rules.
    pub fn is_refusal(&self) -> bool {
        self.category() == ErrorCategory::Refused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Capacity,
    NotFound,
    Refused,
}
