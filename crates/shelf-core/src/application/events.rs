//! Circulation events handed to the [`LoanJournal`](super::ports::LoanJournal).

use serde::Serialize;

use crate::domain::{BookId, PatronId};

/// Something that happened at the circulation desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LoanEvent {
    BookAdded { book: BookId, title: String },
    BookRejected { title: String, reason: String },
    PatronRegistered { patron: PatronId, name: String },
    PatronRejected { name: String, reason: String },
    Borrowed { book: BookId, patron: PatronId },
    BorrowRefused {
        book: BookId,
        patron: PatronId,
        reason: String,
    },
    Returned { book: BookId },
    ReturnRejected { book: BookId, reason: String },
    Suggested {
        patron: PatronId,
        book: Option<BookId>,
    },
}

impl LoanEvent {
    /// Short snake_case name of the event kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BookAdded { .. } => "book_added",
            Self::BookRejected { .. } => "book_rejected",
            Self::PatronRegistered { .. } => "patron_registered",
            Self::PatronRejected { .. } => "patron_rejected",
            Self::Borrowed { .. } => "borrowed",
            Self::BorrowRefused { .. } => "borrow_refused",
            Self::Returned { .. } => "returned",
            Self::ReturnRejected { .. } => "return_rejected",
            Self::Suggested { .. } => "suggested",
        }
    }
}
