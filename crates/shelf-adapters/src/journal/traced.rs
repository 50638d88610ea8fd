//! Journal that forwards events to `tracing`.

use tracing::info;

use shelf_core::{
    application::{LoanEvent, ports::LoanJournal},
    error::ShelfResult,
};

/// Emits each event as a structured `info` record under the `shelf::journal`
/// target. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingJournal;

impl TracingJournal {
    pub fn new() -> Self {
        Self
    }
}

impl LoanJournal for TracingJournal {
    fn record(&self, event: &LoanEvent) -> ShelfResult<()> {
        match event {
            LoanEvent::BookAdded { book, title } => {
                info!(target: "shelf::journal", kind = event.kind(), %book, %title, "Book added");
            }
            LoanEvent::BookRejected { title, reason } => {
                info!(target: "shelf::journal", kind = event.kind(), %title, %reason, "Book rejected");
            }
            LoanEvent::PatronRegistered { patron, name } => {
                info!(target: "shelf::journal", kind = event.kind(), %patron, %name, "Patron registered");
            }
            LoanEvent::PatronRejected { name, reason } => {
                info!(target: "shelf::journal", kind = event.kind(), %name, %reason, "Patron rejected");
            }
            LoanEvent::Borrowed { book, patron } => {
                info!(target: "shelf::journal", kind = event.kind(), %book, %patron, "Borrowed");
            }
            LoanEvent::BorrowRefused {
                book,
                patron,
                reason,
            } => {
                info!(target: "shelf::journal", kind = event.kind(), %book, %patron, %reason, "Borrow refused");
            }
            LoanEvent::Returned { book } => {
                info!(target: "shelf::journal", kind = event.kind(), %book, "Returned");
            }
            LoanEvent::ReturnRejected { book, reason } => {
                info!(target: "shelf::journal", kind = event.kind(), %book, %reason, "Return rejected");
            }
            LoanEvent::Suggested { patron, book } => {
                info!(target: "shelf::journal", kind = event.kind(), %patron, book = ?book, "Suggested");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::domain::{BookId, PatronId};

    #[test]
    fn never_fails_without_subscriber() {
        let journal = TracingJournal::new();
        let events = [
            LoanEvent::Borrowed {
                book: BookId::new(0),
                patron: PatronId::new(0),
            },
            LoanEvent::Suggested {
                patron: PatronId::new(0),
                book: None,
            },
        ];
        for event in &events {
            assert!(journal.record(event).is_ok());
        }
    }
}
