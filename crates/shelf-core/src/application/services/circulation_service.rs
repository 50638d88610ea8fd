//! Circulation Service - the library front desk.
//!
//! Wraps a [`Library`] so that every operation is traced and reported to a
//! [`LoanJournal`]. Lending rules stay in the domain; this layer only
//! observes and forwards.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{events::LoanEvent, ports::LoanJournal},
    domain::{Book, BookId, Library, LibraryLimits, Patron, PatronId},
    error::{ShelfError, ShelfResult},
};

/// Library operations with journaling and tracing.
pub struct CirculationService {
    library: Library,
    journal: Box<dyn LoanJournal>,
}

impl CirculationService {
    /// Open an empty library with the given limits.
    pub fn new(limits: LibraryLimits, journal: Box<dyn LoanJournal>) -> Self {
        Self {
            library: Library::new(limits),
            journal,
        }
    }

    /// Read-only view of the underlying library.
    pub fn library(&self) -> &Library {
        &self.library
    }

    #[instrument(skip_all, fields(title = %book.title()))]
    pub fn add_book(&mut self, book: &Book) -> ShelfResult<BookId> {
        match self.library.add_book(book) {
            Ok(id) => {
                debug!(book_id = %id, "Book catalogued");
                self.journal.record(&LoanEvent::BookAdded {
                    book: id,
                    title: book.title().to_string(),
                })?;
                Ok(id)
            }
            Err(e) => {
                info!(reason = %e, "Book rejected");
                self.journal.record(&LoanEvent::BookRejected {
                    title: book.title().to_string(),
                    reason: e.to_string(),
                })?;
                Err(e.into())
            }
        }
    }

    #[instrument(skip_all, fields(patron = %patron))]
    pub fn register_patron(&mut self, patron: &Patron) -> ShelfResult<PatronId> {
        match self.library.register_patron(patron) {
            Ok(id) => {
                debug!(patron_id = %id, "Patron registered");
                self.journal.record(&LoanEvent::PatronRegistered {
                    patron: id,
                    name: patron.to_string(),
                })?;
                Ok(id)
            }
            Err(e) => {
                info!(reason = %e, "Patron rejected");
                self.journal.record(&LoanEvent::PatronRejected {
                    name: patron.to_string(),
                    reason: e.to_string(),
                })?;
                Err(e.into())
            }
        }
    }

    /// Lend a book. Refusals come back as [`ShelfError::Domain`].
    ///
    /// A loan the journal cannot record is undone before the error is returned.
    #[instrument(skip_all, fields(book = %book, patron = %patron))]
    pub fn borrow(&mut self, book: BookId, patron: PatronId) -> ShelfResult<()> {
        match self.library.borrow_book(book, patron) {
            Ok(()) => {
                info!("Book lent");
                if let Err(e) = self.journal.record(&LoanEvent::Borrowed { book, patron }) {
                    warn!(error = %e, "Loan not journaled, taking the book back");
                    self.library.return_book(book)?;
                    return Err(e);
                }
                Ok(())
            }
            Err(e) => {
                info!(reason = %e, "Borrow refused");
                self.journal.record(&LoanEvent::BorrowRefused {
                    book,
                    patron,
                    reason: e.to_string(),
                })?;
                Err(ShelfError::Domain(e))
            }
        }
    }

    /// Take a book back. A failed journal write leaves it with its borrower.
    #[instrument(skip_all, fields(book = %book))]
    pub fn return_book(&mut self, book: BookId) -> ShelfResult<()> {
        let holder = self.library.book(book).and_then(Book::current_borrower);
        match self.library.return_book(book) {
            Ok(()) => {
                info!("Book returned");
                if let Err(e) = self.journal.record(&LoanEvent::Returned { book }) {
                    warn!(error = %e, "Return not journaled, loan restored");
                    if let (Some(record), Some(patron)) = (self.library.book(book), holder) {
                        record.set_borrower(patron);
                    }
                    return Err(e);
                }
                Ok(())
            }
            Err(e) => {
                info!(reason = %e, "Return rejected");
                self.journal.record(&LoanEvent::ReturnRejected {
                    book,
                    reason: e.to_string(),
                })?;
                Err(ShelfError::Domain(e))
            }
        }
    }

    /// Best available book for `patron`, if any.
    #[instrument(skip_all, fields(patron = %patron))]
    pub fn suggest(&self, patron: PatronId) -> ShelfResult<Option<Book>> {
        let suggestion = self.library.suggest_book(patron).cloned();
        let book = suggestion.as_ref().and_then(|b| self.library.book_id(b));
        debug!(found = book.is_some(), "Suggestion computed");

        self.journal
            .record(&LoanEvent::Suggested { patron, book })?;
        Ok(suggestion)
    }

    pub fn is_available(&self, book: BookId) -> bool {
        self.library.is_book_available(book)
    }
}
