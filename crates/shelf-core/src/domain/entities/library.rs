//! The `Library` aggregate root.
//!
//! Owns the catalog and patron registry, hands out slot-index ids, and
//! enforces the lending rules:
//!
//! - a book can be lent only while nobody holds it;
//! - a patron may hold at most `max_borrowed` books at once;
//! - a patron only borrows books they would enjoy.
//!
//! Every borrow is all-or-nothing: a refused request leaves no trace.

use crate::domain::{
    entities::{book::Book, patron::Patron, slots::SlotTable},
    error::DomainError,
    value_objects::{BookId, LibraryLimits, PatronId, Score},
};

/// A fixed-capacity lending library.
///
/// Books are shared handles, so a library has no snapshot copy:
///
/// ```compile_fail
/// use shelf_core::domain::{Library, LibraryLimits};
///
/// let library = Library::new(LibraryLimits::new(1, 1, 1).unwrap());
/// let _snapshot = library.clone();
/// ```
#[derive(Debug)]
pub struct Library {
    limits: LibraryLimits,
    books: SlotTable<Book>,
    patrons: SlotTable<Patron>,
}

impl Library {
    /// An empty library sized by `limits`.
    pub fn new(limits: LibraryLimits) -> Self {
        Self {
            limits,
            books: SlotTable::new(limits.max_books()),
            patrons: SlotTable::new(limits.max_patrons()),
        }
    }

    pub fn limits(&self) -> LibraryLimits {
        self.limits
    }

    // ── Catalog ───────────────────────────────────────────────────────────

    /// Add `book` to the catalog.
    ///
    /// Idempotent: a book already in the catalog keeps its id. New books
    /// take the lowest free slot.
    pub fn add_book(&mut self, book: &Book) -> Result<BookId, DomainError> {
        self.books
            .insert(book)
            .map(BookId::new)
            .ok_or(DomainError::CatalogFull {
                capacity: self.books.capacity(),
            })
    }

    pub fn is_book_id_valid(&self, id: BookId) -> bool {
        self.books.get(id.index()).is_some()
    }

    /// Id of `book`, if it is in the catalog.
    pub fn book_id(&self, book: &Book) -> Option<BookId> {
        self.books.position(book).map(BookId::new)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// Valid and not currently lent out.
    pub fn is_book_available(&self, id: BookId) -> bool {
        self.book(id).is_some_and(|book| !book.is_borrowed())
    }

    /// Catalog entries in id order.
    pub fn books(&self) -> impl Iterator<Item = (BookId, &Book)> {
        self.books.iter().map(|(index, book)| (BookId::new(index), book))
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    // ── Patrons ───────────────────────────────────────────────────────────

    /// Register `patron`, with the same first-fit, idempotent policy as
    /// [`Self::add_book`].
    pub fn register_patron(&mut self, patron: &Patron) -> Result<PatronId, DomainError> {
        self.patrons
            .insert(patron)
            .map(PatronId::new)
            .ok_or(DomainError::PatronRegistryFull {
                capacity: self.patrons.capacity(),
            })
    }

    pub fn is_patron_id_valid(&self, id: PatronId) -> bool {
        self.patrons.get(id.index()).is_some()
    }

    pub fn patron_id(&self, patron: &Patron) -> Option<PatronId> {
        self.patrons.position(patron).map(PatronId::new)
    }

    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id.index())
    }

    pub fn patrons(&self) -> impl Iterator<Item = (PatronId, &Patron)> {
        self.patrons
            .iter()
            .map(|(index, patron)| (PatronId::new(index), patron))
    }

    pub fn patron_count(&self) -> usize {
        self.patrons.len()
    }

    // ── Circulation ───────────────────────────────────────────────────────

    /// Number of catalog books currently held by `patron`.
    pub fn books_borrowed_by(&self, patron: PatronId) -> usize {
        self.books
            .iter()
            .filter(|(_, book)| book.current_borrower() == Some(patron))
            .count()
    }

    fn patron_can_borrow(&self, patron: PatronId) -> bool {
        self.is_patron_id_valid(patron)
            && self.books_borrowed_by(patron) < self.limits.max_borrowed()
    }

    /// Lend book `book_id` to patron `patron_id`.
    ///
    /// Conditions are checked in order and the first one that fails is
    /// reported: both ids valid, book available, patron under the loan cap,
    /// patron enjoys the book. Nothing changes unless all hold.
    pub fn borrow_book(&mut self, book_id: BookId, patron_id: PatronId) -> Result<(), DomainError> {
        let book = self.book(book_id).ok_or(DomainError::UnknownBook(book_id))?;
        let patron = self
            .patron(patron_id)
            .ok_or(DomainError::UnknownPatron(patron_id))?;

        if let Some(borrower) = book.current_borrower() {
            return Err(DomainError::BookUnavailable {
                book: book_id,
                borrower,
            });
        }

        if !self.patron_can_borrow(patron_id) {
            return Err(DomainError::BorrowLimitReached {
                patron: patron_id,
                limit: self.limits.max_borrowed(),
            });
        }

        if !patron.will_enjoy(book) {
            return Err(DomainError::NotEnjoyed {
                patron: patron_id,
                book: book_id,
                score: patron.book_score(book),
                threshold: patron.enjoyment_threshold(),
            });
        }

        book.set_borrower(patron_id);
        Ok(())
    }

    /// Take book `book_id` back.
    ///
    /// An id that names no catalog book is an error and changes nothing.
    /// Returning a book that is not lent out is a no-op.
    pub fn return_book(&mut self, book_id: BookId) -> Result<(), DomainError> {
        let book = self.book(book_id).ok_or(DomainError::UnknownBook(book_id))?;
        book.return_book();
        Ok(())
    }

    /// The available book `patron_id` would enjoy the most.
    ///
    /// Scores must beat a baseline of zero, so a zero-score book is never
    /// suggested even when it is the only one the patron would enjoy. Ties
    /// go to the lowest id. Unknown patrons get no suggestion.
    pub fn suggest_book(&self, patron_id: PatronId) -> Option<&Book> {
        let patron = self.patron(patron_id)?;

        let mut best: Option<&Book> = None;
        let mut best_score: Score = 0;
        for (_, book) in self.books.iter() {
            let score = patron.book_score(book);
            if !book.is_borrowed() && patron.will_enjoy(book) && score > best_score {
                best = Some(book);
                best_score = score;
            }
        }
        best
    }
}
