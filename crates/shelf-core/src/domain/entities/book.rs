//! The `Book` entity.
//!
//! A `Book` is a cheap, cloneable handle. Every clone refers to the same
//! physical book and sees the same borrower state; books constructed
//! separately are distinct even when all their fields match.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::domain::{
    entities::slots::Identity,
    value_objects::{GenreProfile, PatronId},
};

#[derive(Debug)]
struct BookRecord {
    handle: Uuid,
    title: String,
    author: String,
    year_published: i32,
    genres: GenreProfile,
    borrower: Cell<Option<PatronId>>,
}

/// A book in (or headed for) the catalog.
#[derive(Debug, Clone)]
pub struct Book {
    record: Rc<BookRecord>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
        genres: GenreProfile,
    ) -> Self {
        Self {
            record: Rc::new(BookRecord {
                handle: Uuid::new_v4(),
                title: title.into(),
                author: author.into(),
                year_published,
                genres,
                borrower: Cell::new(None),
            }),
        }
    }

    /// Unique handle of this book; shared by all clones.
    pub fn handle(&self) -> Uuid {
        self.record.handle
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn author(&self) -> &str {
        &self.record.author
    }

    pub fn year_published(&self) -> i32 {
        self.record.year_published
    }

    pub fn genres(&self) -> GenreProfile {
        self.record.genres
    }

    pub fn comic_value(&self) -> u32 {
        self.record.genres.comic
    }

    pub fn dramatic_value(&self) -> u32 {
        self.record.genres.dramatic
    }

    pub fn educational_value(&self) -> u32 {
        self.record.genres.educational
    }

    /// Patron currently holding this book, if any.
    pub fn current_borrower(&self) -> Option<PatronId> {
        self.record.borrower.get()
    }

    pub fn is_borrowed(&self) -> bool {
        self.current_borrower().is_some()
    }

    /// Mark the book as held by `patron`.
    ///
    /// Lending rules are enforced by the library; this only records state.
    pub fn set_borrower(&self, patron: PatronId) {
        self.record.borrower.set(Some(patron));
    }

    /// Clear the borrower. Returning an unborrowed book changes nothing.
    pub fn return_book(&self) {
        self.record.borrower.set(None);
    }
}

impl Identity for Book {
    fn is_same(&self, other: &Self) -> bool {
        self.record.handle == other.record.handle
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Book {}

/// `[title,author,year,comic,dramatic,educational]`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genres = self.record.genres;
        write!(
            f,
            "[{},{},{},{},{},{}]",
            self.record.title,
            self.record.author,
            self.record.year_published,
            genres.comic,
            genres.dramatic,
            genres.educational
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new("Dune", "Frank Herbert", 1965, GenreProfile::new(0, 7, 3))
    }

    #[test]
    fn new_book_is_unborrowed() {
        let book = sample();
        assert_eq!(book.current_borrower(), None);
        assert!(!book.is_borrowed());
    }

    #[test]
    fn clones_share_borrower_state() {
        let book = sample();
        let alias = book.clone();

        book.set_borrower(PatronId::new(4));
        assert_eq!(alias.current_borrower(), Some(PatronId::new(4)));

        alias.return_book();
        assert!(!book.is_borrowed());
    }

    #[test]
    fn equal_fields_do_not_make_equal_books() {
        let a = sample();
        let b = sample();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn display_lists_fields_in_brackets() {
        assert_eq!(sample().to_string(), "[Dune,Frank Herbert,1965,0,7,3]");
    }
}
