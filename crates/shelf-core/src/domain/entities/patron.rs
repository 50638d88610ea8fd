//! The `Patron` entity: who they are and what they like to read.

use std::fmt;

use uuid::Uuid;

use crate::domain::{
    entities::{book::Book, slots::Identity},
    value_objects::{GenreProfile, Score},
};

/// A library patron.
///
/// Immutable after construction. Clones are the same patron; two patrons
/// built from identical data are not.
#[derive(Debug, Clone)]
pub struct Patron {
    handle: Uuid,
    first_name: String,
    last_name: String,
    tendencies: GenreProfile,
    enjoyment_threshold: u32,
}

impl Patron {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        tendencies: GenreProfile,
        enjoyment_threshold: u32,
    ) -> Self {
        Self {
            handle: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            tendencies,
            enjoyment_threshold,
        }
    }

    pub fn handle(&self) -> Uuid {
        self.handle
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn tendencies(&self) -> GenreProfile {
        self.tendencies
    }

    /// Minimal score at which this patron enjoys a book.
    pub fn enjoyment_threshold(&self) -> u32 {
        self.enjoyment_threshold
    }

    /// The literary value this patron assigns to `book`.
    pub fn book_score(&self, book: &Book) -> Score {
        self.tendencies.dot(&book.genres())
    }

    /// Whether the book reaches this patron's threshold. The threshold
    /// itself counts as enjoyment.
    pub fn will_enjoy(&self, book: &Book) -> bool {
        self.book_score(book) >= Score::from(self.enjoyment_threshold)
    }
}

impl Identity for Patron {
    fn is_same(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl PartialEq for Patron {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Patron {}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(comic: u32, dramatic: u32, educational: u32) -> Book {
        Book::new("t", "a", 2000, GenreProfile::new(comic, dramatic, educational))
    }

    #[test]
    fn score_is_weighted_sum() {
        let patron = Patron::new("Ada", "Lovelace", GenreProfile::new(1, 2, 3), 0);
        assert_eq!(patron.book_score(&book(4, 5, 6)), 4 + 10 + 18);
    }

    #[test]
    fn threshold_is_inclusive() {
        let patron = Patron::new("Ada", "Lovelace", GenreProfile::new(2, 0, 0), 10);
        assert!(patron.will_enjoy(&book(5, 0, 0)));
        assert!(!patron.will_enjoy(&book(4, 9, 9)));
        assert!(patron.will_enjoy(&book(6, 0, 0)));
    }

    #[test]
    fn zero_threshold_enjoys_everything() {
        let patron = Patron::new("Ada", "Lovelace", GenreProfile::default(), 0);
        assert!(patron.will_enjoy(&book(0, 0, 0)));
    }

    #[test]
    fn display_is_first_space_last() {
        let patron = Patron::new(" Ada", "Lovelace ", GenreProfile::default(), 0);
        assert_eq!(patron.to_string(), " Ada Lovelace ");
    }

    #[test]
    fn identity_follows_handle() {
        let a = Patron::new("Ada", "Lovelace", GenreProfile::default(), 0);
        let b = Patron::new("Ada", "Lovelace", GenreProfile::default(), 0);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
