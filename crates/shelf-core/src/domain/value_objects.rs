//! Domain value objects: ids, genre profiles, scores, and library limits.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Entities with identity (books, patrons) live in `entities/`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::validation::DomainValidator;
use crate::domain::error::DomainError;

/// A patron's personal score for a book.
///
/// Wide enough that the weighted sum of three `u32` products saturates
/// instead of wrapping.
pub type Score = u64;

// ── Ids ───────────────────────────────────────────────────────────────────────

/// Catalog slot index of a book.
///
/// Handed out by [`Library::add_book`](crate::domain::Library::add_book) and
/// stable for as long as the library exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(usize);

impl BookId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for BookId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry slot index of a patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatronId(usize);

impl PatronId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for PatronId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── GenreProfile ──────────────────────────────────────────────────────────────

/// One non-negative weight per genre.
///
/// Used both as a book's genre values and as a patron's tendencies; a
/// patron's score for a book is the dot product of the two profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenreProfile {
    pub comic: u32,
    pub dramatic: u32,
    pub educational: u32,
}

impl GenreProfile {
    pub const fn new(comic: u32, dramatic: u32, educational: u32) -> Self {
        Self {
            comic,
            dramatic,
            educational,
        }
    }

    /// Weighted sum of this profile against another.
    pub fn dot(&self, other: &Self) -> Score {
        let term = |a: u32, b: u32| Score::from(a) * Score::from(b);
        term(self.comic, other.comic)
            .saturating_add(term(self.dramatic, other.dramatic))
            .saturating_add(term(self.educational, other.educational))
    }
}

impl fmt::Display for GenreProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comic {}, dramatic {}, educational {}",
            self.comic, self.dramatic, self.educational
        )
    }
}

// ── LibraryLimits ─────────────────────────────────────────────────────────────

/// Construction-time capacities of a library.
///
/// Invariant: every field is greater than zero. Enforced by [`Self::new`]
/// and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct LibraryLimits {
    max_books: usize,
    max_borrowed: usize,
    max_patrons: usize,
}

impl LibraryLimits {
    /// Validate and build a set of limits.
    pub fn new(
        max_books: usize,
        max_borrowed: usize,
        max_patrons: usize,
    ) -> Result<Self, DomainError> {
        let limits = Self {
            max_books,
            max_borrowed,
            max_patrons,
        };
        DomainValidator::validate_limits(&limits)?;
        Ok(limits)
    }

    /// Number of catalog slots.
    pub const fn max_books(&self) -> usize {
        self.max_books
    }

    /// How many books one patron may hold at the same time.
    pub const fn max_borrowed(&self) -> usize {
        self.max_borrowed
    }

    /// Number of patron slots.
    pub const fn max_patrons(&self) -> usize {
        self.max_patrons
    }
}

impl fmt::Display for LibraryLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} books, {} patrons, {} loans per patron",
            self.max_books, self.max_patrons, self.max_borrowed
        )
    }
}

/// Unvalidated wire shape of [`LibraryLimits`].
#[derive(Deserialize)]
struct RawLimits {
    max_books: usize,
    max_borrowed: usize,
    max_patrons: usize,
}

impl TryFrom<RawLimits> for LibraryLimits {
    type Error = DomainError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Self::new(raw.max_books, raw.max_borrowed, raw.max_patrons)
    }
}
