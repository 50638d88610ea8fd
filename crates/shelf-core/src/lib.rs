//! Shelf Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Shelf, a small
//! lending library with a fixed-capacity catalog and taste-based borrowing.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            shelf-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (CirculationService, ScenarioService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: ScenarioSource, LoanJournal) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     shelf-adapters (Infrastructure)     │
//! │ (TomlScenarioSource, MemoryJournal, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │        (Library, Book, Patron)          │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shelf_core::domain::{Book, GenreProfile, Library, LibraryLimits, Patron};
//!
//! let mut library = Library::new(LibraryLimits::new(2, 1, 1).unwrap());
//!
//! let book = Book::new("Asterix", "Goscinny", 1961, GenreProfile::new(5, 0, 0));
//! let patron = Patron::new("Ada", "Lovelace", GenreProfile::new(2, 0, 0), 10);
//!
//! let book_id = library.add_book(&book).unwrap();
//! let patron_id = library.register_patron(&patron).unwrap();
//!
//! assert!(library.borrow_book(book_id, patron_id).is_ok());
//! assert!(!library.is_book_available(book_id));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CirculationService, ScenarioRun, ScenarioService,
        ports::{LoanJournal, ScenarioSource},
    };
    pub use crate::domain::{
        Book, BookId, GenreProfile, Library, LibraryLimits, Patron, PatronId, Score,
    };
    pub use crate::error::{ShelfError, ShelfResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
