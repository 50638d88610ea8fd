// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Shelf.
//!
//! This module contains the lending rules with ZERO I/O. Scenario loading
//! and event journaling are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application layer
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{Book, Identity, Library, Patron};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BookId, GenreProfile, LibraryLimits, PatronId, Score};

pub use validation::DomainValidator;
