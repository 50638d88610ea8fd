//! [`LoanJournal`](shelf_core::application::ports::LoanJournal) adapters.

pub mod memory;
pub mod traced;

pub use memory::{JournalEntry, MemoryJournal};
pub use traced::TracingJournal;
