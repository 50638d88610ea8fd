//! In-memory loan journal.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelf_core::{
    application::{ApplicationError, LoanEvent, ports::LoanJournal},
    error::ShelfResult,
};

/// A recorded event with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: LoanEvent,
}

/// Thread-safe in-memory journal. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryJournal {
    inner: Arc<RwLock<Vec<JournalEntry>>>,
}

impl MemoryJournal {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry, oldest first.
    pub fn entries(&self) -> ShelfResult<Vec<JournalEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::JournalUnavailable)?;
        Ok(inner.clone())
    }

    /// Entries whose event kind is `kind`.
    pub fn of_kind(&self, kind: &str) -> ShelfResult<Vec<JournalEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|entry| entry.event.kind() == kind)
            .collect())
    }

    /// Get the number of entries.
    pub fn len(&self) -> ShelfResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::JournalUnavailable)?;
        Ok(inner.len())
    }

    /// Check if journal is empty.
    pub fn is_empty(&self) -> ShelfResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all entries.
    pub fn clear(&self) -> ShelfResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::JournalUnavailable)?;
        inner.clear();
        Ok(())
    }
}

impl LoanJournal for MemoryJournal {
    fn record(&self, event: &LoanEvent) -> ShelfResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::JournalUnavailable)?;

        inner.push(JournalEntry {
            at: Utc::now(),
            event: event.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{
        domain::{BookId, PatronId},
        error::ShelfError,
    };

    fn borrowed() -> LoanEvent {
        LoanEvent::Borrowed {
            book: BookId::new(0),
            patron: PatronId::new(1),
        }
    }

    #[test]
    fn records_in_order() {
        let journal = MemoryJournal::new();
        journal.record(&borrowed()).unwrap();
        journal
            .record(&LoanEvent::Returned {
                book: BookId::new(0),
            })
            .unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, borrowed());
        assert!(entries[0].at <= entries[1].at);
    }

    #[test]
    fn clones_share_entries() {
        let journal = MemoryJournal::new();
        let handle = journal.clone();
        handle.record(&borrowed()).unwrap();

        assert_eq!(journal.len().unwrap(), 1);
        assert_eq!(journal.of_kind("borrowed").unwrap().len(), 1);
        assert!(journal.of_kind("returned").unwrap().is_empty());

        journal.clear().unwrap();
        assert!(handle.is_empty().unwrap());
    }

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let journal = MemoryJournal::new();
        let inner = journal.inner.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("poison");
        })
        .join();

        assert!(journal.record(&borrowed()).is_err());
        assert!(journal.entries().is_err());
        assert!(matches!(
            journal.len(),
            Err(ShelfError::Application(ApplicationError::JournalUnavailable))
        ));
        assert!(journal.is_empty().is_err());
    }

    #[test]
    fn entry_serializes_flat() {
        let entry = JournalEntry {
            at: Utc::now(),
            event: borrowed(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"], "borrowed");
        assert_eq!(json["patron"], 1);
        assert!(json["at"].is_string());
    }
}
