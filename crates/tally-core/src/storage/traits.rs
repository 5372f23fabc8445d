//! Storage trait definition.
//!
//! The `LedgerStorage` trait moves a whole [`Ledger`] between memory and a
//! backing store. There is no incremental persistence: `save` always writes
//! the entire sequence and `load` always reads it back in full.

use crate::error::Result;
use crate::ledger::Ledger;

/// Whole-ledger persistence.
///
/// Implementations must ensure:
/// - A backing store that does not exist yet loads as an empty ledger
/// - Records load in the order they were saved
/// - A failed save leaves the in-memory ledger untouched
pub trait LedgerStorage {
    /// Read the ledger from the backing store.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::PersistenceRead` if:
    /// - The store exists but cannot be read
    /// - Its contents are not a valid ledger document
    fn load(&self) -> Result<Ledger>;

    /// Write the full ledger, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::PersistenceWrite` if the store cannot be
    /// created or written.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::expense::Expense;
    use std::cell::RefCell;

    /// In-memory store used to check the trait contract without touching disk.
    #[derive(Default)]
    struct MemoryStorage {
        saved: RefCell<Option<Vec<Expense>>>,
        fail_writes: bool,
    }

    impl LedgerStorage for MemoryStorage {
        fn load(&self) -> Result<Ledger> {
            Ok(self
                .saved
                .borrow()
                .clone()
                .map(Ledger::from_expenses)
                .unwrap_or_default())
        }

        fn save(&self, ledger: &Ledger) -> Result<()> {
            if self.fail_writes {
                return Err(TallyError::PersistenceWrite("read-only".into()));
            }
            *self.saved.borrow_mut() = Some(ledger.expenses().to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_trait_object_round_trip() {
        let storage: Box<dyn LedgerStorage> = Box::new(MemoryStorage::default());
        assert!(storage.load().unwrap().is_empty());

        let mut ledger = Ledger::new();
        ledger.add(Expense::new(1.0, "Food", "", "2024-01-01"));
        storage.save(&ledger).unwrap();

        assert_eq!(storage.load().unwrap(), ledger);
    }

    #[test]
    fn test_failed_save_keeps_ledger() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(1.0, "Food", "", "2024-01-01"));

        assert!(storage.save(&ledger).is_err());
        assert_eq!(ledger.len(), 1);
    }
}
