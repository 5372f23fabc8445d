//! JSON file storage.
//!
//! The file holds a single JSON array of expense objects, pretty-printed
//! with two-space indentation. A top-level `null` is read as an empty
//! ledger, which is what older writers produced for a ledger that was
//! never populated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::LedgerStorage;
use crate::error::{Result, TallyError};
use crate::expense::Expense;
use crate::fs::write_atomic;
use crate::ledger::Ledger;

/// Default file name, resolved against the working directory.
pub const DEFAULT_FILE_NAME: &str = "expenses.json";

/// Ledger stored as a JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a ledger exactly as `save` would write it.
    pub fn encode(ledger: &Ledger) -> Result<String> {
        let mut document = serde_json::to_string_pretty(ledger.expenses())
            .map_err(|e| TallyError::PersistenceWrite(e.to_string()))?;
        document.push('\n');
        Ok(document)
    }

    /// Parse a document produced by [`JsonFileStorage::encode`].
    pub fn decode(document: &str) -> Result<Ledger> {
        let expenses: Option<Vec<Expense>> = serde_json::from_str(document)?;
        Ok(Ledger::from_expenses(expenses.unwrap_or_default()))
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl LedgerStorage for JsonFileStorage {
    fn load(&self) -> Result<Ledger> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No ledger at {}; starting empty", self.path.display());
                return Ok(Ledger::new());
            }
            Err(err) => {
                return Err(TallyError::PersistenceRead(format!(
                    "{}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let ledger = Self::decode(&contents).map_err(|err| {
            log::debug!("Ledger at {} is not valid JSON: {}", self.path.display(), err);
            TallyError::PersistenceRead(format!("{}: {}", self.path.display(), err))
        })?;
        log::debug!(
            "Loaded {} expenses from {}",
            ledger.len(),
            self.path.display()
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let document = Self::encode(ledger)?;
        write_atomic(&self.path, document.as_bytes()).map_err(|err| {
            TallyError::PersistenceWrite(format!("{}: {}", self.path.display(), err))
        })?;
        log::debug!("Saved {} expenses to {}", ledger.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_two_space_indent() {
        let mut ledger = Ledger::new();
        ledger.add(Expense::new(12.5, "Food", "", "2024-01-01"));

        let document = JsonFileStorage::encode(&ledger).unwrap();

        let expected = "[\n  {\n    \"amount\": 12.5,\n    \"category\": \"Food\",\n    \"note\": \"\",\n    \"date\": \"2024-01-01\"\n  }\n]\n";
        assert_eq!(document, expected);
    }

    #[test]
    fn test_encode_empty_ledger() {
        assert_eq!(JsonFileStorage::encode(&Ledger::new()).unwrap(), "[]\n");
    }

    #[test]
    fn test_decode_null_is_empty() {
        assert!(JsonFileStorage::decode("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(matches!(
            JsonFileStorage::decode("{\"amount\": 1}"),
            Err(TallyError::PersistenceRead(_))
        ));
        assert!(matches!(
            JsonFileStorage::decode("[{\"amount\": \"ten\"}]"),
            Err(TallyError::PersistenceRead(_))
        ));
    }

    #[test]
    fn test_decode_is_strict_about_keys_and_trailing_text() {
        let ledger = JsonFileStorage::decode("[{\"Amount\": 3.5, \"category\": \"Food\"}]").unwrap();
        assert_eq!(ledger.expenses()[0].amount, 0.0);
        assert_eq!(ledger.expenses()[0].category, "Food");

        assert!(matches!(
            JsonFileStorage::decode("[] trailing"),
            Err(TallyError::PersistenceRead(_))
        ));
        assert!(JsonFileStorage::decode("[]\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            JsonFileStorage::default().path(),
            Path::new(DEFAULT_FILE_NAME)
        );
    }
}
