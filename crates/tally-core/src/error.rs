//! Error types for Tally core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// User text that should have been a number was not
    #[error("Parse error: {0}")]
    Parse(String),

    /// Display index outside `1..=len`
    #[error("Index {index} is out of range (ledger has {len} expenses)")]
    OutOfRange { index: i64, len: usize },

    /// A query matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The ledger file exists but could not be read or decoded
    #[error("Failed to read ledger: {0}")]
    PersistenceRead(String),

    /// The ledger file could not be created or written
    #[error("Failed to write ledger: {0}")]
    PersistenceWrite(String),
}

impl TallyError {
    /// True for errors caused by bad user input (parse or range).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::OutOfRange { .. })
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        TallyError::PersistenceRead(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = TallyError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 is out of range (ledger has 3 expenses)"
        );
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(TallyError::Parse("abc".into()).is_invalid_input());
        assert!(TallyError::OutOfRange { index: 0, len: 1 }.is_invalid_input());
        assert!(!TallyError::NotFound("Food".into()).is_invalid_input());
        assert!(!TallyError::PersistenceWrite("denied".into()).is_invalid_input());
    }
}
