//! Storage layer for the expense ledger.
//!
//! - **traits**: the `LedgerStorage` interface
//! - **json_file**: JSON document on disk (`expenses.json`)

mod json_file;
mod traits;

pub use json_file::{JsonFileStorage, DEFAULT_FILE_NAME};
pub use traits::LedgerStorage;
