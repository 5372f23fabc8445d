//! # Tally Core
//!
//! Core library for Tally - a personal expense ledger driven from the terminal.
//!
//! This crate provides the expense data model, the in-memory ledger and its
//! JSON persistence, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **expense**: The expense record and per-field updates
//! - **ledger**: Ordered, index-addressable expense store with aggregation
//! - **storage**: Storage trait and the JSON file implementation
//! - **fs**: Atomic file replacement helpers

pub mod error;
pub mod expense;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use error::{Result, TallyError};
pub use expense::{parse_amount, EditReport, Expense, ExpenseUpdate, Field};
pub use ledger::{parse_display_index, Ledger};
pub use storage::{JsonFileStorage, LedgerStorage};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
