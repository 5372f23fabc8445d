//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying expenses
//! in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{category_totals_json, expenses_json, total_json};
pub use text::{category_total_lines, expense_line, expense_table};
