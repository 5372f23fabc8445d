//! The in-memory expense ledger.
//!
//! Records are kept in insertion order. That order is the only identity a
//! record has: display index `i` (1-based) always refers to position `i - 1`
//! of the current sequence, so deleting a record shifts every later index
//! down by one.

use std::collections::BTreeMap;

use crate::error::{Result, TallyError};
use crate::expense::{EditReport, Expense, ExpenseUpdate};

/// Ordered, index-addressable collection of expenses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append an expense, returning its display index.
    pub fn add(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len()
    }

    /// Iterate `(display_index, expense)` pairs in insertion order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.expenses
            .iter()
            .enumerate()
            .map(|(position, expense)| (position + 1, expense))
    }

    /// Look up an expense by display index.
    pub fn get(&self, index: usize) -> Result<&Expense> {
        let position = self.position(index)?;
        Ok(&self.expenses[position])
    }

    /// Sum of all amounts; `0.0` when empty.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Sum of amounts per exact category string.
    ///
    /// Grouping is case-sensitive: "Food" and "food" are separate keys.
    pub fn total_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Expenses whose category matches `query` ignoring case.
    ///
    /// Display indices are the ledger's own, not renumbered.
    pub fn filter_by_category<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Expense)> + 'a {
        self.list()
            .filter(move |(_, expense)| expense.category_matches(query))
    }

    /// Remove the expense at `index`, returning it.
    pub fn delete(&mut self, index: usize) -> Result<Expense> {
        let position = self.position(index)?;
        let removed = self.expenses.remove(position);
        log::debug!("Deleted expense {} ({} remaining)", index, self.expenses.len());
        Ok(removed)
    }

    /// Edit the expense at `index` in place.
    ///
    /// Fields are applied independently; see [`Expense::apply`].
    pub fn edit(&mut self, index: usize, update: &ExpenseUpdate) -> Result<EditReport> {
        let position = self.position(index)?;
        let report = self.expenses[position].apply(update);
        for (field, err) in &report.rejected {
            log::debug!("Edit of expense {} kept old {}: {}", index, field, err);
        }
        Ok(report)
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index < 1 || index > self.expenses.len() {
            return Err(TallyError::OutOfRange {
                index: index as i64,
                len: self.expenses.len(),
            });
        }
        Ok(index - 1)
    }
}

/// Parse user text into a display index valid for a ledger of `len` records.
///
/// # Errors
///
/// Returns `TallyError::Parse` for non-numeric text and
/// `TallyError::OutOfRange` for numbers outside `1..=len`.
pub fn parse_display_index(value: &str, len: usize) -> Result<usize> {
    let trimmed = value.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| TallyError::Parse(format!("\"{}\" is not a whole number", trimmed)))?;
    if index < 1 || index as u64 > len as u64 {
        return Err(TallyError::OutOfRange { index, len });
    }
    Ok(index as usize)
}
