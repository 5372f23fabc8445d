//! The expense record and per-field updates.
//!
//! An [`Expense`] serializes to the on-disk object shape
//! `{"amount", "category", "note", "date"}`. Every field defaults to its
//! zero value when absent so hand-edited files still load.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// A single expense entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent; sign is not enforced
    #[serde(default)]
    pub amount: f64,

    /// Free-form category label
    #[serde(default)]
    pub category: String,

    /// Optional note; empty means absent
    #[serde(default)]
    pub note: String,

    /// Date text, conventionally `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        note: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            note: note.into(),
            date: date.into(),
        }
    }

    /// Whether a note was recorded.
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }

    /// Case-insensitive category comparison (Unicode lowercase fold).
    pub fn category_matches(&self, query: &str) -> bool {
        self.category
            .chars()
            .flat_map(char::to_lowercase)
            .eq(query.chars().flat_map(char::to_lowercase))
    }

    /// Apply an update field by field.
    ///
    /// Each field is applied or rejected independently; a bad amount does
    /// not prevent the other fields from changing.
    pub fn apply(&mut self, update: &ExpenseUpdate) -> EditReport {
        let mut report = EditReport::default();

        if let Some(ref raw) = update.amount {
            match parse_amount(raw) {
                Ok(amount) => {
                    self.amount = amount;
                    report.applied.push(Field::Amount);
                }
                Err(err) => report.rejected.push((Field::Amount, err)),
            }
        }
        if let Some(ref category) = update.category {
            self.category = category.clone();
            report.applied.push(Field::Category);
        }
        if let Some(ref note) = update.note {
            self.note = note.clone();
            report.applied.push(Field::Note);
        }
        if let Some(ref date) = update.date {
            self.date = date.clone();
            report.applied.push(Field::Date);
        }

        report
    }
}

/// Parse a user-supplied amount.
///
/// Accepts anything `f64` parses after trimming, except non-finite values,
/// which JSON cannot represent.
pub fn parse_amount(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| TallyError::Parse(format!("\"{}\" is not a number", trimmed)))?;
    if !amount.is_finite() {
        return Err(TallyError::Parse(format!(
            "\"{}\" is not a finite number",
            trimmed
        )));
    }
    Ok(amount)
}

/// Editable fields of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Category,
    Note,
    Date,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Note => "note",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder describing an edit. `None` keeps the current value.
///
/// The amount is carried as raw text so it can be rejected on its own.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub date: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, raw: impl Into<String>) -> Self {
        self.amount = Some(raw.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.note.is_none() && self.date.is_none()
    }
}

/// Outcome of applying an [`ExpenseUpdate`].
#[derive(Debug, Default)]
pub struct EditReport {
    pub applied: Vec<Field>,
    pub rejected: Vec<(Field, TallyError)>,
}

impl EditReport {
    pub fn is_rejected(&self, field: Field) -> bool {
        self.rejected.iter().any(|(f, _)| *f == field)
    }

    pub fn is_applied(&self, field: Field) -> bool {
        self.applied.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Expense {
        Expense::new(12.5, "Food", "", "2024-01-01")
    }

    #[test]
    fn test_parse_amount_accepts_decimal_and_negative() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" -3 ").unwrap(), -3.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_text_and_non_finite() {
        assert!(matches!(parse_amount("abc"), Err(TallyError::Parse(_))));
        assert!(matches!(parse_amount(""), Err(TallyError::Parse(_))));
        assert!(matches!(parse_amount("NaN"), Err(TallyError::Parse(_))));
        assert!(matches!(parse_amount("inf"), Err(TallyError::Parse(_))));
    }

    #[test]
    fn test_category_matches_ignores_case() {
        let expense = lunch();
        assert!(expense.category_matches("FOOD"));
        assert!(expense.category_matches("food"));
        assert!(!expense.category_matches("Foo"));
        assert!(!Expense::new(1.0, "Straße", "", "").category_matches("STRASSE"));
        assert!(Expense::new(1.0, "ÉTÉ", "", "").category_matches("été"));
    }

    #[test]
    fn test_apply_rejects_bad_amount_but_keeps_other_fields() {
        let mut expense = lunch();
        let update = ExpenseUpdate::new()
            .amount("abc")
            .category("Dining")
            .note("with Sam");

        let report = expense.apply(&update);

        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, "Dining");
        assert_eq!(expense.note, "with Sam");
        assert_eq!(expense.date, "2024-01-01");
        assert!(report.is_rejected(Field::Amount));
        assert!(report.is_applied(Field::Category));
        assert!(report.is_applied(Field::Note));
        assert!(!report.is_applied(Field::Date));
    }

    #[test]
    fn test_apply_empty_update_changes_nothing() {
        let mut expense = lunch();
        let update = ExpenseUpdate::new();
        assert!(update.is_empty());

        let report = expense.apply(&update);

        assert_eq!(expense, lunch());
        assert!(report.applied.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_missing_fields_deserialize_to_zero_values() {
        let expense: Expense = serde_json::from_str(r#"{"amount": 4}"#).unwrap();
        assert_eq!(expense, Expense::new(4.0, "", "", ""));
    }
}
