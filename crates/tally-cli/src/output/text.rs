//! Text and table output formatting for expenses.

use std::collections::BTreeMap;

use tally_core::Expense;

use crate::ui::format::single_line;
use crate::ui::{format_money, table, truncate, Column, UiContext};

/// Columns for expense tables.
pub const EXPENSE_COLUMNS: [Column; 5] = [
    Column::numeric("#"),
    Column::new("Date"),
    Column::numeric("Amount"),
    Column::new("Category"),
    Column::new("Note"),
];

const NOTE_WIDTH: usize = 40;

/// One expense as a menu line: `1) 2024-01-01 - £12.50 [Food] - note`.
///
/// The category is left out when listing a single category.
pub fn expense_line(
    ctx: &UiContext,
    index: usize,
    expense: &Expense,
    with_category: bool,
) -> String {
    let mut line = format!(
        "{}) {} - {}",
        index,
        expense.date,
        format_money(&ctx.currency, expense.amount)
    );
    if with_category {
        line.push_str(&format!(" [{}]", expense.category));
    }
    if expense.has_note() {
        line.push_str(&format!(" - {}", single_line(&expense.note)));
    }
    line
}

/// Table rows for `(display_index, expense)` pairs.
pub fn expense_rows<'a>(
    ctx: &UiContext,
    expenses: impl IntoIterator<Item = (usize, &'a Expense)>,
) -> Vec<Vec<String>> {
    expenses
        .into_iter()
        .map(|(index, expense)| {
            vec![
                index.to_string(),
                expense.date.clone(),
                format_money(&ctx.currency, expense.amount),
                expense.category.clone(),
                truncate(&single_line(&expense.note), NOTE_WIDTH),
            ]
        })
        .collect()
}

/// Render expenses as a table for one-shot commands.
pub fn expense_table<'a>(
    ctx: &UiContext,
    expenses: impl IntoIterator<Item = (usize, &'a Expense)>,
) -> String {
    table(ctx, &EXPENSE_COLUMNS, &expense_rows(ctx, expenses))
}

/// `Category: £total` lines in category order.
pub fn category_total_lines(ctx: &UiContext, totals: &BTreeMap<String, f64>) -> Vec<String> {
    totals
        .iter()
        .map(|(category, total)| format!("{}: {}", category, format_money(&ctx.currency, *total)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_line_with_and_without_note() {
        let ctx = UiContext::plain();
        let plain = Expense::new(12.5, "Food", "", "2024-01-01");
        let noted = Expense::new(3.0, "Bus", "to work", "2024-01-02");

        assert_eq!(
            expense_line(&ctx, 1, &plain, true),
            "1) 2024-01-01 - \u{00A3}12.50 [Food]"
        );
        assert_eq!(
            expense_line(&ctx, 2, &noted, false),
            "2) 2024-01-02 - \u{00A3}3.00 - to work"
        );
    }

    #[test]
    fn test_expense_rows() {
        let ctx = UiContext::plain().with_currency("$");
        let expense = Expense::new(7.0, "Rent", "line one\nline two", "2024-02-01");

        let rows = expense_rows(&ctx, vec![(4, &expense)]);

        assert_eq!(
            rows,
            vec![vec![
                "4".to_string(),
                "2024-02-01".to_string(),
                "$7.00".to_string(),
                "Rent".to_string(),
                "line one line two".to_string(),
            ]]
        );
    }

    #[test]
    fn test_category_total_lines() {
        let ctx = UiContext::plain().with_currency("$");
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_string(), 10.0);
        totals.insert("Transport".to_string(), 3.5);

        assert_eq!(
            category_total_lines(&ctx, &totals),
            vec!["Food: $10.00".to_string(), "Transport: $3.50".to_string()]
        );
    }
}
