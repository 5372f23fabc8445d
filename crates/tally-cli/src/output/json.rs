//! JSON output formatting for expenses and totals.

use std::collections::BTreeMap;

use tally_core::Expense;

/// Convert one listed expense to JSON, including its display index.
pub fn expense_json(index: usize, expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "amount": expense.amount,
        "category": expense.category,
        "note": expense.note,
        "date": expense.date,
    })
}

/// Convert `(display_index, expense)` pairs to a JSON array.
pub fn expenses_json<'a>(
    expenses: impl IntoIterator<Item = (usize, &'a Expense)>,
) -> serde_json::Value {
    serde_json::Value::Array(
        expenses
            .into_iter()
            .map(|(index, expense)| expense_json(index, expense))
            .collect(),
    )
}

pub fn total_json(total: f64, count: usize) -> serde_json::Value {
    serde_json::json!({ "total": total, "count": count })
}

pub fn category_totals_json(totals: &BTreeMap<String, f64>) -> serde_json::Value {
    serde_json::Value::Array(
        totals
            .iter()
            .map(|(category, total)| serde_json::json!({ "category": category, "total": total }))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expenses_json_keeps_indices() {
        let food = Expense::new(10.0, "Food", "", "2024-01-01");
        let bus = Expense::new(2.5, "Bus", "late", "2024-01-02");

        let value = expenses_json(vec![(1, &food), (3, &bus)]);

        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[1]["index"], 3);
        assert_eq!(value[1]["note"], "late");
        assert_eq!(value[1]["amount"], 2.5);
    }

    #[test]
    fn test_category_totals_json() {
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_string(), 10.0);
        totals.insert("food".to_string(), 5.0);

        let value = category_totals_json(&totals);

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["category"], "Food");
        assert_eq!(value[1]["total"], 5.0);
    }
}
