//! Parsing helpers for prompt and flag values.

use chrono::Local;

/// Date format used for new expenses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Trimmed value, or `None` when the user entered nothing.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The date to record: the given text, or today when blank.
pub fn date_or_today(value: Option<&str>) -> String {
    value.and_then(non_blank).unwrap_or_else(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_today_is_iso_date() {
        let value = today();
        assert!(NaiveDate::parse_from_str(&value, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Food "), Some("Food".to_string()));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }

    #[test]
    fn test_date_or_today_keeps_free_text() {
        assert_eq!(date_or_today(Some("2024-13-45")), "2024-13-45");
        assert_eq!(date_or_today(Some(" ")), today());
        assert_eq!(date_or_today(None), today());
    }
}
