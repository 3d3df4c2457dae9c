//! Date and time display helpers.

use chrono::{Duration, NaiveDate};

/// Format an ISO datetime string to DD.MM.YYYY.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Suggested new due date for an extension dialog, as YYYY-MM-DD:
/// one week past the current due date, or two weeks from today when the
/// loan has no due date yet.
pub fn suggested_extension_date(due_date: Option<&str>, today: NaiveDate) -> String {
    let suggested = due_date
        .map(|d| d.split('T').next().unwrap_or(d))
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d + Duration::days(7))
        .unwrap_or_else(|| today + Duration::days(14));
    suggested.format("%Y-%m-%d").to_string()
}

/// Today's date in the browser's clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn extension_suggestion_from_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            suggested_extension_date(Some("2024-03-16"), today),
            "2024-03-23"
        );
        assert_eq!(
            suggested_extension_date(Some("2024-03-16T00:00:00Z"), today),
            "2024-03-23"
        );
    }

    #[test]
    fn extension_suggestion_without_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(suggested_extension_date(None, today), "2024-03-15");
        assert_eq!(suggested_extension_date(Some("garbage"), today), "2024-03-15");
    }
}
