//! Date formatting shared by the views and the API layer.
//!
//! Dates on the wire are `YYYY-MM-DD`; the display convention is
//! `DD/MM/YYYY`. Every function swallows parse failures and returns an
//! empty string instead.

use chrono::{Datelike, Duration, Local, NaiveDate};

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    // Accept both plain dates and datetimes ("2024-05-10T12:00:00Z").
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// ISO date(-time) string to DD/MM/YYYY. Invalid input → "".
pub fn format_date(value: &str) -> String {
    parse_iso_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Any ISO date-like string to the canonical API form YYYY-MM-DD.
/// Idempotent; invalid input → "".
pub fn format_date_for_api(value: &str) -> String {
    parse_iso_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Canonical value for `<input type="date">`; same form as the API wants.
pub fn to_input_date(value: &str) -> String {
    format_date_for_api(value)
}

/// First and last calendar day of the current month (local clock), as
/// canonical date strings.
pub fn current_month_range() -> (String, String) {
    month_range(Local::now().date_naive())
}

fn month_range(day: NaiveDate) -> (String, String) {
    let start = day.with_day(1).unwrap_or(day);
    let end = next_month_start(start)
        .map(|d| d - Duration::days(1))
        .unwrap_or(start);
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

fn next_month_start(day: NaiveDate) -> Option<NaiveDate> {
    if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-10"), "10/05/2024");
        assert_eq!(format_date("2024-05-10T12:30:00Z"), "10/05/2024");
    }

    #[test]
    fn test_invalid_input_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("not-a-date"), "");
        assert_eq!(format_date_for_api("2024-13-40"), "");
        assert_eq!(to_input_date(""), "");
    }

    #[test]
    fn test_format_date_for_api_is_idempotent() {
        let once = format_date_for_api("2024-05-10T08:00:00Z");
        assert_eq!(once, "2024-05-10");
        assert_eq!(format_date_for_api(&once), once);
        let twice = to_input_date(&to_input_date("2024-01-31"));
        assert_eq!(twice, "2024-01-31");
    }

    #[test]
    fn test_month_range_boundaries() {
        let mid = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(
            month_range(mid),
            ("2024-05-01".to_string(), "2024-05-31".to_string())
        );
        let leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            month_range(leap),
            ("2024-02-01".to_string(), "2024-02-29".to_string())
        );
        let december = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            month_range(december),
            ("2023-12-01".to_string(), "2023-12-31".to_string())
        );
    }

    #[test]
    fn test_current_month_range_invariants() {
        let (start, end) = current_month_range();
        assert!(start <= end);
        assert_eq!(&start[8..], "01");
        // Same calendar month on both ends.
        assert_eq!(start[..7], end[..7]);
    }
}
