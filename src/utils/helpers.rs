//! Helper functions and utilities
//!
//! This module contains common formatting and date helpers used by the
//! list screens, the exports and the command line front end.

use chrono::{Datelike, Duration, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid ISO date pattern"));

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date the way the API stores it (`YYYY-MM-DD`)
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Extract the `YYYY-MM-DD` part of an ISO date or date-time string
///
/// Returns `None` for anything that does not start with a well-formed date
/// shape; no calendar validation is done.
pub fn date_part(value: &str) -> Option<&str> {
    if ISO_DATE.is_match(value) {
        value.get(..10)
    } else {
        None
    }
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// `YYYY-MM` prefix of the month containing `date`
pub fn month_prefix(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format an amount of money with thousands separators (no decimals)
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Sanitize filename for safe storage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-05-01"), Some("2024-05-01"));
        assert_eq!(date_part("2024-05-01T08:30:00Z"), Some("2024-05-01"));
        assert_eq!(date_part("01/05/2024"), None);
        assert_eq!(date_part(""), None);
    }

    #[test]
    fn test_date_part_rejects_non_ascii_digits() {
        assert_eq!(date_part("٢٠٢٤-٠٦-١٢"), None);
        assert_eq!(date_part("２０２４-０６-１２"), None);
        assert_eq!(date_part("2024-06-1٢"), None);
    }

    #[test]
    fn test_week_bounds_monday_to_sunday() {
        // 2024-05-01 was a Wednesday
        let (start, end) = week_bounds(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(iso_date(start), "2024-04-29");
        assert_eq!(iso_date(end), "2024-05-05");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 4.0), 25.0);
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(format_percentage(33.333), "33.3%");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(150000.0), "150,000");
        assert_eq!(format_money(-1234567.4), "-1,234,567");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
        assert_eq!(truncate_text("Sân cầu lông số 1", 8), "Sân c...");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("events report.csv"), "events_report.csv");
    }
}
