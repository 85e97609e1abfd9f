//! Field-level parsers for the contract CSV.
//!
//! Each parser returns `None` on malformed input; the caller attaches the
//! row and column to build a `LoadError`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a date or date-time cell. Plain dates become midnight; RFC 3339
/// timestamps are converted to UTC and the offset dropped.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Strip `$` and `,`, then parse as a finite, non-negative float.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let value: f64 = cleaned.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Boolean theme flag. An empty cell is `false`.
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
        "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
        _ => None,
    }
}

/// Whole days; fractional input is truncated toward zero.
pub fn parse_days(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(days) = text.parse::<i64>() {
        return Some(days);
    }
    let value: f64 = text.parse().ok()?;
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

/// Whole days between two instants, rounded toward negative infinity.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start)
        .num_seconds()
        .div_euclid(86_400)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert_eq!(parse_datetime("2023-04-01"), Some(ymd_hms(2023, 4, 1, 0, 0, 0)));
        assert_eq!(
            parse_datetime("2023-04-01 13:45:10"),
            Some(ymd_hms(2023, 4, 1, 13, 45, 10))
        );
        assert_eq!(
            parse_datetime("2023-04-01T13:45:10.250"),
            Some(ymd_hms(2023, 4, 1, 13, 45, 10) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(
            parse_datetime("2023-04-01T23:00:00-02:00"),
            Some(ymd_hms(2023, 4, 2, 1, 0, 0))
        );
        assert_eq!(parse_datetime("04/01/2023"), Some(ymd_hms(2023, 4, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("yesterday"), None);
        assert_eq!(parse_datetime("2023-13-01"), None);
        assert_eq!(parse_datetime("2023-02-30"), None);
    }

    #[test]
    fn test_parse_amount_strips_currency_formatting() {
        assert_eq!(parse_amount("$1,234.50"), Some(1234.5));
        assert_eq!(parse_amount(" 42 "), Some(42.0));
        assert_eq!(parse_amount("$ 10,000,000"), Some(10_000_000.0));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_residue() {
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("365"), Some(365));
        assert_eq!(parse_days("364.0"), Some(364));
        assert_eq!(parse_days("-3"), Some(-3));
        assert_eq!(parse_days("soon"), None);
    }

    #[test]
    fn test_days_between_floors_partial_days() {
        let start = ymd_hms(2023, 1, 1, 0, 0, 0);
        assert_eq!(days_between(start, ymd_hms(2023, 12, 31, 0, 0, 0)), 364);
        assert_eq!(days_between(start, ymd_hms(2023, 1, 1, 18, 0, 0)), 0);
        assert_eq!(days_between(start, ymd_hms(2022, 12, 31, 12, 0, 0)), -1);
        assert_eq!(days_between(start, ymd_hms(2022, 12, 22, 0, 0, 0)), -10);
    }
}
