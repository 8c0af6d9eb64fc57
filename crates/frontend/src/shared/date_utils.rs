//! Utilities for date and time formatting of backend timestamps

use chrono::{DateTime, NaiveDateTime};

/// Парсинг ISO-строки: с таймзоной (RFC 3339) или без неё (как отдаёт ASP.NET)
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Time-of-day part only, used by the health badge
pub fn format_time(datetime_str: &str) -> String {
    parse_timestamp(datetime_str)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| datetime_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-03-15T14:02:26.123Z"), "14:02:26");
        assert_eq!(format_time("2024-12-31T23:59:59Z"), "23:59:59");
        assert_eq!(format_time("2024-12-31T23:59:59.1234567"), "23:59:59");
    }

    #[test]
    fn test_format_time_normalizes_offset_to_utc() {
        assert_eq!(format_time("2024-03-15T14:02:26+03:00"), "11:02:26");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_time("invalid"), "invalid");
        assert_eq!(format_time(""), "");
    }
}
