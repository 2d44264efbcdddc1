/// Utilities for date and time formatting

/// Format an ISO-8601 timestamp as DD.MM.YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123456Z" -> "15.03.2024 14:02:26"
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| datetime_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59.654321Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
