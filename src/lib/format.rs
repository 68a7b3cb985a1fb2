//! Display formatting for raw backend values.

use chrono::DateTime;

/// Formats an RFC 3339 timestamp as a short human-readable date, for
/// example "Mar 4, 2024". Values that do not parse are shown as-is so
/// a malformed record never hides the rest of the page.
pub fn display_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::display_date;

    #[test]
    fn display_date_formats_rfc3339_timestamps() {
        assert_eq!(display_date("2024-03-04T09:30:00.000Z"), "Mar 4, 2024");
        assert_eq!(display_date(" 2023-12-25T00:00:00+05:30 "), "Dec 25, 2023");
    }

    #[test]
    fn display_date_passes_through_unparseable_values() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
