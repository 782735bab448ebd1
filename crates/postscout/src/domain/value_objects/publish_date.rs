//! Publish-date parsing
//!
//! Each provider variant hands back dates in a different shape: the
//! semantic API returns RFC 3339 timestamps, the LLM extractor echoes
//! whatever the page showed, and keyword snippets carry English forms
//! like "Mar 5, 2024". Parsing failure is treated identically to "no
//! date" by the filter, so this function returns `Option` rather than
//! `Result`.

use chrono::{DateTime, NaiveDate};

/// Date formats tried in order against the raw token.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse a raw provider date token into a `NaiveDate`, or `None` when the
/// token is absent, empty, or in no recognizable format.
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    // Some providers append a time ("2024-03-15 10:30"); the date is the
    // first whitespace-separated token.
    let first = trimmed.split_whitespace().next()?;
    if first != trimmed {
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(first, fmt) {
                return Some(date);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_publish_date("2024-03-15"), Some(date(2024, 3, 15)));
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        assert_eq!(
            parse_publish_date("2024-03-15T10:30:00Z"),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            parse_publish_date("2024-03-15T10:30:00+02:00"),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn parses_iso_date_with_trailing_time() {
        assert_eq!(
            parse_publish_date("2024-03-15 10:30"),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn parses_english_month_forms() {
        assert_eq!(parse_publish_date("Mar 5, 2024"), Some(date(2024, 3, 5)));
        assert_eq!(parse_publish_date("March 5, 2024"), Some(date(2024, 3, 5)));
        assert_eq!(parse_publish_date("5 Mar 2024"), Some(date(2024, 3, 5)));
    }

    #[test]
    fn parses_slash_dates() {
        assert_eq!(parse_publish_date("2024/03/15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_publish_date("03/15/2024"), Some(date(2024, 3, 15)));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_publish_date("  2024-03-15  "), Some(date(2024, 3, 15)));
    }

    #[test]
    fn unparseable_returns_none() {
        assert_eq!(parse_publish_date("not-a-date"), None);
        assert_eq!(parse_publish_date("yesterday"), None);
        assert_eq!(parse_publish_date(""), None);
        assert_eq!(parse_publish_date("   "), None);
    }
}
