//! Formatting utilities for human-readable output.
//!
//! This module provides consistent formatting for scores, match rates,
//! and upload timestamps across the UI.

use chrono::{DateTime, NaiveDateTime};

/// Format a [0, 1] fraction as a percentage with one decimal place.
///
/// Used for match rates and per-line similarity scores.
///
/// # Examples
///
/// ```ignore
/// use partmatch::utils::formatting::format_percent;
///
/// assert_eq!(format_percent(0.666), "66.6%");
/// ```
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a [0, 1] fraction as a whole-number percentage.
///
/// Used for the match badge on a search result.
pub fn format_rounded_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Format a backend upload timestamp for the documents table.
///
/// The backend's format is not pinned down, so parsing is best-effort:
/// RFC 3339 first, then a bare `YYYY-MM-DDTHH:MM:SS` with optional
/// fractional seconds. An unparseable value is shown raw rather than
/// hiding the row.
pub fn format_upload_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.555), "55.5%");
        assert_eq!(format_percent(0.82), "82.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_format_rounded_percent() {
        assert_eq!(format_rounded_percent(0.82), "82%");
        assert_eq!(format_rounded_percent(0.825), "83%");
        assert_eq!(format_rounded_percent(0.0), "0%");
        assert_eq!(format_rounded_percent(1.0), "100%");
    }

    #[test]
    fn test_format_upload_date_rfc3339() {
        assert_eq!(
            format_upload_date("2025-05-07T14:32:11+00:00"),
            "2025-05-07 14:32"
        );
    }

    #[test]
    fn test_format_upload_date_naive() {
        assert_eq!(
            format_upload_date("2025-05-07T14:32:11.512000"),
            "2025-05-07 14:32"
        );
        assert_eq!(format_upload_date("2025-05-07T14:32:11"), "2025-05-07 14:32");
    }

    #[test]
    fn test_format_upload_date_unparseable_shown_raw() {
        assert_eq!(format_upload_date("last tuesday"), "last tuesday");
        assert_eq!(format_upload_date(""), "");
    }
}
