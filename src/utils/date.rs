//! Dates in generated artifacts (`<lastmod>` in sitemaps).

use chrono::{NaiveDate, Utc};

/// W3C date format used by sitemaps.
pub const W3C_DATE: &str = "%Y-%m-%d";

/// Today's date in UTC as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format(W3C_DATE).to_string()
}

/// Parse a `YYYY-MM-DD` date, normalized back to its canonical form.
///
/// Returns `None` for anything that is not a real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), W3C_DATE).ok()
}
