// src/normalize/date.rs
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Year reported when no candidate format matches.
pub const UNDETERMINED_YEAR: i32 = 0;

/// Candidate formats in the order they are tried. The first entry is the
/// portal's native `DD/MM/YY`.
pub const DATE_FORMATS: [&str; 5] = [
    "%d/%m/%y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%d-%m-%y",
    "%m-%d-%y",
];

/// Parse a race date, returning the date (if any format matched) and its
/// year, or [`UNDETERMINED_YEAR`].
pub fn parse_date(text: &str) -> (Option<NaiveDate>, i32) {
    match parse_date_with_format(text) {
        Some((date, _)) => (Some(date), date.year()),
        None => (None, UNDETERMINED_YEAR),
    }
}

/// Like [`parse_date`] but also reports the index into [`DATE_FORMATS`] that
/// matched.
pub fn parse_date_with_format(text: &str) -> Option<(NaiveDate, usize)> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    for (i, fmt) in DATE_FORMATS.iter().enumerate() {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            if i > 0 {
                trace!(input = s, format = *fmt, "date matched fallback format");
            }
            return Some((date, i));
        }
    }
    None
}
