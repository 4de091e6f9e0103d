// src/normalize/mod.rs
//! Field normalizers for portal values.
//!
//! Every function here is total: bad input maps to a sentinel, never a panic
//! or an error, so a garbled record still sorts and counts.

pub mod date;
pub mod time;

pub use date::{parse_date, UNDETERMINED_YEAR};
pub use time::{format_time, parse_time, UNPARSEABLE_TIME};

/// Numeric overall position. Non-numeric (`DNF`, empty, ...) is `None`.
pub fn parse_position(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
