// src/input.rs
//
// Runner names from a file: `.csv` takes the first column below a header
// row, anything else is one name per line. Names are trimmed; blanks dropped.

use std::fs;
use std::path::Path;

use crate::csv::parse_rows;
use crate::error::InputError;

pub fn load_names(path: &Path) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let names = if is_csv { names_from_csv(&text) } else { names_from_lines(&text) };
    if names.is_empty() {
        return Err(InputError::NoNames(path.to_path_buf()));
    }
    Ok(names)
}

pub fn names_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// First column of every row after the header row.
pub fn names_from_csv(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    parse_rows(text, ',')
        .into_iter()
        .skip(1)
        .filter_map(|row| row.into_iter().next())
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect()
}
