// src/csv.rs
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::{COL_PACE_SECONDS, COL_TIME_SECONDS, COL_YEAR};
use crate::group::DistanceGroup;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row that had no final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Detail table ---------------- */

/// Detailed results table for one distance group: the source columns, then
/// the derived `time_seconds`, `pace_seconds` and `year`, one row per race in
/// group order.
///
/// Column order follows `source_headers`; when the source reported none, the
/// union of record labels is used, sorted.
pub fn detail_table(group: &DistanceGroup, source_headers: &[String]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = if source_headers.is_empty() {
        group
            .records()
            .iter()
            .flat_map(|r| r.raw.fields().keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    } else {
        source_headers.to_vec()
    };

    let rows = group
        .records()
        .iter()
        .map(|r| {
            let mut row: Vec<String> = headers.iter().map(|h| r.raw.field(h).to_string()).collect();
            row.push(r.time_seconds.to_string());
            row.push(r.pace_seconds.to_string());
            row.push(r.year.to_string());
            row
        })
        .collect();

    headers.push(COL_TIME_SECONDS.to_string());
    headers.push(COL_PACE_SECONDS.to_string());
    headers.push(COL_YEAR.to_string());
    (headers, rows)
}
