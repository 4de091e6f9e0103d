// src/specs/raceview.rs
//! Scraping *spec* for the portal's search results page.
//!
//! Page shape:
//! - one `<table class="resultsTable">` holding the runner's races
//! - header cells `<td class="resultsTableHeader">`, in column order
//! - data rows `<tr class="resultsTableRow">`, one `<td>` per header
//!
//! A cell's value is the text of its first `<a>` when it has one (event and
//! runner names are links), else the cell text. Cells beyond the header
//! count are ignored. Rows with no usable cells are skipped.
//!
//! No table at all means the portal found nothing for the query.

use tracing::debug;

use crate::core::html::{
    find_block_with_class, has_class, inner_after_open_tag, opener, strip_tags, tag_blocks,
};
use crate::error::SourceError;
use crate::record::RawResultRecord;
use crate::source::SourcePage;

pub const TABLE_CLASS: &str = "resultsTable";
pub const HEADER_CLASS: &str = "resultsTableHeader";
pub const ROW_CLASS: &str = "resultsTableRow";

pub const NO_RESULTS: &str = "No results found";

pub fn parse_results_page(doc: &str) -> Result<SourcePage, SourceError> {
    let table = find_block_with_class(doc, "table", TABLE_CLASS)
        .ok_or_else(|| SourceError::Portal(NO_RESULTS.to_string()))?;

    let headers: Vec<String> = tag_blocks(table, "<td", "</td>")
        .filter(|td| has_class(opener(td), HEADER_CLASS))
        .map(|td| strip_tags(inner_after_open_tag(td)))
        .collect();

    let results: Vec<RawResultRecord> = tag_blocks(table, "<tr", "</tr>")
        .filter(|tr| has_class(opener(tr), ROW_CLASS))
        .map(|tr| extract_row(tr, &headers))
        .filter(|rec| !rec.is_empty())
        .collect();

    debug!(columns = headers.len(), rows = results.len(), "parsed results table");
    Ok(SourcePage { headers, results })
}

fn extract_row(tr: &str, headers: &[String]) -> RawResultRecord {
    tag_blocks(tr, "<td", "</td>")
        .zip(headers)
        .map(|(td, header)| (header.clone(), cell_text(td)))
        .collect()
}

fn cell_text(td: &str) -> String {
    let inner = inner_after_open_tag(td);
    match tag_blocks(inner, "<a", "</a>").next() {
        Some(a) => strip_tags(inner_after_open_tag(a)),
        None => strip_tags(inner),
    }
}
