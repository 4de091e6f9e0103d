// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific readers for the results portal. Each spec focuses on a
//! single page and encodes *where the data lives in the HTML* and *how to
//! extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: a document string in, headers + records out.
//! - **Selector choice** (table/row/header classes) and cell-text rules.
//!
//! ## What does **not** live here
//! - **Networking**: `source::RaceviewSource` fetches, then hands the page here.
//! - **Normalization**: specs return cell text untouched apart from tag and
//!   entity cleanup; times, dates and positions are parsed downstream.
//!
//! ## Conventions
//! - Case-insensitive tag detection via `core::html`; no full-document regexes.
//! - Class matching is by whole token, so `resultsTable` never matches a
//!   `resultsTableHeader` cell.
//! - Specs are testable offline against saved HTML.
pub mod raceview;
