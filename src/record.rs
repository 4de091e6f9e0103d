// src/record.rs
//
// Record shapes flowing through the pipeline.
//
// - RawResultRecord:  column label -> cell text, exactly as the source gave it.
// - RunnerResultSet:  all raw records for one runner (+ the source's headers).
// - NormalizedResult: one raw record plus its parsed fields; built once at
//                     grouping time and read-only afterwards.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::consts::{COL_DATE, COL_DISTANCE, COL_PACE, COL_POSITION, COL_TIME};
use crate::normalize::{parse_date, parse_position, parse_time};

/// One race entry as scraped. Keys are the portal's column labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResultRecord(HashMap<String, String>);

impl RawResultRecord {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Field text, or `""` when the column is absent.
    pub fn field(&self, label: &str) -> &str {
        self.get(label).unwrap_or("")
    }

    pub fn distance(&self) -> Option<&str> { self.get(COL_DISTANCE) }
    pub fn time(&self) -> &str { self.field(COL_TIME) }
    pub fn pace(&self) -> &str { self.field(COL_PACE) }
    pub fn position(&self) -> &str { self.field(COL_POSITION) }
    pub fn date(&self) -> &str { self.field(COL_DATE) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn fields(&self) -> &HashMap<String, String> { &self.0 }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawResultRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Everything one fetch produced for a runner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunnerResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub records: Vec<RawResultRecord>,
}

impl RunnerResultSet {
    pub fn new(name: impl Into<String>, headers: Vec<String>, records: Vec<RawResultRecord>) -> Self {
        Self { name: name.into(), headers, records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct distance labels across all records, ascending.
    pub fn distances(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(RawResultRecord::distance)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// A raw record with its parsed fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub raw: RawResultRecord,
    /// Position of the raw record within its runner's result set.
    pub source_index: usize,
    /// `f64::INFINITY` when the finish time does not parse.
    pub time_seconds: f64,
    /// Pace read with the finish-time grammar; `f64::INFINITY` when absent.
    pub pace_seconds: f64,
    pub parsed_date: Option<NaiveDate>,
    /// `0` when the date does not parse.
    pub year: i32,
    pub position: Option<f64>,
}

impl NormalizedResult {
    pub fn from_raw(raw: RawResultRecord, source_index: usize) -> Self {
        let time_seconds = parse_time(raw.time());
        let pace_seconds = parse_time(raw.pace());
        let (parsed_date, year) = parse_date(raw.date());
        let position = parse_position(raw.position());
        Self { raw, source_index, time_seconds, pace_seconds, parsed_date, year, position }
    }

    pub fn has_year(&self) -> bool { self.year != crate::normalize::UNDETERMINED_YEAR }
}
