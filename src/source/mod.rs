// src/source/mod.rs
//! Result Source adapters: runner name in, raw records out.
//!
//! The orchestrator only sees [`ResultSource`]. Adapters own their transport
//! and any retry policy; none is applied above them.

mod file;
mod raceview;

pub use file::FileSource;
pub use raceview::RaceviewSource;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::record::RawResultRecord;

/// One successful adapter answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePage {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub results: Vec<RawResultRecord>,
}

/// Adapter answer in its JSON form: `{"error": reason}` or
/// `{"headers": [...], "results": [...]}`. An object carrying `error` is a
/// failure whatever else it holds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourceResponse {
    Failed { error: String },
    Page(SourcePage),
}

impl SourceResponse {
    pub fn into_result(self) -> Result<SourcePage, SourceError> {
        match self {
            SourceResponse::Failed { error } => Err(SourceError::Portal(error)),
            SourceResponse::Page(page) => Ok(page),
        }
    }
}

/// Unit of work for one runner. Called concurrently from fetch workers.
pub trait ResultSource: Send + Sync {
    fn fetch(&self, name: &str) -> Result<SourcePage, SourceError>;
}
