// src/error.rs
//! Error taxonomy.
//!
//! Field-level parse failures are not errors: the normalizers return
//! sentinels (`f64::INFINITY`, year `0`, `None`) and the record stays in play.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure inside a Result Source adapter for one runner.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("portal answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not read source data: {0}")]
    Io(#[from] io::Error),

    #[error("malformed source data: {0}")]
    Json(#[from] serde_json::Error),

    /// The portal (or a recorded response) reported an error for this name.
    #[error("{0}")]
    Portal(String),

    #[error("no entry for runner {0:?}")]
    UnknownRunner(String),
}

/// Why one runner is missing from a fetch report.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not fetch results: {0}")]
    Source(#[from] SourceError),

    #[error("no results found")]
    Empty,

    #[error("source adapter panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no results found for distance {distance:?}")]
    NoDataForDistance { distance: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read names file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("names file {} has no runner names", .0.display())]
    NoNames(PathBuf),
}
