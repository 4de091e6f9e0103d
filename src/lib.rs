// src/lib.rs
//! Race results ingestion and analysis.
//!
//! Pipeline: runner names → [`scrape::fetch_all`] over a
//! [`source::ResultSource`] → per-runner [`record::RunnerResultSet`] →
//! [`group::group_by_distance`] → [`stats::compute_stats`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod group;
pub mod input;
pub mod log;
pub mod normalize;
pub mod progress;
pub mod record;
pub mod scrape;
pub mod source;
pub mod specs;
pub mod stats;

pub mod csv;

pub use error::{AnalysisError, FetchError, SourceError};
pub use group::{distances, group_by_distance, DistanceGroup};
pub use normalize::{parse_date, parse_time};
pub use record::{NormalizedResult, RawResultRecord, RunnerResultSet};
pub use scrape::{fetch_all, FetchReport};
pub use stats::{analyze, compute_stats, PerformanceStats};
