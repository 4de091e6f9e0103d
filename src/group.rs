// src/group.rs
use serde::Serialize;

use crate::error::AnalysisError;
use crate::record::{NormalizedResult, RawResultRecord, RunnerResultSet};

/// One runner's races at one distance, fastest first.
///
/// Never empty: [`group_by_distance`] reports
/// [`AnalysisError::NoDataForDistance`] instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistanceGroup {
    distance: String,
    records: Vec<NormalizedResult>,
}

impl DistanceGroup {
    pub fn distance(&self) -> &str { &self.distance }
    pub fn records(&self) -> &[NormalizedResult] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }

    /// Never true for a group built by [`group_by_distance`].
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn fastest(&self) -> &NormalizedResult { &self.records[0] }
    pub fn slowest(&self) -> &NormalizedResult { &self.records[self.records.len() - 1] }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time_seconds).collect()
    }
}

/// Keep the records whose distance label equals `distance`, normalize them,
/// and order by finish time. Equal times keep source order.
pub fn group_by_distance(
    records: &[RawResultRecord],
    distance: &str,
) -> Result<DistanceGroup, AnalysisError> {
    let mut grouped: Vec<NormalizedResult> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.distance() == Some(distance))
        .map(|(i, r)| NormalizedResult::from_raw(r.clone(), i))
        .collect();

    if grouped.is_empty() {
        return Err(AnalysisError::NoDataForDistance { distance: distance.to_string() });
    }

    // sort_by is stable
    grouped.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));

    Ok(DistanceGroup { distance: distance.to_string(), records: grouped })
}

/// [`group_by_distance`] over a runner's full result set.
pub fn group_runner(set: &RunnerResultSet, distance: &str) -> Result<DistanceGroup, AnalysisError> {
    group_by_distance(&set.records, distance)
}

/// Distance labels a caller may select for a runner, ascending.
pub fn distances(set: &RunnerResultSet) -> Vec<String> {
    set.distances()
}
