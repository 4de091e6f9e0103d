// src/stats.rs
//! Performance statistics for one runner at one distance.
//!
//! Inputs come from [`group_by_distance`], so they are already ordered fastest
//! first. The "halves" used by `improvement_rate` and the endpoints used by
//! `position_improvement` and `improvement` follow that time order, not race
//! chronology.
//!
//! Unparseable finish times enter the aggregates as `+inf` and propagate per
//! IEEE rules (e.g. a group with one such time has an infinite mean).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::COL_PACE;
use crate::error::AnalysisError;
use crate::group::{group_runner, DistanceGroup};
use crate::record::RunnerResultSet;

/// Raw fields of the fastest race, as the source printed them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FastestRace {
    pub time: String,
    pub time_seconds: f64,
    pub pace: String,
    pub position: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceStats {
    pub distance: String,
    pub total_races: usize,
    pub fastest: FastestRace,
    /// Most frequent pace string; `N/A` when no record carries a pace.
    pub avg_pace: String,
    /// Slowest minus fastest time, in seconds.
    pub improvement: f64,
    pub median_time: f64,
    pub std_dev: f64,
    /// `100 - cv%`. Unbounded below; 100 when the mean time is 0.
    pub consistency_score: f64,
    pub improvement_rate: f64,
    /// Year -> fastest time that year. Undated races are left out.
    pub season_bests: BTreeMap<i32, f64>,
    pub best_position: Option<f64>,
    pub avg_position: Option<f64>,
    /// `None` when either endpoint has a non-numeric position.
    pub position_improvement: Option<f64>,
}

impl PerformanceStats {
    pub fn best_time(&self) -> &str { &self.fastest.time }
    pub fn best_time_seconds(&self) -> f64 { self.fastest.time_seconds }
    pub fn best_pace(&self) -> &str { &self.fastest.pace }
}

pub fn compute_stats(group: &DistanceGroup) -> PerformanceStats {
    let times = group.times();
    let n = times.len();
    let fastest = group.fastest();

    let std_dev = sample_std_dev(&times);
    let mean_time = mean(&times);
    let consistency_score = if n > 1 && mean_time != 0.0 {
        100.0 - (std_dev / mean_time * 100.0)
    } else {
        100.0
    };

    let improvement = if n > 1 {
        group.slowest().time_seconds - fastest.time_seconds
    } else {
        0.0
    };

    let positions: Vec<f64> = group.records().iter().filter_map(|r| r.position).collect();
    let best_position = positions.iter().copied().reduce(f64::min);
    let avg_position = (!positions.is_empty()).then(|| mean(&positions));

    let position_improvement = if n > 1 {
        match (fastest.position, group.slowest().position) {
            (Some(first), Some(last)) => Some(last - first),
            _ => None,
        }
    } else {
        Some(0.0)
    };

    PerformanceStats {
        distance: group.distance().to_string(),
        total_races: n,
        fastest: FastestRace {
            time: fastest.raw.time().to_string(),
            time_seconds: fastest.time_seconds,
            pace: fastest.raw.pace().to_string(),
            position: fastest.raw.position().to_string(),
            date: fastest.raw.date().to_string(),
        },
        avg_pace: most_common_pace(group),
        improvement,
        median_time: median(&times),
        std_dev,
        consistency_score,
        improvement_rate: improvement_rate(&times),
        season_bests: season_bests(group),
        best_position,
        avg_position,
        position_improvement,
    }
}

/// A runner's grouped races and their statistics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunnerAnalysis {
    pub runner: String,
    pub group: DistanceGroup,
    pub stats: PerformanceStats,
}

/// Group `set` at `distance` and compute its statistics.
pub fn analyze(set: &RunnerResultSet, distance: &str) -> Result<RunnerAnalysis, AnalysisError> {
    let group = group_runner(set, distance)?;
    let stats = compute_stats(&group);
    Ok(RunnerAnalysis { runner: set.name.clone(), group, stats })
}

/* ---------------- aggregates ---------------- */

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn median(xs: &[f64]) -> f64 {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample (n - 1) standard deviation; 0 below two values.
fn sample_std_dev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let ss: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

/// Percent by which the second half beats the first half (negative means
/// the second half is slower).
fn improvement_rate(times: &[f64]) -> f64 {
    if times.len() < 2 {
        return 0.0;
    }
    let (first, second) = times.split_at(times.len() / 2);
    let first_mean = mean(first);
    if first_mean == 0.0 {
        return 0.0;
    }
    (first_mean - mean(second)) / first_mean * 100.0
}

fn season_bests(group: &DistanceGroup) -> BTreeMap<i32, f64> {
    let mut bests: BTreeMap<i32, f64> = BTreeMap::new();
    for r in group.records().iter().filter(|r| r.has_year()) {
        bests
            .entry(r.year)
            .and_modify(|best| *best = best.min(r.time_seconds))
            .or_insert(r.time_seconds);
    }
    bests
}

/// Mode of the pace column; ties go to the lexicographically smallest value.
fn most_common_pace(group: &DistanceGroup) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in group.records() {
        if let Some(pace) = r.raw.get(COL_PACE) {
            *counts.entry(pace).or_default() += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (pace, count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((pace, count));
        }
    }
    best.map_or_else(|| "N/A".to_string(), |(pace, _)| pace.to_string())
}
