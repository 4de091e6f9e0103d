// tests/grouping.rs
use race_scrape::config::consts::{COL_DATE, COL_DISTANCE, COL_TIME};
use race_scrape::group::distances;
use race_scrape::{group_by_distance, AnalysisError, RawResultRecord, RunnerResultSet};

fn rec(dist: &str, time: &str) -> RawResultRecord {
    [(COL_DISTANCE, dist), (COL_TIME, time)].into_iter().collect()
}

fn dated(dist: &str, time: &str, date: &str) -> RawResultRecord {
    [(COL_DISTANCE, dist), (COL_TIME, time), (COL_DATE, date)].into_iter().collect()
}

#[test]
fn keeps_selected_distance_fastest_first() {
    let records = vec![rec("10K", "50:00"), rec("5K", "25:00"), rec("10K", "48:00")];
    let group = group_by_distance(&records, "10K").unwrap();

    assert_eq!(group.len(), 2);
    assert_eq!(group.distance(), "10K");
    let times: Vec<&str> = group.records().iter().map(|r| r.raw.time()).collect();
    assert_eq!(times, ["48:00", "50:00"]);
    assert_eq!(group.fastest().source_index, 2);
    assert!(!group.is_empty());
}

#[test]
fn equal_times_keep_source_order() {
    let records = vec![
        dated("5K", "25:00", "01/01/22"),
        rec("5K", "24:00"),
        dated("5K", "25:00", "01/01/23"),
    ];

    let group = group_by_distance(&records, "5K").unwrap();
    let order: Vec<usize> = group.records().iter().map(|r| r.source_index).collect();
    assert_eq!(order, [1, 0, 2]);
    assert_eq!(group.records()[1].year, 2022);
    assert_eq!(group.records()[2].year, 2023);
}

#[test]
fn unparseable_times_sort_last_but_stay() {
    let records = vec![rec("10K", "DNF"), rec("10K", "52:10"), rec("10K", "49:59")];
    let group = group_by_distance(&records, "10K").unwrap();

    assert_eq!(group.len(), 3);
    assert_eq!(group.slowest().raw.time(), "DNF");
    assert!(group.slowest().time_seconds.is_infinite());
}

#[test]
fn distance_match_is_exact() {
    let records = vec![rec("10K", "50:00"), rec("10k", "49:00"), rec(" 10K", "48:00")];
    let group = group_by_distance(&records, "10K").unwrap();
    assert_eq!(group.len(), 1);
}

#[test]
fn missing_distance_is_an_explicit_error() {
    let records = vec![rec("10K", "50:00")];
    let err = group_by_distance(&records, "Marathon").unwrap_err();
    assert_eq!(err, AnalysisError::NoDataForDistance { distance: "Marathon".into() });
}

#[test]
fn zero_times_are_data_not_absence() {
    let records = vec![rec("Fun run", "0")];
    let group = group_by_distance(&records, "Fun run").unwrap();
    assert_eq!(group.fastest().time_seconds, 0.0);
}

#[test]
fn distances_are_distinct_and_sorted() {
    let no_dist: RawResultRecord = [(COL_TIME, "30:00")].into_iter().collect();
    let set = RunnerResultSet::new(
        "Dana",
        vec![],
        vec![rec("5K", "25:00"), rec("10K", "50:00"), no_dist, rec("5K", "24:00"), rec("21.1K", "1:50:00")],
    );
    assert_eq!(distances(&set), ["10K", "21.1K", "5K"]);
}
