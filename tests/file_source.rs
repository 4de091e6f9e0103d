// tests/file_source.rs
use race_scrape::config::consts::{COL_DISTANCE, COL_TIME};
use race_scrape::config::options::FetchOptions;
use race_scrape::source::{FileSource, ResultSource, SourceResponse};
use race_scrape::{fetch_all, FetchError, SourceError};

const RECORDED: &str = r#"{
  "Dana": {
    "headers": ["מקצה", "תוצאה"],
    "results": [
      {"מקצה": "10K", "תוצאה": "50:00"},
      {"מקצה": "5K",  "תוצאה": "24:30"}
    ]
  },
  "Noa": {"error": "No results found"},
  "Tal": {"results": []}
}"#;

#[test]
fn lists_recorded_names() {
    let source = FileSource::from_json(RECORDED).unwrap();
    assert_eq!(source.names(), ["Dana", "Noa", "Tal"]);
}

#[test]
fn replays_pages_and_errors() {
    let source = FileSource::from_json(RECORDED).unwrap();

    let page = source.fetch("Dana").unwrap();
    assert_eq!(page.headers, [COL_DISTANCE, COL_TIME]);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].time(), "24:30");

    assert!(matches!(source.fetch("Noa"), Err(SourceError::Portal(m)) if m == "No results found"));
    assert!(matches!(source.fetch("Ghost"), Err(SourceError::UnknownRunner(n)) if n == "Ghost"));
}

#[test]
fn error_key_wins_over_results() {
    let resp: SourceResponse = serde_json::from_str(r#"{"error": "busy", "results": []}"#).unwrap();
    assert!(resp.into_result().is_err());
}

#[test]
fn headers_are_optional() {
    let resp: SourceResponse = serde_json::from_str(r#"{"results": [{"מקצה": "10K"}]}"#).unwrap();
    let page = resp.into_result().unwrap();
    assert!(page.headers.is_empty());
    assert_eq!(page.results[0].distance(), Some("10K"));
}

#[test]
fn malformed_document_is_rejected() {
    assert!(matches!(FileSource::from_json("[1, 2"), Err(SourceError::Json(_))));
}

#[test]
fn drives_a_full_batch() {
    let source = FileSource::from_json(RECORDED).unwrap();
    let names: Vec<String> = ["Dana", "Noa", "Tal", "Ghost"].map(String::from).to_vec();
    let report = fetch_all(&source, &names, &FetchOptions::default(), None);

    assert_eq!(report.names(), ["Dana"]);
    assert_eq!(report.results["Dana"].distances(), ["10K", "5K"]);
    assert!(matches!(report.failure("Tal"), Some(FetchError::Empty)));
    assert!(report.failure("Noa").is_some());
    assert!(report.failure("Ghost").is_some());
}
