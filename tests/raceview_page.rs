// tests/raceview_page.rs
use race_scrape::config::consts::{COL_DATE, COL_DISTANCE, COL_TIME};
use race_scrape::specs::raceview::{parse_results_page, NO_RESULTS};
use race_scrape::SourceError;

const PAGE: &str = r#"
<html><body>
<table class="layout"><tr><td>
  <TABLE class="resultsTable wide" id="res">
    <tr>
      <td class="resultsTableHeader">אירוע</td>
      <td class="resultsTableHeader">מקצה</td>
      <td class="resultsTableHeader">תוצאה</td>
      <td class="resultsTableHeader">תאריך</td>
    </tr>
    <tr class="resultsTableRow">
      <td><a href="/event/1">Tel&nbsp;Aviv   Night Run</a><span>info</span></td>
      <td>10K</td>
      <td> 48:12 </td>
      <td>15/03/23</td>
      <td>stray cell</td>
    </tr>
    <tr class="resultsTableRow odd">
      <td>Sea &amp; Sand</td>
      <td>5K</td>
      <td>24:01</td>
      <td>02/07/22</td>
    </tr>
    <tr class="resultsTableRow"></tr>
    <tr class="other"><td>ignored</td></tr>
  </TABLE>
</td></tr></table>
</body></html>
"#;

#[test]
fn reads_headers_in_column_order() {
    let page = parse_results_page(PAGE).unwrap();
    assert_eq!(page.headers, ["אירוע", COL_DISTANCE, COL_TIME, COL_DATE]);
}

#[test]
fn reads_rows_keyed_by_header() {
    let page = parse_results_page(PAGE).unwrap();
    assert_eq!(page.results.len(), 2);

    let first = &page.results[0];
    assert_eq!(first.get("אירוע"), Some("Tel Aviv Night Run"));
    assert_eq!(first.distance(), Some("10K"));
    assert_eq!(first.time(), "48:12");
    assert_eq!(first.date(), "15/03/23");
    // cells past the header count are dropped
    assert_eq!(first.len(), 4);

    assert_eq!(page.results[1].get("אירוע"), Some("Sea & Sand"));
}

#[test]
fn missing_table_means_no_results() {
    let err = parse_results_page("<html><body><p>nothing here</p></body></html>").unwrap_err();
    assert!(matches!(err, SourceError::Portal(ref msg) if msg == NO_RESULTS));
}

#[test]
fn table_without_rows_is_an_empty_page() {
    let html = r#"<table class="resultsTable"><tr><td class="resultsTableHeader">מקצה</td></tr></table>"#;
    let page = parse_results_page(html).unwrap();
    assert_eq!(page.headers, [COL_DISTANCE]);
    assert!(page.results.is_empty());
}

#[test]
fn class_match_is_by_token() {
    let html = r#"<table class="resultsTableOld"><tr class="resultsTableRow"><td>x</td></tr></table>"#;
    assert!(parse_results_page(html).is_err());
}

fn two_column_table(rows: &str) -> String {
    format!(
        r#"<table class="resultsTable"><tr><td class="resultsTableHeader">מקצה</td><td class="resultsTableHeader">תוצאה</td></tr>{rows}</table><p>footer</p>"#
    )
}

#[test]
fn table_nested_in_a_cell_keeps_the_row_whole() {
    let html = two_column_table(
        r#"<tr class="resultsTableRow"><td><table><tr><td>10K</td></tr></table></td><td>50:00</td></tr>
           <tr class="resultsTableRow"><td>5K</td><td>24:00</td></tr>"#,
    );
    let page = parse_results_page(&html).unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].distance(), Some("10K"));
    assert_eq!(page.results[0].time(), "50:00");
    assert_eq!(page.results[1].distance(), Some("5K"));
    assert_eq!(page.results[1].time(), "24:00");
}

#[test]
fn rows_and_cells_without_closers() {
    let html = two_column_table(
        r#"<tr class="resultsTableRow"><td>10K</td><td>50:00</td>
           <tr class="resultsTableRow"><td>5K<td>24:00
           "#,
    );
    let page = parse_results_page(&html).unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].time(), "50:00");
    assert_eq!(page.results[1].distance(), Some("5K"));
    assert_eq!(page.results[1].time(), "24:00");
}
