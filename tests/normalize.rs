// tests/normalize.rs
use chrono::NaiveDate;
use race_scrape::normalize::date::{parse_date_with_format, DATE_FORMATS};
use race_scrape::normalize::{format_time, parse_date, parse_position, parse_time, UNDETERMINED_YEAR};

#[test]
fn parses_colon_forms() {
    assert_eq!(parse_time("1:02:03"), 3723.0);
    assert_eq!(parse_time("02:03"), 123.0);
    assert_eq!(parse_time("0:00:59"), 59.0);
}

#[test]
fn parses_fractional_colon_forms() {
    assert_eq!(parse_time("01:02.5"), 62.5);
    assert_eq!(parse_time("1:00:00.25"), 3600.25);
}

#[test]
fn parses_plain_seconds() {
    assert_eq!(parse_time("95.4"), 95.4);
    assert_eq!(parse_time(" 42 "), 42.0);
}

#[test]
fn garbage_is_infinite_and_sorts_last() {
    for bad in ["not-a-time", "", "1:2:3:4", "12:xx", "1:", "ab:cd.ef", "nan", "inf"] {
        let t = parse_time(bad);
        assert!(t.is_infinite() && t > 0.0, "{bad:?} gave {t}");
        assert!(t > 1e12);
    }
}

#[test]
fn hms_round_trips_through_formatter() {
    for h in 0..3 {
        for m in [0, 1, 9, 30, 59] {
            for s in [0, 5, 59] {
                let text = format!("{h}:{m:02}:{s:02}");
                let secs = parse_time(&text);
                assert_eq!(parse_time(&format_time(secs)), secs, "{text}");
            }
        }
    }
}

#[test]
fn formats_times_for_display() {
    assert_eq!(format_time(3723.0), "1:02:03");
    assert_eq!(format_time(123.0), "02:03");
    assert_eq!(format_time(62.5), "01:02.50");
    assert_eq!(format_time(f64::INFINITY), "N/A");
    assert_eq!(parse_time(&format_time(62.5)), 62.5);
}

#[test]
fn primary_date_format_matches_first() {
    let (date, year) = parse_date("15/03/23");
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15));
    assert_eq!(year, 2023);
    assert_eq!(parse_date_with_format("15/03/23").map(|(_, i)| i), Some(0));
}

#[test]
fn hyphenated_day_month_year_uses_fourth_format() {
    let (date, year) = parse_date("15-03-23");
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15));
    assert_eq!(year, 2023);
    let (_, idx) = parse_date_with_format("15-03-23").unwrap();
    assert_eq!(idx, 3);
    assert_eq!(DATE_FORMATS[idx], "%d-%m-%y");
}

#[test]
fn fallbacks_are_tried_in_order() {
    // day > 12 rules out DD/MM, so MM/DD wins
    assert_eq!(parse_date_with_format("03/15/23").map(|(_, i)| i), Some(1));
    assert_eq!(parse_date_with_format("2023/03/15").map(|(_, i)| i), Some(2));
    assert_eq!(parse_date_with_format("03-15-23").map(|(_, i)| i), Some(4));
    // ambiguous slashes resolve day-first
    assert_eq!(parse_date("04/05/22").0, NaiveDate::from_ymd_opt(2022, 5, 4));
}

#[test]
fn unparseable_date_has_no_year() {
    for bad in ["", "yesterday", "32/13/99", "2023-03-15T00:00"] {
        assert_eq!(parse_date(bad), (None, UNDETERMINED_YEAR), "{bad:?}");
    }
}

#[test]
fn positions_only_numeric() {
    assert_eq!(parse_position("12"), Some(12.0));
    assert_eq!(parse_position(" 7 "), Some(7.0));
    assert_eq!(parse_position("DNF"), None);
    assert_eq!(parse_position(""), None);
}
