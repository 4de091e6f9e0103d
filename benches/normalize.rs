// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use race_scrape::config::consts::{COL_DATE, COL_DISTANCE, COL_PACE, COL_POSITION, COL_TIME};
use race_scrape::specs::raceview::parse_results_page;
use race_scrape::{compute_stats, group_by_distance, parse_date, parse_time, RawResultRecord};

const TIMES: [&str; 6] = ["48:12", "1:02:03", "01:02.50", "95.4", "DNF", "1:2:3:4"];
const DATES: [&str; 5] = ["15/03/23", "03/15/23", "2023/03/15", "03-15-23", "garbage"];

/// Synthetic runner history: `n` races over two distances.
fn history(n: usize) -> Vec<RawResultRecord> {
    (0..n)
        .map(|i| {
            let dist = if i % 3 == 0 { "5K" } else { "10K" };
            let time = format!("{}:{:02}", 45 + i % 15, i % 60);
            let date = format!("{:02}/{:02}/{:02}", 1 + i % 28, 1 + i % 12, 15 + i % 10);
            let pos = (1 + i % 200).to_string();
            [
                (COL_DISTANCE, dist.to_string()),
                (COL_TIME, time),
                (COL_PACE, "4:50".to_string()),
                (COL_POSITION, pos),
                (COL_DATE, date),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}

fn results_page(rows: usize) -> String {
    let mut html = String::from(r#"<table class="resultsTable"><tr>"#);
    for h in [COL_DISTANCE, COL_TIME, COL_DATE] {
        html.push_str(&format!(r#"<td class="resultsTableHeader">{h}</td>"#));
    }
    html.push_str("</tr>");
    for i in 0..rows {
        html.push_str(&format!(
            r#"<tr class="resultsTableRow"><td><a href="/e/{i}">10K</a></td><td>{}:{:02}</td><td>01/01/23</td></tr>"#,
            40 + i % 20,
            i % 60
        ));
    }
    html.push_str("</table>");
    html
}

fn bench_parsers(c: &mut Criterion) {
    c.bench_function("parse_time", |b| {
        b.iter(|| TIMES.iter().map(|t| parse_time(black_box(t))).sum::<f64>())
    });

    c.bench_function("parse_date", |b| {
        b.iter(|| DATES.iter().map(|d| parse_date(black_box(d)).1).sum::<i32>())
    });
}

fn bench_analysis(c: &mut Criterion) {
    let records = history(500);

    c.bench_function("group_and_stats_500", |b| {
        b.iter(|| {
            let group = group_by_distance(black_box(&records), "10K").unwrap();
            black_box(compute_stats(&group).consistency_score)
        })
    });

    let page = results_page(300);
    c.bench_function("parse_results_page_300", |b| {
        b.iter(|| parse_results_page(black_box(&page)).map(|p| p.results.len()))
    });
}

criterion_group!(benches, bench_parsers, bench_analysis);
criterion_main!(benches);
