// benches/highlights.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use kncb_highlights::{
    config::options::{DisplayOptions, FilterOptions, WaitPolicy},
    highlights::{decode_all, sort_highlights_by_over},
    progress::NullProgress,
    scrape::{self, FilePage},
    specs::{ballbyball::BallByBall, Extractor},
    table::{Column, HighlightTable, SortDirection},
};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ballbyball.html"))
        .expect("read tests/fixtures/ballbyball.html")
}

/// A full innings worth of raw lines, deliberately out of order.
fn synthetic_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let over = format!("{}.{}", (i * 7) % 50, i % 6 + 1);
            match i % 3 {
                0 => format!("{over}|WICKET|Batter {i} b Bowler R{} B{} 4s1 6s0", i % 40, i % 30 + 1),
                1 => format!("{over}|SIX|6 runs Lofted {i}"),
                _ => format!("{over}|FOUR|4 runs Driven {i}"),
            }
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();
    c.bench_function("extract_fixture", |b| {
        b.iter(|| {
            let lines = BallByBall.extract(black_box(&doc));
            black_box(lines.len())
        })
    });
}

fn bench_decode_sort(c: &mut Criterion) {
    let raw = synthetic_lines(600);

    c.bench_function("decode_sort_600", |b| {
        b.iter(|| {
            let recs = sort_highlights_by_over(decode_all(black_box(&raw)));
            black_box(recs.len())
        })
    });

    let recs = sort_highlights_by_over(decode_all(&raw));
    c.bench_function("table_build_resort_600", |b| {
        b.iter(|| {
            let mut t = HighlightTable::build(black_box(&recs), FilterOptions::default(), DisplayOptions { bold_names: true });
            t.sort_by(Column::Over, SortDirection::Desc);
            t.sort_by(Column::Details, SortDirection::Asc);
            black_box(t.copy_text().map(|s| s.len()))
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ballbyball.html");
    let wait = WaitPolicy::default();

    c.bench_function("pipeline_saved_page", |b| {
        b.iter(|| {
            let mut page = FilePage::new();
            let report = scrape::run(black_box(path), &mut page, &BallByBall, wait, &mut NullProgress)
                .expect("fixture scrape");
            black_box(report.records.len())
        })
    });
}

criterion_group!(benches, bench_extract, bench_decode_sort, bench_pipeline);
criterion_main!(benches);
