// tests/extract_markup.rs
use std::fs;

use kncb_highlights::specs::{ballbyball::BallByBall, Extractor};

fn fixture() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ballbyball.html");
    fs::read_to_string(path).expect("read ballbyball fixture")
}

#[test]
fn reads_wickets_sixes_and_fours_from_saved_page() {
    let lines = BallByBall.extract(&fixture());
    assert_eq!(
        lines,
        [
            "18.1|WICKET|Van der Merwe c Brown b Jones R0 B2 4s0 6s0",
            "5.2|WICKET|J Smith b Jones R24 B18 4s3 6s1",
            "12.4|SIX|6 runs Lofted over long-on",
            "3.1|FOUR|4 runs Driven through cover",
            "Unknown|FOUR|4 runs Edged past slip",
        ]
    );
}

#[test]
fn ordinary_balls_are_ignored() {
    let lines = BallByBall.extract(&fixture());
    assert!(lines.iter().all(|l| !l.contains("Pushed to mid-wicket")));
}

#[test]
fn page_without_highlights_yields_nothing() {
    let lines = BallByBall.extract("<html><body><p>Match not started</p></body></html>");
    assert!(lines.is_empty());
    assert!(BallByBall.extract("").is_empty());
}

#[test]
fn wicket_with_missing_pieces_leaves_no_double_spaces() {
    let markup = r#"
        <div class="BallDetailViewStyle__WicketInformationContainer-gx5g4w-8">
          <span class="BallDetailViewStyle__PersonName-gx5g4w-9">  A   Khan </span>
        </div>"#;
    let lines = BallByBall.extract(markup);
    assert_eq!(lines, ["Unknown|WICKET|A Khan"]);
}
