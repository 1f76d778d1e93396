// tests/record_codec.rs
use kncb_highlights::highlights::{decode, decode_all, encode_extraction_error, format_stats, EventKind, HighlightRecord};

#[test]
fn wicket_stats_are_spelled_out() {
    let rec = decode("5.2|WICKET|Smith b Jones R24 B18 4s3 6s1");
    assert_eq!(rec.over, "5.2");
    assert_eq!(rec.kind, EventKind::Wicket);
    assert_eq!(rec.details, "Smith b Jones (24 runs, 18 balls, 3x4, 1x6)");
}

#[test]
fn short_lines_get_sentinels() {
    let rec = decode("3.1");
    assert_eq!(rec.over, "3.1");
    assert_eq!(rec.kind, EventKind::Other(String::new()));
    assert_eq!(rec.details, "N/A");

    let rec = decode("7.4|SIX");
    assert_eq!(rec.kind, EventKind::Six);
    assert_eq!(rec.details, "N/A");

    let rec = decode("");
    assert_eq!(rec.over, "N/A");
    assert_eq!(rec.details, "N/A");
}

#[test]
fn pipes_inside_details_survive() {
    let rec = decode("9.1|FOUR|4 runs | cut hard");
    assert_eq!(rec.kind, EventKind::Four);
    assert_eq!(rec.details, "4 runs | cut hard");
}

#[test]
fn unknown_tokens_are_kept_verbatim() {
    let rec = decode("2.2|NOBALL|Overstepped");
    assert_eq!(rec.kind, EventKind::Other("NOBALL".into()));
    assert_eq!(rec.kind.glyph(), "NOBALL");
    assert!(!rec.is_error());
}

#[test]
fn extraction_error_line_becomes_error_record() {
    let raw = encode_extraction_error("selector blew up");
    assert_eq!(raw, "ERROR|EXTRACTION|selector blew up");

    let rec = decode(&raw);
    assert!(rec.is_error());
    assert_eq!(rec.kind, EventKind::Error);
    assert_eq!(rec.details, "selector blew up");
}

#[test]
fn decode_is_stable_after_reencoding() {
    let samples = [
        "5.2|WICKET|Smith b Jones R24 B18 4s3 6s1",
        "12.4|SIX|6 runs Lofted over long-on",
        "3.1",
        "",
        "Unknown|FOUR|4 runs",
        "ERROR|EXTRACTION|boom",
        "1.1|FOUR|a|b|c",
        "5.2|WICKET|Smith b Jones R24 B18 4s3 6s1 (prev R1 B2 4s0 6s0)",
    ];
    for s in samples {
        let once = decode(s);
        let twice = decode(&once.encode());
        assert_eq!(twice, once, "unstable for {s:?}");
    }
}

#[test]
fn glyphs_for_known_kinds() {
    assert_eq!(EventKind::Wicket.glyph(), "🔴");
    assert_eq!(EventKind::Six.glyph(), "6️⃣");
    assert_eq!(EventKind::Four.glyph(), "4️⃣");
}

#[test]
fn every_stats_run_is_rewritten_once() {
    let out = format_stats("R1 B2 4s0 6s0 then R3 B4 4s1 6s0");
    assert_eq!(out, "(1 runs, 2 balls, 0x4, 0x6) then (3 runs, 4 balls, 1x4, 0x6)");
    assert_eq!(format_stats(&out), out);
    assert_eq!(format_stats("no stats here"), "no stats here");
}

#[test]
fn decode_all_keeps_order_and_display_matches_encode() {
    let recs = decode_all(&["1.1|FOUR|x", "0.3|SIX|y"]);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].over, "1.1");
    assert_eq!(recs[1].to_string(), "0.3|SIX|y");

    let rec = HighlightRecord::new("4.4", EventKind::Wicket, "Out");
    assert_eq!(rec.encode(), "4.4|WICKET|Out");
}
