// tests/cli_args.rs
use std::time::Duration;

use kncb_highlights::cli::{parse_args, Command};
use kncb_highlights::config::options::ExportFormat;
use kncb_highlights::table::{Column, SortDirection};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_show_everything_as_tsv() {
    let Command::Run(a) = parse_args(args(&["--url", "https://matchcentre.kncb.nl/match/1/scorecard"])).unwrap() else {
        panic!("expected run");
    };
    assert_eq!(a.input, "https://matchcentre.kncb.nl/match/1/scorecard");
    assert_eq!(a.options.fetch.url, a.input);
    assert!(a.options.filter.wickets && a.options.filter.fours && a.options.filter.sixes);
    assert!(!a.options.display.bold_names);
    assert_eq!(a.options.export.format, ExportFormat::Tsv);
    assert_eq!(a.sort, None);
    assert!(a.out.is_none());
}

#[test]
fn flags_map_onto_options() {
    let parsed = parse_args(args(&[
        "--file", "page.html", "--no-fours", "--no-sixes", "--bold", "--sort", "details", "--desc",
        "--format", "CSV", "--include-headers", "--timeout", "3", "-o", "out.csv", "--raw", "-v",
    ]))
    .unwrap();
    let Command::Run(a) = parsed else { panic!("expected run") };

    assert_eq!(a.input, "page.html");
    assert!(a.options.filter.wickets);
    assert!(!a.options.filter.fours);
    assert!(!a.options.filter.sixes);
    assert!(a.options.display.bold_names);
    assert_eq!(a.sort, Some((Column::Details, SortDirection::Desc)));
    assert_eq!(a.options.export.format, ExportFormat::Csv);
    assert!(a.options.export.include_headers);
    assert_eq!(a.options.fetch.wait.timeout, Duration::from_secs(3));
    assert_eq!(a.out.as_deref(), Some(std::path::Path::new("out.csv")));
    assert!(a.raw && a.verbose);
}

#[test]
fn bare_argument_is_the_input() {
    let Command::Run(a) = parse_args(args(&["page.html"])).unwrap() else { panic!("expected run") };
    assert_eq!(a.input, "page.html");
}

#[test]
fn help_and_bad_input() {
    assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
    assert!(parse_args(args(&[])).is_err());
    assert!(parse_args(args(&["--url"])).is_err());
    assert!(parse_args(args(&["x", "--sort", "bogus"])).is_err());
    assert!(parse_args(args(&["x", "--format", "xml"])).is_err());
    assert!(parse_args(args(&["x", "--wat"])).is_err());
}
