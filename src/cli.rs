// src/cli.rs
use std::{env, error::Error, fs, io::Write, path::PathBuf, time::Duration};

use crate::{
    config::options::{AppOptions, ExportFormat},
    csv,
    error::ScrapeError,
    format::ClipboardSink,
    progress::Progress,
    scrape,
    specs::ballbyball::BallByBall,
    table::{Column, HighlightTable, SortDirection},
};

#[derive(Clone, Debug, PartialEq)]
pub struct CliArgs {
    /// URL or saved page path
    pub input: String,
    pub options: AppOptions,
    /// Extra sort applied after the default Over ascending
    pub sort: Option<(Column, SortDirection)>,
    pub out: Option<PathBuf>,
    pub raw: bool,
    pub verbose: bool,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(args) => execute(&args),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut options = AppOptions::default();
    let mut input: Option<String> = None;
    let mut sort = None;
    let mut desc = false;
    let mut out = None;
    let mut raw = false;
    let mut verbose = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" | "-f" | "--file" => input = Some(args.next().ok_or("Missing value for --url/--file")?),
            "--no-wickets" => options.filter.wickets = false,
            "--no-fours" => options.filter.fours = false,
            "--no-sixes" => options.filter.sixes = false,
            "--bold" => options.display.bold_names = true,
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                let col = Column::from_name(&v).ok_or_else(|| format!("Unknown column: {}", v))?;
                sort = Some(col);
            }
            "--desc" => desc = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = match v.to_ascii_lowercase().as_str() {
                    "tsv" => ExportFormat::Tsv,
                    "csv" => ExportFormat::Csv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => options.export.include_headers = true,
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                options.fetch.wait.timeout = Duration::from_secs(secs);
            }
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--raw" => raw = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            other if !other.starts_with('-') && input.is_none() => input = Some(s!(other)),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let input = input.ok_or("Specify a match URL (--url) or a saved page (--file)")?;
    options.fetch.url = input.clone();

    let sort = sort.map(|col| (col, if desc { SortDirection::Desc } else { SortDirection::Asc }));

    Ok(Command::Run(CliArgs { input, options, sort, out, raw, verbose }))
}

fn execute(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut source = scrape::source_for(&args.input);
    let mut progress = StderrProgress { verbose: args.verbose };

    let report = match scrape::run(
        &args.input,
        source.as_mut(),
        &BallByBall,
        args.options.fetch.wait,
        &mut progress,
    ) {
        Ok(r) => r,
        // Already reported as a warning; nothing to print.
        Err(e) if e.is_warning() => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let text = if args.raw {
        let mut t = report.raw_lines.join("\n");
        t.push('\n');
        t
    } else {
        let opts = &args.options;
        let mut table = HighlightTable::build(&report.records, opts.filter, opts.display);
        if let Some((col, dir)) = args.sort {
            table.sort_by(col, dir);
        }
        csv::to_export_string(&table, &opts.export)
    };

    if text.is_empty() {
        logd!("CLI: nothing visible to write");
        return Ok(());
    }

    let mut sink = OutputSink { out: args.out.clone() };
    if let Err(e) = sink.write_text(text) {
        // Diagnostic only, same as a failed clipboard write in the GUI.
        loge!("CLI: {}", e);
        eprintln!("{e}");
    }
    Ok(())
}

struct StderrProgress {
    verbose: bool,
}

impl Progress for StderrProgress {
    fn begin(&mut self, url: &str) {
        if self.verbose { eprintln!("Processing URL: {url}"); }
    }
    fn log(&mut self, msg: &str) {
        if self.verbose { eprintln!("{msg}"); }
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("Warning: {msg}");
    }
    fn finish(&mut self, highlights: usize) {
        if self.verbose { eprintln!("Done: {highlights} highlight(s)"); }
    }
}

/// stdout, or a file with `-o`.
struct OutputSink {
    out: Option<PathBuf>,
}

impl ClipboardSink for OutputSink {
    fn write_text(&mut self, text: String) -> Result<(), ScrapeError> {
        let res = match &self.out {
            Some(path) => fs::write(path, text.as_bytes()),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush())
            }
        };
        res.map_err(|e| ScrapeError::ClipboardWriteFailure(e.to_string()))
    }
}
