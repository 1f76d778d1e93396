// src/progress.rs
/// Lightweight progress reporting for one scrape cycle.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the final (possibly rewritten) URL is known.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something went sideways but the scrape carries on (or stops gracefully).
    fn warn(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _highlights: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every line in memory. Handy for tests and the CLI's `--verbose`.
#[derive(Default, Debug)]
pub struct MemoryProgress {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

impl Progress for MemoryProgress {
    fn begin(&mut self, url: &str) {
        self.lines.push(format!("Processing URL: {url}"));
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn warn(&mut self, msg: &str) {
        self.warnings.push(s!(msg));
        self.lines.push(format!("Warning: {msg}"));
    }
    fn finish(&mut self, highlights: usize) {
        self.lines.push(format!("Done: {highlights} highlight(s)"));
    }
}
