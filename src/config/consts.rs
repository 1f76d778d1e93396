// src/config/consts.rs

// Site
pub const MATCH_CENTRE_PREFIX: &str = "https://matchcentre.kncb.nl/match";
pub const SCORECARD_TOKEN: &str = "scorecard";
pub const BALL_BY_BALL_TOKEN: &str = "ballbyball";

// Raw highlight encoding
pub const FIELD_SEP: char = '|';
pub const MISSING_FIELD: &str = "N/A";
pub const UNKNOWN_OVER: &str = "Unknown";
pub const ERROR_OVER: &str = "ERROR";
pub const ERROR_KIND: &str = "EXTRACTION";

// Page load
pub const LOAD_TIMEOUT_MS: u64 = 15_000;
pub const FALLBACK_DELAY_MS: u64 = 5_000; // fixed wait when there's no load signal
pub const USER_AGENT: &str = concat!("kncb_highlights/", env!("CARGO_PKG_VERSION"));

// Local diagnostics
pub const LOG_FILE: &str = ".store/debug.log";

// Copy
pub const COPY_SEP: char = '\t';
pub const WICKET_PREFIX: &str = "Wicket! ";
