//! Application configuration from CLI flags and environment.

use clap::Parser;
use folio_core::constants::DEFAULT_TICK_RATE;

/// folio — terminal portfolio viewer.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct AppConfig {
    /// Path to a JSON content file (defaults to the embedded portfolio).
    #[arg(short, long, env = "FOLIO_CONTENT")]
    pub content: Option<String>,

    /// Engine tick interval (e.g., "50ms", "1s").
    #[arg(long, default_value = "50ms")]
    pub tick_rate: String,

    /// Disable animations: no typing effect, counters jump to target.
    #[arg(long, env = "FOLIO_REDUCED_MOTION")]
    pub reduced_motion: bool,

    /// Validate the content and print a summary without starting the TUI.
    #[arg(long)]
    pub check: bool,

    /// Quiet mode (minimal output with --check).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the tick rate string into a Duration.
    #[must_use]
    pub fn tick_rate_duration(&self) -> std::time::Duration {
        parse_duration(&self.tick_rate).unwrap_or(DEFAULT_TICK_RATE)
    }
}

/// Parse a duration string like "50ms", "2s", "1m".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    }
}
