//! Wait/poll argument types

use std::time::Duration;

use clap::Args;

use crate::config::PollSettings;
use crate::ops::PollOptions;

/// Interval and timeout for waiting on an operation.
#[derive(Args, Debug, Default, Clone)]
pub struct PollArgs {
    /// Time between status checks (30s, 5m, 2h or seconds) [default: from config, 10s]
    #[arg(long, value_parser = parse_duration)]
    pub interval: Option<Duration>,

    /// Give up waiting after this long; the operation keeps running [default: from config, none]
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl PollArgs {
    /// Merge flags over the configured defaults.
    pub fn options(&self, settings: &PollSettings) -> PollOptions {
        PollOptions::new(
            self.interval.unwrap_or_else(|| settings.interval()),
            self.timeout.or_else(|| settings.timeout()),
        )
    }
}

/// `--wait` plus poll settings for commands that start an operation.
#[derive(Args, Debug, Default, Clone)]
pub struct WaitArgs {
    /// Wait for the started operation to finish
    #[arg(long)]
    pub wait: bool,

    #[command(flatten)]
    pub poll: PollArgs,
}

/// Parse a duration like `30s`, `5m`, `2h` or a bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, multiplier) = if let Some(stripped) = s.strip_suffix('s') {
        (stripped, 1)
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, 60)
    } else if let Some(stripped) = s.strip_suffix('h') {
        (stripped, 3600)
    } else {
        (s, 1)
    };

    let value: u64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration '{}'. Use 30s, 5m, 2h or seconds", s))?;

    if value == 0 {
        return Err("duration must be greater than zero".to_string());
    }

    let secs = value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("duration '{}' is too large", s))?;

    Ok(Duration::from_secs(secs))
}
