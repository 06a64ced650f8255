//! Reusable formatting utilities for CLI output

use std::time::Duration;

/// Format an elapsed duration to a human-readable string.
///
/// # Example output
/// - `2h 15m 30s` (hours, minutes, seconds)
/// - `5m 10s` (minutes, seconds)
/// - `45s` (seconds only)
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_hours() {
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "1h 1m 1s");
        assert_eq!(format_elapsed(Duration::from_secs(7200)), "2h 0m 0s");
    }

    #[test]
    fn test_format_elapsed_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(45)), "45s");
        assert_eq!(format_elapsed(Duration::from_millis(900)), "0s");
    }
}
