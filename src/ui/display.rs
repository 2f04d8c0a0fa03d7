//! Render-time formatting for paths and timestamps.
//!
//! These transforms are purely cosmetic; the stored `path` and
//! `last_used` values are never modified.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Recognized home-directory prefixes: macOS, Linux, and Windows drive paths.
static HOME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(/Users/[^/]+|/home/[^/]+|[A-Za-z]:\\Users\\[^\\]+)").unwrap()
});

/// Abbreviate a home-directory prefix to `~` for display.
///
/// Paths not matching any recognized home pattern are returned unchanged.
pub fn display_path(path: &str) -> String {
    HOME_PREFIX.replace(path, "~").into_owned()
}

/// Format a last-used timestamp relative to now.
pub fn format_relative_time(last_used_ms: i64) -> String {
    format_relative_to(last_used_ms, Utc::now().timestamp_millis())
}

/// Format a timestamp relative to an explicit reference point.
///
/// Thresholds are exclusive upper bounds in milliseconds: under a minute
/// is "just now", under an hour minutes, under a day hours, under a week
/// days, anything older a plain date. Future timestamps read "just now".
pub fn format_relative_to(last_used_ms: i64, now_ms: i64) -> String {
    let diff = now_ms - last_used_ms;

    if diff < MINUTE_MS {
        return "just now".to_string();
    }
    if diff < HOUR_MS {
        return format!("{}m ago", diff / MINUTE_MS);
    }
    if diff < DAY_MS {
        return format!("{}h ago", diff / HOUR_MS);
    }
    if diff < WEEK_MS {
        return format!("{}d ago", diff / DAY_MS);
    }

    DateTime::<Utc>::from_timestamp_millis(last_used_ms)
        .map(|dt| dt.format("%x").to_string())
        .unwrap_or_else(|| "long ago".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_abbreviates_macos_home() {
        assert_eq!(
            display_path("/Users/alice/projects/demo"),
            "~/projects/demo"
        );
    }

    #[test]
    fn display_path_abbreviates_linux_home() {
        assert_eq!(display_path("/home/bob/src/cairn"), "~/src/cairn");
    }

    #[test]
    fn display_path_abbreviates_windows_home() {
        assert_eq!(display_path(r"C:\Users\carol\dev\app"), r"~\dev\app");
    }

    #[test]
    fn display_path_leaves_other_paths_alone() {
        assert_eq!(display_path("/opt/work/demo"), "/opt/work/demo");
        assert_eq!(display_path("/var/Users/x"), "/var/Users/x");
    }

    #[test]
    fn display_path_bare_home_becomes_tilde() {
        assert_eq!(display_path("/home/bob"), "~");
    }

    #[test]
    fn relative_time_just_now() {
        let now = 1_000_000_000;
        assert_eq!(format_relative_to(now - 30_000, now), "just now");
    }

    #[test]
    fn relative_time_boundary_at_one_minute() {
        let now = 1_000_000_000;
        assert_eq!(format_relative_to(now - 59_999, now), "just now");
        assert_eq!(format_relative_to(now - 60_000, now), "1m ago");
    }

    #[test]
    fn relative_time_minutes() {
        let now = 1_000_000_000;
        assert_eq!(format_relative_to(now - 5 * MINUTE_MS, now), "5m ago");
    }

    #[test]
    fn relative_time_hours() {
        let now = 1_000_000_000_000;
        assert_eq!(format_relative_to(now - 2 * HOUR_MS, now), "2h ago");
    }

    #[test]
    fn relative_time_days() {
        let now = 1_000_000_000_000;
        assert_eq!(format_relative_to(now - 3 * DAY_MS, now), "3d ago");
    }

    #[test]
    fn relative_time_week_or_more_shows_date() {
        // 2026-02-17 minus 10 days lands on 2026-02-07
        let now = 1_771_286_400_000;
        let ts = now - 10 * DAY_MS;
        let expected = DateTime::<Utc>::from_timestamp_millis(ts)
            .unwrap()
            .format("%x")
            .to_string();
        assert_eq!(format_relative_to(ts, now), expected);
    }

    #[test]
    fn relative_time_future_shows_just_now() {
        let now = 1_000_000_000;
        assert_eq!(format_relative_to(now + HOUR_MS, now), "just now");
    }
}
