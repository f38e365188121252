//! Utility functions for date labels, string truncation, rounding, and
//! output-directory validation.

use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Week label for the current run, e.g. `2026-W31`.
///
/// Uses the Sunday-first week number, zero-padded, weeks 00-53; the label is
/// carried verbatim into the CSV `week` column.
pub fn week_label() -> String {
    week_label_for(Local::now().date_naive())
}

pub fn week_label_for(date: NaiveDate) -> String {
    date.format("%Y-W%U").to_string()
}

/// Compact date tag for output filenames, e.g. `20260806`.
pub fn date_tag() -> String {
    date_tag_for(Local::now().date_naive())
}

pub fn date_tag_for(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Round to 2 decimal places for output columns.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte count
/// indicator appended. Used for previews of unparseable response bodies.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_label_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(); // a Sunday
        assert_eq!(week_label_for(date), "2026-W01");

        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(); // before first Sunday
        assert_eq!(week_label_for(date), "2026-W00");
    }

    #[test]
    fn test_date_tag_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(date_tag_for(date), "20260806");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_boundary() {
        // 'é' is two bytes; cutting at byte 1 would split it.
        let result = truncate_for_log("némesis", 1);
        assert!(result.starts_with('n'));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out");
        ensure_writable_dir(path.to_str().unwrap()).await.unwrap();
        assert!(path.is_dir());
    }
}
