//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! File-path options can also be provided via environment variables.

use clap::Parser;

/// Command-line arguments for the prevalent-words pipeline.
///
/// # Examples
///
/// ```sh
/// # Default run: all countries, 24h/7d/30d fallback, output under ./out
/// worlds_mood
///
/// # Custom output directory and a richer stop-word corpus
/// worlds_mood -o ./data --stopwords ./english_stopwords.txt
///
/// # Polite mode for a rate-limited source: one request every 500ms
/// worlds_mood --request-delay-ms 500
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the CSV and headlines JSON
    #[arg(short, long, default_value = "out")]
    pub output_dir: String,

    /// Maximum articles to request per country per pass
    #[arg(long, default_value_t = 30)]
    pub max_records: usize,

    /// Maximum concurrent in-flight requests per pass
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fixed delay between requests in milliseconds; non-zero disables the
    /// request pool and runs each pass sequentially (for rate-limited sources)
    #[arg(long, default_value_t = 0)]
    pub request_delay_ms: u64,

    /// Path to a word-per-line stop-word list (defaults to the built-in list)
    #[arg(long, env = "WORLDS_MOOD_STOPWORDS")]
    pub stopwords: Option<String>,

    /// Path to a source-word blacklist JSON file ({"source_words": [...]})
    #[arg(long, env = "WORLDS_MOOD_BLACKLIST")]
    pub blacklist: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["worlds_mood"]);

        assert_eq!(cli.output_dir, "out");
        assert_eq!(cli.max_records, 30);
        assert_eq!(cli.concurrency, 10);
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.request_delay_ms, 0);
        assert!(cli.stopwords.is_none());
        assert!(cli.blacklist.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "worlds_mood",
            "--output-dir",
            "./data",
            "--max-records",
            "50",
            "--request-delay-ms",
            "500",
            "--stopwords",
            "./stopwords.txt",
        ]);

        assert_eq!(cli.output_dir, "./data");
        assert_eq!(cli.max_records, 50);
        assert_eq!(cli.request_delay_ms, 500);
        assert_eq!(cli.stopwords.as_deref(), Some("./stopwords.txt"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["worlds_mood", "-o", "/tmp/mood"]);
        assert_eq!(cli.output_dir, "/tmp/mood");
    }
}
