//! Data models for collected articles and per-country analysis results.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`Article`]: one fetched headline record, held only for the run
//! - [`Timeframe`]: the lookback window a fetch pass uses
//! - [`PrevalenceResult`]: one country's winning word with its statistics
//! - [`HeadlinePartition`]: a country's headlines split by winning-word match

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single news article as returned by the upstream source.
///
/// The DOC API's article-list mode returns headlines only, so `text` (the
/// content fed to the tokenizer) is the headline itself.
#[derive(Debug, Clone)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// The text analyzed for word frequencies.
    pub text: String,
    /// The publishing domain (e.g. `bbc.co.uk`).
    pub source: String,
    /// The date the source first saw the article, as reported upstream.
    pub published_at: String,
    /// The article URL.
    pub url: String,
}

/// The lookback window used by a fetch pass.
///
/// Countries with no articles in the last 24 hours are retried at 7 days,
/// then 30 days. [`Timeframe::LADDER`] fixes that order; there is no fourth
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Hours24,
    Days7,
    Days30,
}

impl Timeframe {
    /// Fallback order, smallest window first.
    pub const LADDER: [Timeframe; 3] = [Timeframe::Hours24, Timeframe::Days7, Timeframe::Days30];

    /// The value sent as the API's `timespan` parameter, also used verbatim
    /// as the `timeframe` column in the CSV output.
    pub fn as_query(&self) -> &'static str {
        match self {
            Timeframe::Hours24 => "24h",
            Timeframe::Days7 => "7d",
            Timeframe::Days30 => "30d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// One country's most locally distinctive word and the statistics behind it.
///
/// Field order matches the CSV column order exactly; rows are serialized
/// straight from this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrevalenceResult {
    /// Country display name.
    pub country_name: String,
    /// Week label for the run, `YYYY-Www` with a Sunday-first week number.
    pub week: String,
    /// The winning word.
    pub prevalent_word: String,
    /// Occurrences of the word in the country's articles.
    pub word_frequency: u32,
    /// Occurrences per article, as a percentage, rounded to 2 decimals.
    pub word_percentage: f64,
    /// Local prevalence weighted by global rarity, rounded to 2 decimals.
    pub prevalence_score: f64,
    /// Number of articles collected for the country.
    pub num_articles: usize,
    /// Window the articles came from: `24h`, `7d`, or `30d`.
    pub timeframe: String,
}

/// A country's headlines split by whether they contain the winning word.
///
/// Matching is case-insensitive and whole-word: "Reelection campaign begins"
/// does not count as containing "election".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadlinePartition {
    pub with_word: Vec<String>,
    pub without_word: Vec<String>,
}
