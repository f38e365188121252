//! Headlines JSON output.
//!
//! For each country with a winning word, the run's headlines are split into
//! those containing the word and those without it, preserving fetch order in
//! each list. The visualization layer shows the matching headlines first.
//!
//! Output shape, keyed by country name:
//!
//! ```json
//! { "Iceland": { "with_word": ["..."], "without_word": ["..."] } }
//! ```

use crate::models::{Article, HeadlinePartition};
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const HEADLINES_FILENAME: &str = "headlines_data.json";

/// Split a country's headlines by whole-word, case-insensitive match on the
/// winning word. Whole-word matching keeps "Reelection" from counting as a
/// hit for "election".
pub fn partition_headlines(
    articles: &[Article],
    word: &str,
) -> Result<HeadlinePartition, Box<dyn Error>> {
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))?;

    let mut partition = HeadlinePartition::default();
    for article in articles {
        if pattern.is_match(&article.title) {
            partition.with_word.push(article.title.clone());
        } else {
            partition.without_word.push(article.title.clone());
        }
    }
    Ok(partition)
}

/// Write the full per-country mapping. `BTreeMap` keeps key order stable
/// across runs.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_headlines(
    partitions: &BTreeMap<String, HeadlinePartition>,
    output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(output_dir).join(HEADLINES_FILENAME);
    let json = serde_json::to_string_pretty(partitions)?;
    fs::write(&path, json).await?;
    info!(path = %path.display(), countries = partitions.len(), "Wrote headlines JSON");
    Ok(path)
}
