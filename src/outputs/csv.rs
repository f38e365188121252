//! CSV output: one row per country, sorted by descending prevalence score.
//!
//! Column order is fixed by [`PrevalenceResult`]'s field order:
//! `country_name, week, prevalent_word, word_frequency, word_percentage,
//! prevalence_score, num_articles, timeframe`. Downstream converters rely on
//! these exact headers.

use crate::models::PrevalenceResult;
use crate::utils::date_tag;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Output path for a run: `prevalent_words_<source>_<YYYYMMDD>.csv`.
pub fn csv_path(output_dir: &str, source_tag: &str, tag: &str) -> PathBuf {
    Path::new(output_dir).join(format!("prevalent_words_{source_tag}_{tag}.csv"))
}

/// Write the sorted dataset. The caller sorts; rows are written as given.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub fn write_results(
    results: &[PrevalenceResult],
    output_dir: &str,
    source_tag: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = csv_path(output_dir, source_tag, &date_tag());

    let mut writer = csv::Writer::from_path(&path)?;
    for row in results {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = results.len(), "Wrote prevalent words CSV");
    Ok(path)
}
