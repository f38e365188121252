//! # World's Mood
//!
//! A news analysis pipeline that fetches recent headlines for every country
//! from the GDELT DOC API, finds the single most locally distinctive word in
//! each country's news, and writes the results for a static globe
//! visualization.
//!
//! ## Features
//!
//! - Concurrent per-country headline collection with a bounded request pool
//! - Three-pass time-window fallback (24h, then 7d, then 30d) for countries
//!   with sparse coverage
//! - Stop-word filtering with a pluggable word list, plus an optional
//!   news-source word blacklist
//! - Prevalence scoring: local word frequency weighted by global rarity
//! - Outputs a score-sorted CSV and a per-country headline partition JSON
//!
//! ## Usage
//!
//! ```sh
//! worlds_mood -o ./out
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Collection**: fetch headlines per country, falling back to wider
//!    time windows where the last 24 hours are empty
//! 2. **Counting**: build per-country and global word-frequency tables
//! 3. **Scoring**: rank each country's words and pick a winner
//! 4. **Output**: write the CSV dataset and the headlines JSON

use clap::Parser;
use itertools::Itertools;
use reqwest::Client;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod countries;
mod errors;
mod fetch;
mod models;
mod outputs;
mod sources;
mod utils;

use analysis::frequency::word_frequency;
use analysis::scoring::top_word;
use analysis::tokenizer::{BuiltinLexicon, Lexicon, Tokenizer, WordlistLexicon, load_blacklist};
use cli::Cli;
use countries::COUNTRIES;
use errors::PipelineError;
use fetch::{FetchOptions, collect_articles};
use models::{HeadlinePartition, PrevalenceResult, Timeframe};
use outputs::headlines::partition_headlines;
use sources::gdelt;
use utils::{ensure_writable_dir, round2, week_label};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("worlds_mood starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output_dir, ?args.max_records, ?args.concurrency, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before spending time on
    // the network.
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Token filter setup ----
    let lexicon: Box<dyn Lexicon + Send + Sync> = match args.stopwords.as_deref() {
        Some(path) => {
            info!(path, "Loading stop-word list");
            Box::new(WordlistLexicon::load(path)?)
        }
        None => {
            info!("Using built-in stop-word list");
            Box::new(BuiltinLexicon)
        }
    };
    let blacklist = match args.blacklist.as_deref() {
        Some(path) => {
            let words = load_blacklist(path)?;
            info!(path, words = words.len(), "Loaded source-word blacklist");
            words
        }
        None => HashSet::new(),
    };
    let tokenizer = Tokenizer::new(lexicon, blacklist);

    // ---- Collect articles (24h -> 7d -> 30d fallback) ----
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let opts = FetchOptions {
        max_records: args.max_records,
        concurrency: args.concurrency,
        request_delay: Duration::from_millis(args.request_delay_ms),
    };

    info!(
        countries = COUNTRIES.len(),
        max_records = opts.max_records,
        "Starting article collection"
    );
    let collection = match collect_articles(&client, COUNTRIES, &opts).await {
        Ok(collection) => collection,
        Err(e) => {
            error!(error = %e, "Aborting run");
            return Err(Box::new(e));
        }
    };
    collection.log_summary();

    // ---- Global frequency table ----
    let all_texts: Vec<&str> = collection
        .articles
        .values()
        .flatten()
        .map(|article| article.text.as_str())
        .collect();
    let global_freq = word_frequency(&tokenizer, all_texts);
    info!(unique_words = global_freq.len(), "Computed global word frequencies");

    // ---- Per-country prevalent word ----
    let week = week_label();
    let mut results: Vec<PrevalenceResult> = Vec::new();
    let mut headlines: BTreeMap<String, HeadlinePartition> = BTreeMap::new();

    for (country, articles) in &collection.articles {
        let texts: Vec<&str> = articles.iter().map(|article| article.text.as_str()).collect();
        let country_freq = word_frequency(&tokenizer, texts);
        if country_freq.is_empty() {
            warn!(%country, "No words survive filtering; omitting country");
            continue;
        }

        let Some(winner) = top_word(&country_freq, &global_freq, articles.len()) else {
            continue;
        };
        let timeframe = collection
            .timeframes
            .get(country)
            .copied()
            .unwrap_or(Timeframe::Hours24);

        info!(
            %country,
            word = %winner.word,
            pct = %format!("{:.1}", winner.local_pct),
            "Prevalent word"
        );

        headlines.insert(country.clone(), partition_headlines(articles, &winner.word)?);
        results.push(PrevalenceResult {
            country_name: country.clone(),
            week: week.clone(),
            prevalent_word: winner.word,
            word_frequency: winner.frequency,
            word_percentage: round2(winner.local_pct),
            prevalence_score: round2(winner.score),
            num_articles: articles.len(),
            timeframe: timeframe.as_query().to_string(),
        });
    }

    if results.is_empty() {
        let e = PipelineError::NoScorableResults;
        error!(error = %e, "Aborting run");
        return Err(Box::new(e));
    }

    // Score descending; ties by country name so reruns produce identical files.
    let results: Vec<PrevalenceResult> = results
        .into_iter()
        .sorted_by(|a, b| {
            b.prevalence_score
                .partial_cmp(&a.prevalence_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.country_name.cmp(&b.country_name))
        })
        .collect();

    // ---- Outputs ----
    let csv_path = outputs::csv::write_results(&results, &args.output_dir, gdelt::SOURCE_TAG)?;
    outputs::headlines::write_headlines(&headlines, &args.output_dir).await?;

    // ---- Final summary ----
    let total_articles: usize = results.iter().map(|r| r.num_articles).sum();
    let top = &results[0];
    info!(
        countries = results.len(),
        total_articles,
        top_word = %top.prevalent_word,
        top_country = %top.country_name,
        "Analysis complete"
    );

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        csv = %csv_path.display(),
        "Execution complete"
    );

    Ok(())
}
