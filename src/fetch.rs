//! Multi-pass fetch orchestration.
//!
//! Every country starts a run as pending. Pass 1 queries the last 24 hours
//! for all of them; countries that come back empty are retried at 7 days,
//! and any still empty once more at 30 days. A pass always drains completely
//! before the next one starts, and a country is resolved by the smallest
//! window that yields at least one article.
//!
//! Within a pass, requests run through a bounded pool
//! (`futures::stream::buffer_unordered`); completion order is arbitrary and
//! results are merged only after each request finishes, so no two tasks ever
//! touch the same country's entry. For rate-limited sources the pool can be
//! replaced with strictly sequential requests separated by a fixed delay.
//!
//! Per-request timeouts, non-success statuses, and malformed bodies all
//! collapse to "empty for this country in this pass" — the pass ladder is
//! the retry mechanism, there is none inside a pass.

use crate::countries::CountryTarget;
use crate::errors::PipelineError;
use crate::models::{Article, Timeframe};
use crate::sources::gdelt;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Knobs for a collection run, filled in from the CLI.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Articles requested per country per pass.
    pub max_records: usize,
    /// Maximum in-flight requests per pass.
    pub concurrency: usize,
    /// Non-zero switches a pass to sequential requests with this gap
    /// between them (politeness mode for rate-limited sources).
    pub request_delay: Duration,
}

/// Resolution state of one country across the pass ladder.
#[derive(Debug)]
enum CountryStatus {
    Pending,
    Resolved {
        timeframe: Timeframe,
        articles: Vec<Article>,
    },
}

/// Everything a collection run produced, returned as one value so the
/// analysis stages take explicit inputs instead of reading shared state.
#[derive(Debug, Default)]
pub struct Collection {
    /// Articles per country, countries with none omitted.
    pub articles: HashMap<String, Vec<Article>>,
    /// The window each resolved country was resolved at.
    pub timeframes: HashMap<String, Timeframe>,
    /// Countries resolved per ladder rung, in ladder order.
    pub tier_counts: [usize; 3],
    /// Countries that stayed empty through all passes.
    pub unresolved: Vec<String>,
    /// How many countries were attempted.
    pub total_countries: usize,
}

impl Collection {
    pub fn total_articles(&self) -> usize {
        self.articles.values().map(Vec::len).sum()
    }

    pub fn coverage_percent(&self) -> f64 {
        if self.total_countries == 0 {
            return 0.0;
        }
        100.0 * self.articles.len() as f64 / self.total_countries as f64
    }

    /// Log the collection summary: coverage plus how many countries each
    /// fallback tier recovered.
    pub fn log_summary(&self) {
        info!(
            total_articles = self.total_articles(),
            countries_with_data = self.articles.len(),
            total_countries = self.total_countries,
            coverage_pct = %format!("{:.1}", self.coverage_percent()),
            "Collection summary"
        );
        info!(
            resolved_24h = self.tier_counts[0],
            resolved_7d = self.tier_counts[1],
            resolved_30d = self.tier_counts[2],
            no_data = self.unresolved.len(),
            "Fallback tier breakdown"
        );
    }
}

/// Run the full pass ladder over `countries`.
///
/// Fails only when every country stayed empty through all three passes;
/// individual request failures never propagate past the pass they happened
/// in.
#[instrument(level = "info", skip_all, fields(countries = countries.len()))]
pub async fn collect_articles(
    client: &Client,
    countries: &[CountryTarget],
    opts: &FetchOptions,
) -> Result<Collection, PipelineError> {
    let mut collection = Collection {
        total_countries: countries.len(),
        ..Collection::default()
    };

    let mut pending: Vec<&CountryTarget> = countries.iter().collect();

    for (tier, timeframe) in Timeframe::LADDER.into_iter().enumerate() {
        if pending.is_empty() {
            break;
        }
        info!(
            pass = tier + 1,
            timespan = %timeframe,
            countries = pending.len(),
            "Fetch pass starting"
        );

        let outcomes = run_pass(client, &pending, timeframe, opts).await;

        let mut still_pending = Vec::new();
        for (target, status) in outcomes {
            match status {
                CountryStatus::Resolved { timeframe, articles } => {
                    collection.tier_counts[tier] += 1;
                    collection.timeframes.insert(target.name.to_string(), timeframe);
                    collection.articles.insert(target.name.to_string(), articles);
                }
                CountryStatus::Pending => still_pending.push(target),
            }
        }
        pending = still_pending;

        info!(
            pass = tier + 1,
            resolved = collection.tier_counts[tier],
            remaining = pending.len(),
            "Fetch pass complete"
        );
    }

    collection.unresolved = pending.iter().map(|c| c.name.to_string()).collect();

    if collection.articles.is_empty() {
        return Err(PipelineError::NoDataCollected);
    }
    Ok(collection)
}

/// One fully-drained pass over the still-pending countries.
async fn run_pass<'a>(
    client: &Client,
    pending: &[&'a CountryTarget],
    timeframe: Timeframe,
    opts: &FetchOptions,
) -> Vec<(&'a CountryTarget, CountryStatus)> {
    if !opts.request_delay.is_zero() {
        let mut outcomes = Vec::with_capacity(pending.len());
        for (i, target) in pending.iter().enumerate() {
            if i > 0 {
                sleep(opts.request_delay).await;
            }
            outcomes.push((*target, fetch_one(client, target, timeframe, opts.max_records).await));
        }
        return outcomes;
    }

    stream::iter(pending.iter().copied())
        .map(|target| async move {
            (target, fetch_one(client, target, timeframe, opts.max_records).await)
        })
        .buffer_unordered(opts.concurrency)
        .collect()
        .await
}

/// One request. Failures and empty listings both leave the country pending.
async fn fetch_one(
    client: &Client,
    target: &CountryTarget,
    timeframe: Timeframe,
    max_records: usize,
) -> CountryStatus {
    match gdelt::fetch_country(client, target.code, timeframe, max_records).await {
        Ok(articles) if articles.is_empty() => {
            info!(country = target.name, timespan = %timeframe, "0 articles");
            CountryStatus::Pending
        }
        Ok(articles) => {
            info!(
                country = target.name,
                timespan = %timeframe,
                count = articles.len(),
                newest = %articles[0].published_at,
                "Fetched articles"
            );
            CountryStatus::Resolved { timeframe, articles }
        }
        Err(e) => {
            warn!(
                country = target.name,
                timespan = %timeframe,
                reason = %e,
                "Fetch failed; empty for this pass"
            );
            CountryStatus::Pending
        }
    }
}
