//! GDELT DOC 2.0 API client.
//!
//! Fetches recent article headlines for a single country using the
//! [`sourcecountry`](https://blog.gdeltproject.org/gdelt-doc-2-0-api-debuts/)
//! filter in article-list mode. GDELT is free and unauthenticated, but has
//! quirks the caller inherits:
//!
//! - country codes are FIPS 10-4, not ISO 3166
//! - when a query matches nothing it often answers with an HTML page
//!   instead of JSON, which we surface as a malformed-body error
//! - `seendate` is when GDELT first crawled the article, not publication time

use crate::models::{Article, Timeframe};
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, instrument, warn};

pub const DOC_API_URL: &str = "http://api.gdeltproject.org/api/v2/doc/doc";

/// Tag embedded in the CSV output filename.
pub const SOURCE_TAG: &str = "gdelt";

#[derive(Debug, Deserialize)]
struct ArticleList {
    #[serde(default)]
    articles: Vec<GdeltArticle>,
}

#[derive(Debug, Deserialize)]
struct GdeltArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    seendate: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    domain: String,
}

/// Fetch up to `max_records` headlines for one country at one window.
///
/// Returns an empty vector when GDELT has no articles for the query; network
/// failures, non-success statuses, and unparseable bodies are errors for the
/// orchestrator to absorb. Records with blank titles are dropped.
#[instrument(level = "debug", skip(client), fields(code = %code, timespan = %timeframe))]
pub async fn fetch_country(
    client: &Client,
    code: &str,
    timeframe: Timeframe,
    max_records: usize,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let response = client
        .get(DOC_API_URL)
        .query(&[
            ("query", format!("sourcecountry:{code}")),
            ("mode", "artlist".to_string()),
            ("maxrecords", max_records.to_string()),
            ("format", "json".to_string()),
            ("timespan", timeframe.as_query().to_string()),
            ("sort", "datedesc".to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {status}").into());
    }

    let body = response.text().await?;
    let listing: ArticleList = match serde_json::from_str(&body) {
        Ok(listing) => listing,
        Err(e) => {
            // GDELT answers with HTML when the query matched nothing it likes.
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 120),
                "GDELT body is not article-list JSON"
            );
            return Err(Box::new(e));
        }
    };

    let articles: Vec<Article> = listing
        .articles
        .into_iter()
        .filter(|a| !a.title.trim().is_empty())
        .map(|a| Article {
            text: a.title.clone(),
            title: a.title,
            source: a.domain,
            published_at: a.seendate,
            url: a.url,
        })
        .collect();

    debug!(count = articles.len(), "Parsed GDELT article list");
    Ok(articles)
}
