//! Upstream news sources.
//!
//! Each source module exposes a `fetch_country` function that retrieves
//! recent headlines for one country at one lookback window, plus a
//! `SOURCE_TAG` that ends up in the CSV filename.
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | GDELT DOC 2.0 | [`gdelt`] | JSON API | Free, no key, no rate limit; FIPS country codes |
//!
//! Source modules report failures as errors; the fetch orchestrator decides
//! what a failure means for the run (an empty result for that country in
//! that pass, never an abort).

pub mod gdelt;
