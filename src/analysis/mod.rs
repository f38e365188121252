//! Headline text analysis: tokenization, frequency counting, and scoring.
//!
//! The stages run strictly in order after all fetching is done:
//!
//! 1. [`tokenizer`]: normalize raw headline text into filtered tokens
//! 2. [`frequency`]: count tokens per corpus (one per country, one global)
//! 3. [`scoring`]: rank each country's words by local prevalence weighted
//!    by global rarity and pick the winner
//!
//! Everything here is synchronous and pure; the same inputs always produce
//! the same outputs.

pub mod frequency;
pub mod scoring;
pub mod tokenizer;
