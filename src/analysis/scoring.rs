//! Prevalence scoring: local frequency weighted by global rarity.
//!
//! A word scores high when it is common in one country's headlines but rare
//! everywhere else. The formula is:
//!
//! ```text
//! local_pct     = (country_count / country_article_total) * 100
//! global_rarity = 1 / (global_count + 1)
//! score         = local_pct * global_rarity * 1000
//! ```
//!
//! The `+1` covers the zero-frequency case; it also means a country's own
//! contribution to the global pool is not subtracted before scoring, which
//! mildly discounts words that are common both locally and globally. That
//! approximation is intentional and kept as-is.
//!
//! The scale factor only makes scores readable; it carries no meaning.
//!
//! Exact score ties go to the word encountered first in the country's
//! corpus, i.e. the frequency table's enumeration order. That order is fixed
//! by the article texts, so the same tables always produce the same winner.

use crate::analysis::frequency::CorpusFrequency;

/// A scored word for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
    pub local_pct: f64,
    pub frequency: u32,
}

/// Score one word. Returns `(score, local_pct)`.
///
/// Pure function of its arguments; `article_total` must be non-zero.
pub fn prevalence_score(country_count: u32, global_count: u32, article_total: usize) -> (f64, f64) {
    let local_pct = (country_count as f64 / article_total as f64) * 100.0;
    let global_rarity = 1.0 / (global_count as f64 + 1.0);
    let score = local_pct * global_rarity * 1000.0;
    (score, local_pct)
}

/// Rank a country's vocabulary and return the winner.
///
/// Strict argmax over the corpus in enumeration order: a later word must
/// score strictly higher to displace the current best, so ties keep the
/// first-encountered word. Returns `None` for an empty vocabulary or a zero
/// article count.
pub fn top_word(
    country_freq: &CorpusFrequency,
    global_freq: &CorpusFrequency,
    article_total: usize,
) -> Option<RankedWord> {
    if article_total == 0 {
        return None;
    }

    let mut best: Option<RankedWord> = None;
    for (word, count) in country_freq.iter() {
        let (score, local_pct) = prevalence_score(count, global_freq.get(word), article_total);
        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(RankedWord {
                word: word.to_string(),
                score,
                local_pct,
                frequency: count,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, u32)]) -> CorpusFrequency {
        let mut freq = CorpusFrequency::new();
        for (word, count) in pairs {
            for _ in 0..*count {
                freq.record(word.to_string());
            }
        }
        freq
    }

    #[test]
    fn test_score_formula() {
        // 2 occurrences over 10 articles, with the word itself in the global
        // pool twice: 20% * (1/3) * 1000.
        let (score, local_pct) = prevalence_score(2, 2, 10);
        assert!((local_pct - 20.0).abs() < 1e-9);
        assert!((score - 20.0 / 3.0 * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_score_non_negative() {
        for &(c, g, n) in &[(0u32, 0u32, 1usize), (1, 0, 1), (5, 100, 3), (0, 7, 50)] {
            let (score, local_pct) = prevalence_score(c, g, n);
            assert!(score >= 0.0);
            assert!(local_pct >= 0.0);
        }
    }

    #[test]
    fn test_score_monotonic_in_country_count() {
        let (lower, _) = prevalence_score(1, 10, 20);
        let (higher, _) = prevalence_score(2, 10, 20);
        assert!(higher > lower);
    }

    #[test]
    fn test_score_monotonic_in_global_count() {
        let (rarer, _) = prevalence_score(3, 3, 20);
        let (commoner, _) = prevalence_score(3, 30, 20);
        assert!(rarer > commoner);
    }

    #[test]
    fn test_score_idempotent() {
        let first = prevalence_score(4, 9, 12);
        let second = prevalence_score(4, 9, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_word_prefers_locally_distinctive() {
        // Same local count, but "markets" is assumed globally commoner.
        let country = corpus(&[("stock", 2), ("markets", 2), ("rally", 1)]);
        let global = corpus(&[("stock", 2), ("markets", 5), ("rally", 1), ("election", 1)]);

        let winner = top_word(&country, &global, 2).unwrap();
        assert_eq!(winner.word, "stock");
        assert_eq!(winner.frequency, 2);
        assert!((winner.local_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_word_tie_keeps_first_encountered() {
        let country = corpus(&[("zebra", 1), ("apple", 1)]);
        let global = corpus(&[("zebra", 1), ("apple", 1)]);

        // Identical scores; "zebra" entered the corpus first and stays on top.
        let winner = top_word(&country, &global, 4).unwrap();
        assert_eq!(winner.word, "zebra");
    }

    #[test]
    fn test_top_word_deterministic_on_same_tables() {
        let country = corpus(&[("quake", 3), ("rescue", 3), ("flood", 1)]);
        let global = corpus(&[("quake", 4), ("rescue", 4), ("flood", 9)]);

        let first = top_word(&country, &global, 5).unwrap();
        let second = top_word(&country, &global, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_word_empty_cases() {
        let empty = CorpusFrequency::new();
        let global = corpus(&[("stock", 2)]);
        assert!(top_word(&empty, &global, 5).is_none());
        assert!(top_word(&global, &global, 0).is_none());
    }

    #[test]
    fn test_word_absent_from_global_table() {
        let country = corpus(&[("volcano", 1)]);
        let global = CorpusFrequency::new();

        let winner = top_word(&country, &global, 1).unwrap();
        // 100% * 1/(0+1) * 1000
        assert!((winner.score - 100_000.0).abs() < 1e-6);
    }
}
