//! Token frequency counting.

use crate::analysis::tokenizer::Tokenizer;
use std::collections::HashMap;

/// Token occurrence counts for one corpus, built once and then read-only.
///
/// Entries remember the order tokens were first encountered; the scorer
/// enumerates them in that order and resolves exact score ties in favor of
/// the earlier token, so the enumeration order is part of the contract, not
/// an accident of the backing map.
#[derive(Debug, Default, Clone)]
pub struct CorpusFrequency {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl CorpusFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    /// Occurrences of `token`, 0 when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.index.get(token).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens with counts, in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

/// Count token occurrences across a set of texts.
///
/// Called once per country with that country's headlines, and once with every
/// collected headline to build the global table. Counts accumulate across all
/// texts passed in a single call.
pub fn word_frequency<'a, I>(tokenizer: &Tokenizer, texts: I) -> CorpusFrequency
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = CorpusFrequency::new();
    for text in texts {
        for token in tokenizer.tokenize(text) {
            counts.record(token);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate_across_texts() {
        let tokenizer = Tokenizer::builtin();
        let counts = word_frequency(
            &tokenizer,
            ["stock markets rally today", "stock markets close higher"],
        );

        assert_eq!(counts.get("stock"), 2);
        assert_eq!(counts.get("markets"), 2);
        assert_eq!(counts.get("rally"), 1);
        assert_eq!(counts.get("higher"), 1);
        assert_eq!(counts.get("absent"), 0);
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn test_iteration_preserves_first_encounter_order() {
        let tokenizer = Tokenizer::builtin();
        let counts = word_frequency(&tokenizer, ["votes counted", "counted again votes"]);

        let order: Vec<&str> = counts.iter().map(|(token, _)| token).collect();
        assert_eq!(order, vec!["votes", "counted", "again"]);
    }

    #[test]
    fn test_empty_input_yields_empty_corpus() {
        let tokenizer = Tokenizer::builtin();
        assert!(word_frequency(&tokenizer, []).is_empty());
        assert!(word_frequency(&tokenizer, ["the a of"]).is_empty());
    }

    #[test]
    fn test_no_filtered_token_survives() {
        let tokenizer = Tokenizer::builtin();
        let counts = word_frequency(
            &tokenizer,
            ["The 2024 vote: 1000 said they would march at www.example.com"],
        );

        for (token, _) in counts.iter() {
            assert!(token.chars().count() > 3);
            assert!(!token.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(counts.get("said"), 0);
        assert_eq!(counts.get("they"), 0);
    }
}
