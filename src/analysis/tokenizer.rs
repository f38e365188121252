//! Headline tokenization and stop-word filtering.
//!
//! [`Tokenizer::tokenize`] turns raw headline text into the candidate words
//! that the frequency counter sees. The cleanup steps mirror what the
//! downstream scoring expects:
//!
//! 1. Lowercase.
//! 2. Strip URL-like runs (`http...`, `www...`).
//! 3. Replace anything outside `a-z`, whitespace, and apostrophes with a space.
//! 4. Drop possessive `'s` suffixes.
//! 5. Split on whitespace, trimming stray apostrophes.
//! 6. Keep a token iff it is longer than 3 characters, not purely numeric,
//!    not a stop word, and not on the source-word blacklist.
//!
//! The stop-word source is pluggable via [`Lexicon`]: [`BuiltinLexicon`] is
//! the fixed fallback list, [`WordlistLexicon`] loads a richer word-per-line
//! corpus from disk. The choice is made once at startup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use tracing::debug;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s']").unwrap());
static POSSESSIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'s\b").unwrap());

/// Common English function words, used when no richer word list is supplied.
static FALLBACK_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "can", "it", "its", "this",
    "that", "these", "those", "i", "you", "he", "she", "we", "they", "what", "which", "who",
    "when", "where", "why", "how", "said", "says", "after", "over", "up", "down", "out", "off",
    "into", "than", "their", "them",
];

static FALLBACK_STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FALLBACK_STOP_WORDS.iter().copied().collect());

/// A stop-word source. Implementations are selected once at startup and
/// queried with already-lowercased tokens.
pub trait Lexicon {
    fn is_stop_word(&self, word: &str) -> bool;
}

/// The built-in fallback stop-word list.
#[derive(Debug, Default)]
pub struct BuiltinLexicon;

impl Lexicon for BuiltinLexicon {
    fn is_stop_word(&self, word: &str) -> bool {
        FALLBACK_STOP_WORD_SET.contains(word)
    }
}

/// A stop-word list loaded from a word-per-line file.
///
/// Lines are lowercased and trimmed; blank lines and `#` comments are
/// ignored.
#[derive(Debug)]
pub struct WordlistLexicon {
    words: HashSet<String>,
}

impl WordlistLexicon {
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let contents = std::fs::read_to_string(path)?;
        let words: HashSet<String> = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        debug!(path, count = words.len(), "Loaded stop-word list");
        Ok(Self { words })
    }
}

impl Lexicon for WordlistLexicon {
    fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[derive(Debug, Deserialize)]
struct BlacklistFile {
    #[serde(default)]
    source_words: Vec<String>,
}

/// Load the news-source word blacklist: a JSON file of shape
/// `{"source_words": ["reuters", ...]}`. These are outlet names and boilerplate
/// that would otherwise dominate prevalent-word results.
pub fn load_blacklist(path: &str) -> Result<HashSet<String>, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    let parsed: BlacklistFile = serde_json::from_str(&contents)?;
    Ok(parsed
        .source_words
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect())
}

/// Normalizes raw text into filtered tokens. Pure and deterministic.
pub struct Tokenizer {
    lexicon: Box<dyn Lexicon + Send + Sync>,
    blacklist: HashSet<String>,
}

impl Tokenizer {
    pub fn new(lexicon: Box<dyn Lexicon + Send + Sync>, blacklist: HashSet<String>) -> Self {
        Self { lexicon, blacklist }
    }

    /// A tokenizer with the built-in stop-word list and no blacklist.
    pub fn builtin() -> Self {
        Self::new(Box::new(BuiltinLexicon), HashSet::new())
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let no_urls = URL_RE.replace_all(&lowered, "");
        let letters_only = NON_LETTER_RE.replace_all(&no_urls, " ");
        let no_possessives = POSSESSIVE_RE.replace_all(&letters_only, "");

        no_possessives
            .split_whitespace()
            .map(|word| word.trim_matches('\''))
            .filter(|word| word.chars().count() > 3)
            .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
            .filter(|word| !self.lexicon.is_stop_word(word))
            .filter(|word| !self.blacklist.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("blacklist_len", &self.blacklist.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let tokens = Tokenizer::builtin().tokenize("Stock Markets Rally Today");
        assert_eq!(tokens, vec!["stock", "markets", "rally", "today"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = Tokenizer::builtin().tokenize("war in the big city");
        assert_eq!(tokens, vec!["city"]);
        for token in Tokenizer::builtin().tokenize("a bb ccc dddd") {
            assert!(token.chars().count() > 3);
        }
    }

    #[test]
    fn test_stop_words_dropped() {
        let tokens = Tokenizer::builtin().tokenize("which protesters said they would march");
        assert_eq!(tokens, vec!["protesters", "march"]);
    }

    #[test]
    fn test_urls_stripped() {
        let tokens = Tokenizer::builtin().tokenize("read more https://example.com/story www.example.com");
        assert_eq!(tokens, vec!["read", "more"]);
    }

    #[test]
    fn test_punctuation_and_digits_become_whitespace() {
        let tokens = Tokenizer::builtin().tokenize("earthquake, magnitude-7.1 strikes!");
        assert_eq!(tokens, vec!["earthquake", "magnitude", "strikes"]);
    }

    #[test]
    fn test_possessive_suffix_stripped() {
        let tokens = Tokenizer::builtin().tokenize("Iceland's volcano erupts");
        assert_eq!(tokens, vec!["iceland", "volcano", "erupts"]);
    }

    #[test]
    fn test_apostrophes_trimmed_but_contractions_kept() {
        let tokens = Tokenizer::builtin().tokenize("'quoted' word won't break");
        assert!(tokens.contains(&"quoted".to_string()));
        assert!(tokens.contains(&"won't".to_string()));
    }

    #[test]
    fn test_numeric_tokens_dropped() {
        // Digits are already replaced with whitespace, so nothing numeric
        // can reach the filter; the guard still holds for any input.
        let tokens = Tokenizer::builtin().tokenize("2024 budget 1234567");
        assert_eq!(tokens, vec!["budget"]);
    }

    #[test]
    fn test_blacklist_filters_source_words() {
        let blacklist: HashSet<String> = ["reuters".to_string()].into_iter().collect();
        let tokenizer = Tokenizer::new(Box::new(BuiltinLexicon), blacklist);
        let tokens = tokenizer.tokenize("Reuters reports protests spread");
        assert_eq!(tokens, vec!["reports", "protests", "spread"]);
    }

    #[test]
    fn test_wordlist_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "# comment\nProtests\n\nspread\n").unwrap();

        let lexicon = WordlistLexicon::load(path.to_str().unwrap()).unwrap();
        assert!(lexicon.is_stop_word("protests"));
        assert!(lexicon.is_stop_word("spread"));
        assert!(!lexicon.is_stop_word("comment"));

        let tokenizer = Tokenizer::new(Box::new(lexicon), HashSet::new());
        assert_eq!(tokenizer.tokenize("protests spread quickly"), vec!["quickly"]);
    }

    #[test]
    fn test_load_blacklist_lowercases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_blacklist.json");
        std::fs::write(&path, r#"{"source_words": ["Reuters", "TIMES"]}"#).unwrap();

        let blacklist = load_blacklist(path.to_str().unwrap()).unwrap();
        assert!(blacklist.contains("reuters"));
        assert!(blacklist.contains("times"));
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let tokenizer = Tokenizer::builtin();
        let text = "Election results announced after protests spread";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }
}
