//! Stopword sets.

use cord_types::{AnalysisConfig, DEFAULT_STOPWORDS};
use rustc_hash::FxHashSet;

/// Tokens excluded from frequency results.
///
/// Entries are lowercased on insertion. Tokens produced by the tokenizer are
/// already lowercase, so membership is effectively case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Creates an empty set; nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default English list: `the and of in to for on with a an`.
    pub fn english() -> Self {
        DEFAULT_STOPWORDS.iter().copied().collect()
    }

    /// Builds the set named by `config.stopwords`.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        config.stopwords.iter().map(String::as_str).collect()
    }

    /// Adds a word. Surrounding whitespace is ignored and blank words are skipped.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Returns `true` if `token` is excluded.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}
