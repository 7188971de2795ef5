//! Token frequency tables.

use cord_types::GroupCount;

use crate::aggregate::counter::OrderedCounter;
use crate::analyzer::{Field, StopwordSet, Tokenizer};
use crate::record::ValidatedRecord;

/// Token -> occurrence count over a set of records.
///
/// Built fresh by each call and never mutated afterwards. Stopwords are
/// skipped before insertion, so an excluded token is absent from the table
/// rather than present with count zero. Every stored count is at least one.
#[derive(Debug, Clone, Default)]
pub struct TokenFrequencyTable {
    counts: OrderedCounter<String>,
    total: usize,
}

impl TokenFrequencyTable {
    /// Counts title tokens across `records`.
    pub fn from_titles(records: &[ValidatedRecord], stopwords: &StopwordSet) -> Self {
        Self::from_field(records, Field::Title, stopwords)
    }

    /// Counts tokens of `field` across `records`.
    pub fn from_field(records: &[ValidatedRecord], field: Field, stopwords: &StopwordSet) -> Self {
        Self::from_texts(records.iter().map(|r| field.text(r)), stopwords)
    }

    /// Counts tokens across arbitrary texts.
    pub fn from_texts<'a, I>(texts: I, stopwords: &StopwordSet) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenizer = Tokenizer::new();
        let mut counts: OrderedCounter<String> = OrderedCounter::new();
        let mut total = 0usize;

        for text in texts {
            tokenizer.for_each_token(text, |token| {
                if !stopwords.contains(token) {
                    counts.add(token);
                    total += 1;
                }
            });
        }

        Self { counts, total }
    }

    /// Occurrences of `token`, or `None` if it never appeared (or is a stopword).
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no token was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.len() == 0
    }

    /// Total token occurrences counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(token, count)` in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.entries().iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The `n` most frequent tokens, descending; ties keep first-encounter order.
    pub fn top(&self, n: usize) -> GroupCount<String> {
        self.counts.top(n)
    }
}
