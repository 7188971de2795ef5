//! Word tokenizer for titles and abstracts.
//!
//! Lowercases its input and emits every maximal run of word characters
//! (Unicode letters, digits and connector punctuation such as `_`). Anything
//! else separates tokens and is dropped:
//!
//! ```text
//! "COVID-19 is here!"  ->  ["covid", "19", "is", "here"]
//! ```
//!
//! Tokens come out in source order with duplicates kept; counting happens in
//! [`crate::aggregate`].
//!
//! Two forms are provided:
//!
//! - [`Tokenizer::for_each_token`] streams `&str` slices of a lowercased
//!   buffer to a callback, with no allocation per token
//! - [`tokenize`] collects owned tokens into a [`Tokens`] vector

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::record::ValidatedRecord;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Collected tokens. Titles rarely exceed sixteen words, so most stay inline.
pub type Tokens = SmallVec<[String; 16]>;

/// Text field of a record that can be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Document title.
    Title,
    /// Abstract text; may be empty.
    Abstract,
}

impl Field {
    /// Returns this field's text from `record`.
    #[inline]
    pub fn text(self, record: &ValidatedRecord) -> &str {
        match self {
            Field::Title => record.title(),
            Field::Abstract => record.abstract_text(),
        }
    }
}

/// Stateless word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    pub const fn new() -> Self {
        Self
    }

    /// Emits each lowercased token of `text` in source order.
    ///
    /// The slices borrow a lowercased copy that lives only for the call, so
    /// callers that keep tokens must copy them.
    #[inline]
    pub fn for_each_token<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let lowered = lowercase(text);
        for m in WORD_RE.find_iter(&lowered) {
            emit(m.as_str());
        }
    }

    /// Collects the tokens of `text`.
    pub fn tokenize(&self, text: &str) -> Tokens {
        let mut out = Tokens::new();
        self.for_each_token(text, |t| out.push(t.to_owned()));
        out
    }
}

/// Tokenizes `text` with the default [`Tokenizer`].
///
/// ```
/// use cord_core::analyzer::tokenize;
///
/// let tokens = tokenize("COVID-19 is here!");
/// assert_eq!(tokens.as_slice(), ["covid", "19", "is", "here"]);
/// ```
#[inline]
pub fn tokenize(text: &str) -> Tokens {
    Tokenizer::new().tokenize(text)
}

#[inline]
fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn collect(input: &str) -> Vec<String> {
        tokenize(input).into_vec()
    }

    #[test]
    fn hyphen_and_punctuation_split() {
        assert_eq!(collect("COVID-19 is here!"), ["covid", "19", "is", "here"]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("  ...  !!! -- ").is_empty());
    }

    #[test]
    fn duplicates_preserved_in_order() {
        assert_eq!(collect("Virus, virus; VIRUS"), ["virus", "virus", "virus"]);
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert_eq!(collect("snake_case name"), ["snake_case", "name"]);
    }

    #[test]
    fn apostrophes_and_slashes_split() {
        assert_eq!(
            collect("patients' SARS-CoV-2/ACE2"),
            ["patients", "sars", "cov", "2", "ace2"]
        );
    }

    #[test]
    fn unicode_letters_kept() {
        assert_eq!(collect("Étude Über Café"), ["étude", "über", "café"]);
    }

    #[test]
    fn lowercase_input_not_copied() {
        assert!(matches!(lowercase("already lower"), Cow::Borrowed(_)));
        assert!(matches!(lowercase("Mixed"), Cow::Owned(_)));
    }

    #[test]
    fn streaming_matches_collected() {
        let text = "Transmission dynamics of 2019-nCoV in Wuhan";
        let mut streamed = Vec::new();
        Tokenizer::new().for_each_token(text, |t| streamed.push(t.to_owned()));
        assert_eq!(streamed, collect(text));
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();
        let mut n = 0usize;
        t.for_each_token("hello world", |_| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.for_each_token("one two three", |_| n += 1);
        assert_eq!(n, 3);
    }

    #[test]
    fn field_reads_record_text() {
        let r = ValidatedRecord::new(
            "A Title",
            "An abstract",
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            None,
            None,
        )
        .unwrap();
        assert_eq!(Field::Title.text(&r), "A Title");
        assert_eq!(Field::Abstract.text(&r), "An abstract");
    }
}
