//! Validated record model.

use chrono::{Datelike, NaiveDate};

use crate::features::word_count;

/// One document's metadata after cleaning.
///
/// Constructed only through [`ValidatedRecord::new`], which rejects blank
/// titles. `year` is computed from `publish_date` at construction and never
/// set independently, so `year == publish_date.year()` always holds.
///
/// The two word-count fields start at zero and are filled by
/// [`crate::features::derive_features`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    title: String,
    abstract_text: String,
    publish_date: NaiveDate,
    year: i32,
    journal: Option<String>,
    source: Option<String>,
    abstract_word_count: usize,
    title_word_count: usize,
}

impl ValidatedRecord {
    /// Creates a record, or `None` if `title` is empty or whitespace-only.
    ///
    /// Blank `journal`/`source` values are stored as `None`.
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        publish_date: NaiveDate,
        journal: Option<String>,
        source: Option<String>,
    ) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }

        Some(Self {
            title,
            abstract_text: abstract_text.into(),
            publish_date,
            year: publish_date.year(),
            journal: journal.filter(|j| !j.trim().is_empty()),
            source: source.filter(|s| !s.trim().is_empty()),
            abstract_word_count: 0,
            title_word_count: 0,
        })
    }

    /// Fills both word-count fields from the current text. Idempotent.
    #[inline]
    pub fn derive_word_counts(&mut self) {
        self.title_word_count = word_count(&self.title);
        self.abstract_word_count = word_count(&self.abstract_text);
    }

    /// By-value form of [`ValidatedRecord::derive_word_counts`].
    #[must_use]
    pub fn enriched(mut self) -> Self {
        self.derive_word_counts();
        self
    }

    /// Non-blank title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Abstract text; empty when the raw row had none.
    #[inline]
    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    /// Parsed publication date.
    #[inline]
    pub fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    /// Year of [`ValidatedRecord::publish_date`].
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Journal name, if the row had one.
    #[inline]
    pub fn journal(&self) -> Option<&str> {
        self.journal.as_deref()
    }

    /// Source collection, if the row had one.
    #[inline]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whitespace-separated words in the abstract. Zero until enriched.
    #[inline]
    pub fn abstract_word_count(&self) -> usize {
        self.abstract_word_count
    }

    /// Whitespace-separated words in the title. Zero until enriched, at least one after.
    #[inline]
    pub fn title_word_count(&self) -> usize {
        self.title_word_count
    }

    /// Returns `true` once word counts have been derived.
    #[inline]
    pub fn is_enriched(&self) -> bool {
        self.title_word_count > 0
    }
}
