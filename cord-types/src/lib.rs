//! Core types shared across the CORD metadata analysis workspace.
//!
//! This crate holds the plain data types that cross crate boundaries:
//!
//! - **Raw input**: [`RawRecord`], one untyped row of the metadata export
//! - **Results**: [`GroupCount`], ordered `(key, count)` pairs from an aggregation
//! - **Errors**: [`RangeError`] and [`ConfigError`]
//! - **Configuration**: [`AnalysisConfig`], stopwords and top-N bounds
//!
//! Keeping them separate lets the analysis core, the report binary and any
//! presentation layer agree on shapes without depending on each other.

#![warn(missing_docs)]

use core::fmt;
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Column holding the document title.
pub const TITLE_COLUMN: &str = "title";
/// Column holding the abstract.
pub const ABSTRACT_COLUMN: &str = "abstract";
/// Column holding the raw publication date.
pub const PUBLISH_TIME_COLUMN: &str = "publish_time";
/// Column holding the journal name.
pub const JOURNAL_COLUMN: &str = "journal";
/// Column holding the source identifier in CORD-19 exports.
pub const SOURCE_X_COLUMN: &str = "source_x";
/// Generic source column, used when `source_x` is absent.
pub const SOURCE_COLUMN: &str = "source";

/// One row of the metadata export, before any validation.
///
/// Every value is kept as the raw string read from the file. A column that is
/// absent, empty or whitespace-only is treated as missing by [`RawRecord::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any previous one.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Builder form of [`RawRecord::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Returns the value of `column`, or `None` when it is absent or blank.
    #[inline]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Returns the raw value of `column` without the blank check.
    #[inline]
    pub fn get_raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Document title.
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_COLUMN)
    }

    /// Abstract text.
    pub fn abstract_text(&self) -> Option<&str> {
        self.get(ABSTRACT_COLUMN)
    }

    /// Raw publication date string.
    pub fn publish_time(&self) -> Option<&str> {
        self.get(PUBLISH_TIME_COLUMN)
    }

    /// Journal name.
    pub fn journal(&self) -> Option<&str> {
        self.get(JOURNAL_COLUMN)
    }

    /// Source identifier. Reads `source_x` first, then `source`.
    pub fn source(&self) -> Option<&str> {
        self.get(SOURCE_X_COLUMN).or_else(|| self.get(SOURCE_COLUMN))
    }

    /// Number of columns present (blank ones included).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(column, raw value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered `(key, count)` pairs produced by an aggregation.
///
/// The order is part of the result: ascending key for per-year counts,
/// descending count (ties in first-encountered order) for top-N groupings.
/// `GroupCount` never reorders what it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCount<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for GroupCount<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> GroupCount<K> {
    /// Creates an empty result.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wraps already-ordered entries.
    pub fn from_entries(entries: Vec<(K, usize)>) -> Self {
        Self { entries }
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no group was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, count)` in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Keys in result order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Returns the entries as a slice.
    pub fn as_slice(&self) -> &[(K, usize)] {
        &self.entries
    }

    /// Consumes the result and returns the entries.
    pub fn into_vec(self) -> Vec<(K, usize)> {
        self.entries
    }
}

impl<K: PartialEq> GroupCount<K> {
    /// Count for `key`, if the group exists.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }
}

impl<K> IntoIterator for GroupCount<K> {
    type Item = (K, usize);
    type IntoIter = std::vec::IntoIter<(K, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: fmt::Display> fmt::Display for GroupCount<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, count) in &self.entries {
            writeln!(f, "{:<40} {:>8}", key.to_string(), count)?;
        }
        Ok(())
    }
}

/// Errors from the year range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    #[error("invalid year range: min {min} is greater than max {max}")]
    Inverted {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

/// Errors from loading an [`AnalysisConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Stopwords removed from title-word counts unless configured otherwise.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "of", "in", "to", "for", "on", "with", "a", "an",
];

/// Default cardinality cap for journal and source rankings.
pub const DEFAULT_TOP_N: usize = 10;

/// Default cardinality cap for the title-word ranking.
pub const DEFAULT_TITLE_TOP_N: usize = 20;

/// Aggregation options.
///
/// Every key is optional in TOML; missing keys take the default value.
///
/// ```toml
/// stopwords = ["the", "and", "covid"]
/// top_n = 5
/// title_top_n = 25
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tokens always excluded from title-word rankings. Matched case-insensitively.
    pub stopwords: Vec<String>,
    /// Result cap for journal and source rankings.
    pub top_n: usize,
    /// Result cap for the title-word ranking.
    pub title_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| (*s).to_owned()).collect(),
            top_n: DEFAULT_TOP_N,
            title_top_n: DEFAULT_TITLE_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
