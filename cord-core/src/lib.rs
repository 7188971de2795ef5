//! Cleaning and term-frequency aggregation for document metadata exports.
//!
//! Data flows through the crate in one direction:
//!
//! ```text
//! RawRecord --clean--> ValidatedRecord --derive_features--> enriched records
//!                                                            |
//!                     +--------------------------------------+
//!                     |                                      |
//!              aggregate (full set)        filter_by_year_range -> aggregate
//! ```
//!
//! Every stage takes its input as a parameter and returns a new value. There
//! is no global state and no caching, so the interactive path is simply the
//! static path called again on a filtered slice.
//!
//! ```
//! use cord_core::{aggregate, clean, features, filter};
//! use cord_types::RawRecord;
//!
//! let raw = vec![
//!     RawRecord::new().with("title", "Virus Spread Study").with("publish_time", "2020-03-01"),
//!     RawRecord::new().with("title", "").with("publish_time", "2021-01-01"),
//!     RawRecord::new().with("title", "Another Paper").with("publish_time", "not-a-date"),
//! ];
//!
//! let mut records = clean::clean(&raw);
//! features::derive_features(&mut records);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].title_word_count(), 3);
//!
//! let subset = filter::filter_by_year_range(&records, 2020, 2020).unwrap();
//! assert_eq!(aggregate::count_by_year(&subset).into_vec(), vec![(2020, 1)]);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod analyzer;
pub mod clean;
pub mod features;
pub mod filter;
pub mod io;
pub mod profile;
pub mod record;

pub use aggregate::{
    count_by_year, top_journals, top_sources, top_title_tokens, CorpusSummary,
    TokenFrequencyTable,
};
pub use analyzer::{tokenize, StopwordSet, Tokenizer};
pub use clean::{clean, clean_with_report, parse_publish_date, CleanReport};
pub use features::{derive_features, word_count};
pub use filter::{
    filter_by_year_range, filter_in_range, resolve_selection, year_bounds, YearRange,
};
pub use record::ValidatedRecord;

pub use cord_types::{AnalysisConfig, GroupCount, RangeError, RawRecord};
