//! Frequency aggregation.
//!
//! Grouped counts (per year, per journal, per source) and token frequency
//! tables over any slice of validated records, whether the full set or a
//! range-filtered subset. Nothing here keeps state between calls.

mod counter;
mod frequency;
mod groups;
mod summary;

pub use frequency::TokenFrequencyTable;
pub use groups::{count_by_year, top_journals, top_sources, top_title_tokens};
pub use summary::CorpusSummary;
