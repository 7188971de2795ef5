//! Grouped counts over record sets.
//!
//! Every function here is a pure function of its input slice. Empty input and
//! `n == 0` both give an empty [`GroupCount`].

use std::collections::BTreeMap;

use cord_types::GroupCount;

use crate::aggregate::counter::OrderedCounter;
use crate::aggregate::frequency::TokenFrequencyTable;
use crate::analyzer::StopwordSet;
use crate::record::ValidatedRecord;

/// Records per publication year, ascending by year.
///
/// Only years that occur are listed; gaps are not zero-filled.
pub fn count_by_year(records: &[ValidatedRecord]) -> GroupCount<i32> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for r in records {
        *years.entry(r.year()).or_default() += 1;
    }
    GroupCount::from_entries(years.into_iter().collect())
}

/// The `n` journals with the most records.
///
/// Records without a journal are skipped, not counted under a placeholder.
pub fn top_journals(records: &[ValidatedRecord], n: usize) -> GroupCount<String> {
    top_by(records, n, ValidatedRecord::journal)
}

/// The `n` sources with the most records. Same rules as [`top_journals`].
pub fn top_sources(records: &[ValidatedRecord], n: usize) -> GroupCount<String> {
    top_by(records, n, ValidatedRecord::source)
}

/// The `n` most frequent title tokens, with `stopwords` removed.
pub fn top_title_tokens(
    records: &[ValidatedRecord],
    n: usize,
    stopwords: &StopwordSet,
) -> GroupCount<String> {
    if n == 0 {
        return GroupCount::new();
    }
    TokenFrequencyTable::from_titles(records, stopwords).top(n)
}

fn top_by<F>(records: &[ValidatedRecord], n: usize, key: F) -> GroupCount<String>
where
    F: Fn(&ValidatedRecord) -> Option<&str>,
{
    if n == 0 {
        return GroupCount::new();
    }
    let mut counter: OrderedCounter<String> = OrderedCounter::new();
    for name in records.iter().filter_map(key) {
        counter.add(name);
    }
    counter.top(n)
}
