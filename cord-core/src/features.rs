//! Per-record scalar features.

use crate::record::ValidatedRecord;

/// Counts whitespace-separated words.
///
/// Runs of whitespace collapse, and leading or trailing whitespace produces no
/// empty segment, so `""` and `"   "` both count as zero.
///
/// ```
/// use cord_core::features::word_count;
///
/// assert_eq!(word_count("a b  c"), 3);
/// assert_eq!(word_count(""), 0);
/// ```
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Fills `title_word_count` and `abstract_word_count` on every record.
///
/// Re-running on already enriched records writes identical values.
pub fn derive_features(records: &mut [ValidatedRecord]) {
    for record in records.iter_mut() {
        record.derive_word_counts();
    }
    tracing::debug!(records = records.len(), "derived word counts");
}
