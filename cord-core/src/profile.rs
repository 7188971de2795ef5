//! Missing-value profile of raw input.

use cord_types::{
    RawRecord, ABSTRACT_COLUMN, JOURNAL_COLUMN, PUBLISH_TIME_COLUMN, SOURCE_X_COLUMN,
    TITLE_COLUMN,
};
use serde::Serialize;

/// Columns the analysis depends on, in report order.
pub const IMPORTANT_COLUMNS: &[&str] = &[
    TITLE_COLUMN,
    ABSTRACT_COLUMN,
    PUBLISH_TIME_COLUMN,
    JOURNAL_COLUMN,
    SOURCE_X_COLUMN,
];

/// Share of rows with a missing value in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    /// Column name as given.
    pub column: String,
    /// Rows where the column is missing.
    pub missing: usize,
    /// `missing / rows`, 0.0 when there are no rows.
    pub fraction: f64,
}

/// Missing-value counts for `columns` over `raw`, in column order.
///
/// A value is missing when the column is absent, empty or whitespace-only.
pub fn missing_fractions(raw: &[RawRecord], columns: &[&str]) -> Vec<ColumnProfile> {
    columns
        .iter()
        .map(|&column| {
            let missing = raw.iter().filter(|r| r.get(column).is_none()).count();
            let fraction = if raw.is_empty() {
                0.0
            } else {
                missing as f64 / raw.len() as f64
            };
            ColumnProfile {
                column: column.to_owned(),
                missing,
                fraction,
            }
        })
        .collect()
}
