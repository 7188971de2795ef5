//! Cleaning: raw rows in, validated records out.
//!
//! Policy, applied to each row in order:
//!
//! 1. drop the row if `title` is missing
//! 2. drop the row if `publish_time` is missing
//! 3. replace a missing `abstract` with an empty string
//! 4. drop the row if `publish_time` does not parse as a date
//! 5. derive `year` from the parsed date
//!
//! Dropping is routine filtering, not an error. [`clean_with_report`] returns
//! the per-reason counts for callers that want to show them.

mod date;

pub use date::parse_publish_date;

use core::fmt;

use cord_types::RawRecord;
use serde::Serialize;
use tracing::{debug, info};

use crate::record::ValidatedRecord;

/// Why a raw row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// `title` absent or blank.
    MissingTitle,
    /// `publish_time` absent or blank.
    MissingPublishTime,
    /// `publish_time` present but not a recognizable date.
    UnparseableDate,
}

/// Outcome counts of one cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Rows given to the cleaner.
    pub input: usize,
    /// Records produced.
    pub kept: usize,
    /// Rows dropped for a missing title.
    pub missing_title: usize,
    /// Rows dropped for a missing publication date.
    pub missing_publish_time: usize,
    /// Rows dropped because the date did not parse.
    pub unparseable_date: usize,
}

impl CleanReport {
    /// Total rows dropped.
    pub fn excluded(&self) -> usize {
        self.missing_title + self.missing_publish_time + self.unparseable_date
    }

    fn record(&mut self, exclusion: Exclusion) {
        match exclusion {
            Exclusion::MissingTitle => self.missing_title += 1,
            Exclusion::MissingPublishTime => self.missing_publish_time += 1,
            Exclusion::UnparseableDate => self.unparseable_date += 1,
        }
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} kept, {} excluded (missing title: {}, missing publish_time: {}, unparseable date: {})",
            self.input,
            self.kept,
            self.excluded(),
            self.missing_title,
            self.missing_publish_time,
            self.unparseable_date
        )
    }
}

/// Validates a single raw row.
pub fn clean_one(raw: &RawRecord) -> Result<ValidatedRecord, Exclusion> {
    let title = raw.title().ok_or(Exclusion::MissingTitle)?;
    let publish_time = raw.publish_time().ok_or(Exclusion::MissingPublishTime)?;
    let abstract_text = raw.abstract_text().unwrap_or_default();
    let publish_date = parse_publish_date(publish_time).ok_or(Exclusion::UnparseableDate)?;

    ValidatedRecord::new(
        title,
        abstract_text,
        publish_date,
        raw.journal().map(str::to_owned),
        raw.source().map(str::to_owned),
    )
    .ok_or(Exclusion::MissingTitle)
}

/// Cleans raw rows, silently dropping those that fail validation.
///
/// The output keeps input order and never holds more records than rows given.
pub fn clean(raw: &[RawRecord]) -> Vec<ValidatedRecord> {
    clean_with_report(raw).0
}

/// Like [`clean`], also returning how many rows were dropped and why.
pub fn clean_with_report(raw: &[RawRecord]) -> (Vec<ValidatedRecord>, CleanReport) {
    let mut report = CleanReport {
        input: raw.len(),
        ..CleanReport::default()
    };
    let mut records = Vec::with_capacity(raw.len());

    for (row, rec) in raw.iter().enumerate() {
        match clean_one(rec) {
            Ok(validated) => records.push(validated),
            Err(exclusion) => {
                debug!(row, ?exclusion, "excluding record");
                report.record(exclusion);
            }
        }
    }

    report.kept = records.len();
    info!(
        input = report.input,
        kept = report.kept,
        excluded = report.excluded(),
        "cleaned metadata"
    );

    (records, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn raw(title: &str, publish_time: &str) -> RawRecord {
        RawRecord::new()
            .with("title", title)
            .with("publish_time", publish_time)
    }

    #[test]
    fn missing_title_excluded() {
        assert_eq!(
            clean_one(&RawRecord::new().with("publish_time", "2020")),
            Err(Exclusion::MissingTitle)
        );
        assert_eq!(clean_one(&raw("", "2020")), Err(Exclusion::MissingTitle));
    }

    #[test]
    fn title_checked_before_date() {
        assert_eq!(clean_one(&raw("", "")), Err(Exclusion::MissingTitle));
    }

    #[test]
    fn missing_date_excluded() {
        assert_eq!(clean_one(&raw("T", "")), Err(Exclusion::MissingPublishTime));
        assert_eq!(
            clean_one(&RawRecord::new().with("title", "T")),
            Err(Exclusion::MissingPublishTime)
        );
    }

    #[test]
    fn bad_date_excluded() {
        assert_eq!(
            clean_one(&raw("T", "not-a-date")),
            Err(Exclusion::UnparseableDate)
        );
    }

    #[test]
    fn missing_abstract_becomes_empty() {
        let r = clean_one(&raw("T", "2020-03-01")).unwrap();
        assert_eq!(r.abstract_text(), "");
        assert_eq!(r.year(), 2020);
    }

    #[test]
    fn optional_columns_carried() {
        let r = clean_one(
            &raw("T", "2021-05-02")
                .with("abstract", "Body text")
                .with("journal", "Lancet")
                .with("source_x", "PMC"),
        )
        .unwrap();
        assert_eq!(r.abstract_text(), "Body text");
        assert_eq!(r.journal(), Some("Lancet"));
        assert_eq!(r.source(), Some("PMC"));
    }

    #[test]
    fn output_is_ordered_subsequence() {
        let input = vec![
            raw("a", "2020"),
            raw("", "2020"),
            raw("b", "2019-01-01"),
            raw("c", "garbage"),
            raw("d", "2021"),
        ];
        let out = clean(&input);
        let titles: Vec<_> = out.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["a", "b", "d"]);
        assert!(out.len() <= input.len());
    }

    #[test]
    fn every_record_holds_invariants() {
        let input = vec![
            raw("a", "2020-02-29"),
            raw("  ", "2020"),
            raw("b", "1 March 2018"),
            raw("c", ""),
        ];
        for r in clean(&input) {
            assert!(!r.title().trim().is_empty());
            assert_eq!(r.year(), r.publish_date().year());
        }
    }

    #[test]
    fn report_counts_each_reason() {
        let input = vec![
            raw("a", "2020"),
            raw("", "2020"),
            raw("b", ""),
            raw("c", "never"),
            raw("d", "??"),
        ];
        let (records, report) = clean_with_report(&input);
        assert_eq!(records.len(), 1);
        assert_eq!(
            report,
            CleanReport {
                input: 5,
                kept: 1,
                missing_title: 1,
                missing_publish_time: 1,
                unparseable_date: 2,
            }
        );
        assert_eq!(report.excluded(), 4);
        assert_eq!(report.input, report.kept + report.excluded());
    }

    #[test]
    fn input_not_mutated() {
        let input = vec![raw("a", " 2020 ")];
        let before = input.clone();
        let _ = clean(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn empty_input() {
        let (records, report) = clean_with_report(&[]);
        assert!(records.is_empty());
        assert_eq!(report, CleanReport::default());
    }
}
