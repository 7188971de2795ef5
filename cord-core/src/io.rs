//! CSV adapters around the core: the raw export loader and the snapshot
//! writer/reader.
//!
//! The core itself only sees `RawRecord` and `ValidatedRecord` values; these
//! functions are the narrow bridge to files.
//!
//! Snapshot schema, one row per record:
//!
//! ```text
//! title,abstract,publish_time,journal,source,year,abstract_word_count,title_word_count
//! ```
//!
//! `publish_time` is written as `YYYY-MM-DD`; `journal` and `source` are empty
//! when absent.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use cord_types::RawRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::record::ValidatedRecord;

/// Errors from reading or writing CSV files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Opening, creating or flushing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV, or a snapshot field of the wrong type.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A snapshot row violates a record invariant.
    #[error("invalid snapshot row {row}: {reason}")]
    InvalidSnapshotRow {
        /// Zero-based data row, header excluded.
        row: usize,
        /// Which invariant failed.
        reason: &'static str,
    },
}

/// Reads a headed CSV export into raw records.
///
/// Every column is kept under its trimmed header name. Rows shorter than the
/// header simply lack the trailing columns.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let mut records: Vec<RawRecord> = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect(),
        );
    }
    Ok(records)
}

/// Opens `path` and reads it with [`read_raw_records`].
pub fn load_raw_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, IoError> {
    let path = path.as_ref();
    let records = read_raw_records(File::open(path)?)?;
    info!(path = %path.display(), rows = records.len(), "loaded raw metadata");
    Ok(records)
}

/// Snapshot header, in column order.
pub const SNAPSHOT_COLUMNS: [&str; 8] = [
    "title",
    "abstract",
    "publish_time",
    "journal",
    "source",
    "year",
    "abstract_word_count",
    "title_word_count",
];

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRow {
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    publish_time: NaiveDate,
    journal: Option<String>,
    source: Option<String>,
    year: i32,
    abstract_word_count: usize,
    title_word_count: usize,
}

impl From<&ValidatedRecord> for SnapshotRow {
    fn from(r: &ValidatedRecord) -> Self {
        Self {
            title: r.title().to_owned(),
            abstract_text: r.abstract_text().to_owned(),
            publish_time: r.publish_date(),
            journal: r.journal().map(str::to_owned),
            source: r.source().map(str::to_owned),
            year: r.year(),
            abstract_word_count: r.abstract_word_count(),
            title_word_count: r.title_word_count(),
        }
    }
}

/// Writes records as a flat snapshot table.
///
/// The header row is always written, so an empty record set still yields a
/// readable table.
pub fn write_snapshot<W: Write>(records: &[ValidatedRecord], writer: W) -> Result<(), IoError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(SNAPSHOT_COLUMNS)?;
    for r in records {
        csv_writer.serialize(SnapshotRow::from(r))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the snapshot to it.
pub fn save_snapshot(records: &[ValidatedRecord], path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    write_snapshot(records, File::create(path)?)?;
    info!(path = %path.display(), records = records.len(), "wrote snapshot");
    Ok(())
}

/// Reads a snapshot written by [`write_snapshot`].
///
/// Rows go back through the record constructor and word counts are derived
/// again, so a hand-edited snapshot cannot smuggle in a blank title or a
/// `year` that disagrees with `publish_time`.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Vec<ValidatedRecord>, IoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in csv_reader.deserialize::<SnapshotRow>().enumerate() {
        let snap = result?;
        if snap.year != snap.publish_time.year() {
            return Err(IoError::InvalidSnapshotRow {
                row,
                reason: "year does not match publish_time",
            });
        }
        let record = ValidatedRecord::new(
            snap.title,
            snap.abstract_text,
            snap.publish_time,
            snap.journal,
            snap.source,
        )
        .ok_or(IoError::InvalidSnapshotRow {
            row,
            reason: "blank title",
        })?;
        records.push(record.enriched());
    }
    Ok(records)
}

/// Opens `path` and reads it with [`read_snapshot`].
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<ValidatedRecord>, IoError> {
    let path = path.as_ref();
    let records = read_snapshot(File::open(path)?)?;
    info!(path = %path.display(), records = records.len(), "loaded snapshot");
    Ok(records)
}
