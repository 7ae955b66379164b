//! Storage backend for the course dataset
//!
//! **Load-Once Design** (frozen collection):
//! - The store is built once from a finished dataset and never mutated
//! - Write pattern: none after construction (no insert/update/delete)
//! - Every query walks the full in-memory collection
//!
//! The loader is the validating collaborator: it rejects malformed rows so
//! the engine can trust every record it is handed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::record::CourseRecord;
use crate::{Error, Result};

/// In-memory store for the course-run dataset.
///
/// Owns the finalized record collection. Construction is the only write;
/// all accessors are read-only, so a shared reference is safe to hand to
/// concurrent callers without locking.
#[derive(Debug, Default)]
pub struct CourseStore {
    records: Vec<CourseRecord>,
}

impl CourseStore {
    /// Create a store from an already-parsed record collection.
    ///
    /// The records are trusted as-is; validation belongs to the ingestion
    /// path that produced them.
    #[must_use]
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV file.
    ///
    /// The first line is a header and is skipped. Each following line is one
    /// course-run in the dataset's fixed 22-column order; quoted cells may
    /// contain commas. Launch dates use the dataset's `M/D/YYYY` form and
    /// the instructors cell is a comma-separated name list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, [`Error::Csv`] if
    /// a line is not well-formed CSV, and [`Error::ParseError`] (with the
    /// 1-based data row number) for rows whose fields do not parse or whose
    /// institution, course number, or subject is empty.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let records = read_records(file)?;
        tracing::debug!(
            rows = records.len(),
            path = %path.as_ref().display(),
            "loaded course dataset"
        );
        Ok(Self { records })
    }

    /// Get all course records in ingestion order.
    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// Get the number of course records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read and validate all data rows from a CSV source.
fn read_records<R: Read>(source: R) -> Result<Vec<CourseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        let row = row?;
        let record: CourseRecord = row
            .deserialize(None)
            .map_err(|e| Error::ParseError(format!("row {row_number}: {e}")))?;
        validate_keys(&record, row_number)?;
        records.push(record);
    }
    Ok(records)
}

/// Reject rows missing a grouping key the engine relies on.
fn validate_keys(record: &CourseRecord, row_number: usize) -> Result<()> {
    let keys = [
        ("institution", record.institution.as_str()),
        ("course number", record.course_number.as_str()),
        ("subject", record.subject.as_str()),
    ];
    for (name, value) in keys {
        if value.trim().is_empty() {
            return Err(Error::ParseError(format!("row {row_number}: empty {name}")));
        }
    }
    Ok(())
}
