use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::pkg::internal::adaptors::players::spec::{PlayerRecord, TABLE_HEADER};
use crate::prelude::Result;

/// Append-only CSV table holding one row per player.
///
/// The whole table is read on every access and rows are only ever appended;
/// there is no update or delete. Concurrent writers are out of scope.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the table with its header row if it does not exist yet (or was
    /// left behind empty).
    pub fn initialize(&self) -> Result<()> {
        if self.path.exists() && fs::metadata(&self.path)?.len() > 0 {
            return Ok(());
        }
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(TABLE_HEADER)?;
        writer.flush()?;
        tracing::info!("player table created at {}", self.path.display());
        Ok(())
    }

    /// Appends one record, creating the table first when needed.
    pub fn append(&self, record: &PlayerRecord) -> Result<()> {
        self.initialize()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads the whole table into memory; an absent file reads as an empty
    /// table rather than an error.
    pub fn load_all(&self) -> Result<Vec<PlayerRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::players::spec::sample_record;

    #[test]
    fn absent_file_reads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("missing.csv"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn initialize_writes_the_fixed_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("table.csv"));
        store.initialize().unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, TABLE_HEADER.join(","));
        // re-running must not truncate an existing table
        store.append(&sample_record("A")).unwrap();
        store.initialize().unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn serialized_row_matches_the_declared_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_record("B")).unwrap();
        let bytes = writer.into_inner().unwrap();
        let content = String::from_utf8(bytes).unwrap();
        assert_eq!(content.lines().next().unwrap(), TABLE_HEADER.join(","));
    }

    #[test]
    fn single_record_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("table.csv"));
        let record = sample_record("Juan Pérez");
        store.append(&record).unwrap();
        let rows = store.load_all().unwrap();
        assert_eq!(rows, vec![record]);
    }

    #[test]
    fn appended_rows_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("table.csv"));
        for name in ["A", "B", "C"] {
            store.append(&sample_record(name)).unwrap();
        }
        let rows = store.load_all().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn empty_optional_fields_round_trip_as_empty_markers() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("table.csv"));
        let mut record = sample_record("C");
        record.agent = String::new();
        record.secondary_position = String::new();
        record.photo_path = String::new();
        store.append(&record).unwrap();
        let rows = store.load_all().unwrap();
        assert_eq!(rows[0].agent, "");
        assert_eq!(rows[0].secondary_position, "");
        assert_eq!(rows[0].photo(), None);
    }
}
