//! Line-delimited JSON record writing.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::pipelines::qarecords::types::PageRecord;

/// Append-only writer: one JSON document per line.
///
/// Appends, never truncates: multiple batches targeting the same file stack
/// up, deduplication across re-crawls is a downstream concern.
pub struct RecordWriter {
    file: File,
}

impl RecordWriter {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().create(true).append(true).open(dst)?;
        Ok(Self { file })
    }

    /// Append a single record line.
    pub fn write_single(&mut self, record: &PageRecord) -> Result<(), Error> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Append records in bulk, one line each.
    pub fn write(&mut self, records: Vec<PageRecord>) -> Result<(), Error> {
        let mut lines = String::new();
        for record in records {
            lines += &serde_json::to_string(&record)?;
            lines.push('\n');
        }
        self.file.write_all(lines.as_bytes())?;
        Ok(())
    }
}
