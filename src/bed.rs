//! BED file reader.
//!
//! Reads tab-delimited lines into raw rows without interpreting them.
//! All structural and semantic checks live in [`crate::validate`]; this
//! layer only splits lines and skips comments.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::record::RawRow;

/// A BED file reader producing raw tab-split rows.
pub struct BedReader<R: Read> {
    reader: BufReader<R>,
    row: usize,
    buffer: String,
}

impl BedReader<File> {
    /// Open a BED file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> BedReader<R> {
    /// Create a new BED reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            row: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next data row, skipping blank lines and `#` comments.
    pub fn read_row(&mut self) -> io::Result<Option<RawRow>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }

            let line = self.buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            self.row += 1;
            let fields = line.split('\t').map(|s| s.to_string()).collect();
            return Ok(Some(RawRow::new(self.row, fields)));
        }
    }
}

/// Read all data rows from a BED file.
pub fn read_rows<P: AsRef<Path>>(path: P) -> io::Result<Vec<RawRow>> {
    let mut reader = BedReader::from_path(path)?;
    let mut rows = Vec::new();
    while let Some(row) = reader.read_row()? {
        rows.push(row);
    }
    Ok(rows)
}

/// Parse rows from a string (useful for testing).
pub fn parse_rows(content: &str) -> Vec<RawRow> {
    let mut reader = BedReader::new(content.as_bytes());
    let mut rows = Vec::new();
    // Reading from an in-memory buffer cannot fail.
    while let Some(row) = reader.read_row().expect("in-memory read") {
        rows.push(row);
    }
    rows
}
