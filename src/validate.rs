//! BED6 validation against the fixed reference genome.
//!
//! Validation is an ordered sequence of checks over the whole table,
//! short-circuiting on the first violated rule:
//!
//! 1. every row has exactly 6 columns
//! 2. start/end columns are integers
//! 3. start < end for every row
//! 4. every chromosome name belongs to the reference
//! 5. per-row bounds, in file order, first violation reported with its row
//! 6. fixed columns: name == ".", score == 0, strand == "."
//!
//! The bounds check accepts coordinates up to and including the sequence
//! length. Start being allowed to equal the length is unusual for half-open
//! intervals but is the established behavior of this checker; callers
//! depend on it, so it is kept as-is.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::bed::{parse_rows, read_rows};
use crate::record::{Bed6Record, RawRow};
use crate::reference::reference;

/// Errors produced by BED6 validation, one variant per violated rule.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    MalformedStructure(String),

    #[error("start positions must be less than end positions (row {row})")]
    InvalidInterval { row: usize },

    #[error("invalid chromosome name '{chrom}' in the BED file")]
    UnknownChromosome { chrom: String },

    #[error("{coord} position out of bounds for chromosome {chrom} at row {row}")]
    OutOfBounds {
        coord: &'static str,
        chrom: String,
        row: usize,
    },

    #[error("column {column} must have the value '{expected}'")]
    FixedFieldMismatch {
        column: usize,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validate a BED file on disk.
///
/// On success returns the typed records in file order.
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<Vec<Bed6Record>> {
    let rows = read_rows(path)?;
    validate_rows(&rows)
}

/// Validate BED content held in a string (useful for testing).
pub fn validate_str(content: &str) -> Result<Vec<Bed6Record>> {
    validate_rows(&parse_rows(content))
}

/// Run the ordered check sequence over raw rows.
pub fn validate_rows(rows: &[RawRow]) -> Result<Vec<Bed6Record>> {
    if rows.is_empty() {
        return Err(ValidationError::MalformedStructure(
            "no data rows found in the BED file".to_string(),
        ));
    }

    // Structure: exactly 6 columns per row.
    for row in rows {
        if row.fields.len() != 6 {
            return Err(ValidationError::MalformedStructure(format!(
                "BED6 file must have exactly 6 columns (row {} has {})",
                row.row,
                row.fields.len()
            )));
        }
    }

    // Types: start and end must be integers across all rows.
    let mut coords: Vec<(i64, i64)> = Vec::with_capacity(rows.len());
    for row in rows {
        let start = parse_coord(&row.fields[1], row)?;
        let end = parse_coord(&row.fields[2], row)?;
        coords.push((start, end));
    }

    // Ordering: start < end for every row.
    for (row, &(start, end)) in rows.iter().zip(&coords) {
        if start >= end {
            return Err(ValidationError::InvalidInterval { row: row.row });
        }
    }

    // Chromosome names must belong to the reference.
    let genome = reference();
    for row in rows {
        if !genome.has_chrom(&row.fields[0]) {
            return Err(ValidationError::UnknownChromosome {
                chrom: row.fields[0].clone(),
            });
        }
    }

    // Per-row bounds, in file order, first violation wins. Coordinates equal
    // to the sequence length are accepted.
    for (row, &(start, end)) in rows.iter().zip(&coords) {
        let chrom = row.fields[0].as_str();
        // Name was checked above, so the lookup cannot miss.
        let len = genome
            .chrom_size(chrom)
            .expect("chromosome verified against reference") as i64;

        if start < 0 || start > len {
            return Err(ValidationError::OutOfBounds {
                coord: "start",
                chrom: chrom.to_string(),
                row: row.row,
            });
        }
        if end < 0 || end > len {
            return Err(ValidationError::OutOfBounds {
                coord: "end",
                chrom: chrom.to_string(),
                row: row.row,
            });
        }
    }

    // Fixed columns, checked whole-column in order: name, score, strand.
    for row in rows {
        if row.fields[3] != "." {
            return Err(ValidationError::FixedFieldMismatch {
                column: 4,
                expected: ".",
            });
        }
    }
    for row in rows {
        if row.fields[4].parse::<i64>() != Ok(0) {
            return Err(ValidationError::FixedFieldMismatch {
                column: 5,
                expected: "0",
            });
        }
    }
    for row in rows {
        if row.fields[5] != "." {
            return Err(ValidationError::FixedFieldMismatch {
                column: 6,
                expected: ".",
            });
        }
    }

    // Everything passed, so typed construction cannot fail.
    let records = rows
        .iter()
        .zip(&coords)
        .map(|(row, &(start, end))| {
            Bed6Record::new(row.fields[0].clone(), start, end, ".", 0, ".")
        })
        .collect();

    Ok(records)
}

fn parse_coord(s: &str, row: &RawRow) -> Result<i64> {
    s.parse().map_err(|_| {
        ValidationError::MalformedStructure(format!(
            "start and end columns must be integers (row {}: '{}')",
            row.row, s
        ))
    })
}
