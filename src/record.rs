//! Core record types for BED6 validation.

use std::fmt;

/// A fully validated BED6 record.
///
/// Coordinates are signed so that negative values survive parsing and are
/// rejected by the bounds check rather than the type check, matching the
/// behavior of integer-typed columns in tabular readers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bed6Record {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
    pub name: String,
    pub score: i64,
    pub strand: String,
}

impl Bed6Record {
    /// Create a new BED6 record.
    pub fn new(
        chrom: impl Into<String>,
        start: i64,
        end: i64,
        name: impl Into<String>,
        score: i64,
        strand: impl Into<String>,
    ) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
            score,
            strand: strand.into(),
        }
    }

    /// Returns the length of the interval.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Returns true if the interval has zero or negative length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for Bed6Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.name, self.score, self.strand
        )
    }
}

/// One data line from a BED file, tab-split but not yet validated.
///
/// `row` is the 1-based record ordinal among data lines; comment and blank
/// lines do not advance it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(row: usize, fields: Vec<String>) -> Self {
        Self { row, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let rec = Bed6Record::new("CP003820.1", 100, 200, ".", 0, ".");
        assert_eq!(rec.to_string(), "CP003820.1\t100\t200\t.\t0\t.");
    }

    #[test]
    fn test_record_len() {
        let rec = Bed6Record::new("CP003820.1", 100, 200, ".", 0, ".");
        assert_eq!(rec.len(), 100);
        assert!(!rec.is_empty());
    }

    #[test]
    fn test_empty_record() {
        let rec = Bed6Record::new("CP003820.1", 200, 200, ".", 0, ".");
        assert!(rec.is_empty());
    }
}
