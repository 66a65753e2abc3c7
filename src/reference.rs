//! The fixed reference genome.
//!
//! The validator targets a single closed genome of 15 sequences whose
//! accessions and lengths are known at build time. There is no genome file
//! to load and no configuration: the table below is the whole domain.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Accession -> sequence length, in assembly order.
const SEQUENCES: [(&str, u64); 15] = [
    ("CP003820.1", 2291499),
    ("CP003821.1", 1621675),
    ("CP003822.1", 1575141),
    ("CP003823.1", 1084805),
    ("CP003824.1", 1814975),
    ("CP003825.1", 1422463),
    ("CP003826.1", 1399503),
    ("CP003827.1", 1398693),
    ("CP003828.1", 1186808),
    ("CP003829.1", 1059964),
    ("CP003830.1", 1561994),
    ("CP003831.1", 774062),
    ("CP003832.1", 756744),
    ("CP003833.2", 942867),
    ("CP003834.1", 24919),
];

/// Immutable chromosome size lookup for the fixed reference genome.
#[derive(Debug)]
pub struct ReferenceGenome {
    sizes: HashMap<&'static str, u64>,
}

impl ReferenceGenome {
    fn build() -> Self {
        Self {
            sizes: SEQUENCES.iter().copied().collect(),
        }
    }

    /// Get the length of a sequence, or `None` if the name is unknown.
    #[inline]
    pub fn chrom_size(&self, chrom: &str) -> Option<u64> {
        self.sizes.get(chrom).copied()
    }

    /// Check if a sequence name belongs to the reference.
    #[inline]
    pub fn has_chrom(&self, chrom: &str) -> bool {
        self.sizes.contains_key(chrom)
    }

    /// Get all sequence names in assembly order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &'static str> {
        SEQUENCES.iter().map(|(name, _)| *name)
    }

    /// Number of sequences in the reference.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// The process-wide reference genome, built on first use.
pub fn reference() -> &'static ReferenceGenome {
    static REFERENCE: OnceLock<ReferenceGenome> = OnceLock::new();
    REFERENCE.get_or_init(ReferenceGenome::build)
}
