//! bedcheck: BED6 validation against a fixed reference genome.
//!
//! This library checks that a tab-delimited interval file is well-formed
//! BED6 for a closed genome of 15 sequences with known lengths. It is a
//! single-pass checker: read the file, apply an ordered sequence of
//! structural and semantic rules, report the first violation.
//!
//! # Example
//!
//! ```rust,no_run
//! use bedcheck::validate::validate_file;
//!
//! match validate_file("intervals.bed") {
//!     Ok(records) => println!("valid, {} records", records.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod bed;
pub mod record;
pub mod reference;
pub mod validate;

// Re-export commonly used types
pub use record::{Bed6Record, RawRow};
pub use reference::{reference, ReferenceGenome};
pub use validate::{validate_file, validate_str, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
