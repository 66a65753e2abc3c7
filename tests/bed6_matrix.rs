//! End-to-end validation matrix for the bedcheck binary.
//!
//! Tests cover:
//! 1. Valid files and exit code 0
//! 2. Each failure class, its exit code, and its stderr message
//! 3. The boundary-equality quirk (coordinate == sequence length passes)
//! 4. Usage errors

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Helper to create a temporary BED file.
fn create_bed_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Helper to run bedcheck and return output.
fn run_bedcheck(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--release", "--"])
        .args(args)
        .output()
        .expect("Failed to run bedcheck")
}

fn run_on(file: &NamedTempFile) -> Output {
    run_bedcheck(&[file.path().to_str().unwrap()])
}

/// Helper to get stderr as string.
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Helper to get stdout as string.
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// =============================================================================
// Valid input
// =============================================================================

#[test]
fn test_valid_single_record() {
    let bed = create_bed_file("CP003820.1\t100\t200\t.\t0\t.\n");
    let output = run_on(&bed);
    assert!(output.status.success(), "valid BED6 should pass");
    assert!(stdout(&output).contains("BED file is valid."));
}

#[test]
fn test_valid_with_comments() {
    let bed = create_bed_file("# header\nCP003820.1\t100\t200\t.\t0\t.\n");
    let output = run_on(&bed);
    assert!(output.status.success());
}

#[test]
fn test_end_at_sequence_length_passes() {
    // CP003834.1 is 24919 bp; end exactly at the length is accepted.
    let bed = create_bed_file("CP003834.1\t0\t24919\t.\t0\t.\n");
    let output = run_on(&bed);
    assert!(output.status.success());
}

// =============================================================================
// Failure classes
// =============================================================================

#[test]
fn test_wrong_column_count_fails() {
    let bed = create_bed_file("CP003820.1\t100\t200\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("exactly 6 columns"));
}

#[test]
fn test_non_integer_coordinate_fails() {
    let bed = create_bed_file("CP003820.1\tone\t200\t.\t0\t.\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must be integers"));
}

#[test]
fn test_start_after_end_fails() {
    let bed = create_bed_file("CP003820.1\t200\t100\t.\t0\t.\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("less than"));
}

#[test]
fn test_unknown_chromosome_fails() {
    let bed = create_bed_file("chrX\t100\t200\t.\t0\t.\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("chrX"));
}

#[test]
fn test_end_past_sequence_length_fails_with_row() {
    let bed = create_bed_file("CP003834.1\t0\t24920\t.\t0\t.\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("out of bounds"));
    assert!(err.contains("CP003834.1"));
    assert!(err.contains("row 1"));
}

#[test]
fn test_score_mismatch_reports_column_5() {
    let bed = create_bed_file("CP003820.1\t100\t200\t.\t1\t.\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("column 5"));
}

#[test]
fn test_strand_mismatch_reports_column_6() {
    let bed = create_bed_file("CP003820.1\t100\t200\t.\t0\t+\n");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("column 6"));
}

#[test]
fn test_missing_file_fails() {
    let output = run_bedcheck(&["/no/such/file.bed"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_empty_file_fails() {
    let bed = create_bed_file("");
    let output = run_on(&bed);
    assert_eq!(output.status.code(), Some(1));
}

// =============================================================================
// Usage
// =============================================================================

#[test]
fn test_no_arguments_is_usage_error() {
    let output = run_bedcheck(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).to_lowercase().contains("usage"));
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    let output = run_bedcheck(&["a.bed", "b.bed"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_rerun_same_outcome() {
    let bed = create_bed_file("CP003820.1\t100\t200\t.\t0\t.\n");
    assert!(run_on(&bed).status.success());
    assert!(run_on(&bed).status.success());
}
