//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! ==> Scanning docs
//! Generated docs/index.html (4 directories)
//! ```
//!
//! ## List
//!
//! The header goes to stderr so stdout carries only the listing.
//!
//! ```text
//! 001 api/
//! 002 guide/
//! 003 v2.0.0/
//! 004 v1.0.0/
//! 4 directories
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure and do no I/O.

use crate::generate::BuildReport;
use crate::render::entry_count;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Progress
// ============================================================================

pub fn format_scan_header(base: &Path) -> String {
    format!("==> Scanning {}", base.display())
}

pub fn print_scan_header(base: &Path) {
    println!("{}", format_scan_header(base));
}

pub fn eprint_scan_header(base: &Path) {
    eprintln!("{}", format_scan_header(base));
}

// ============================================================================
// Build
// ============================================================================

/// Confirmation after the artifact was written.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    vec![format!(
        "Generated {} ({})",
        report.output_path.display(),
        entry_count(report.entries.len())
    )]
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// List
// ============================================================================

/// Ordered listing as it would appear in the index, plus a count line.
pub fn format_list_output(entries: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} {}/", format_index(i + 1), name))
        .collect();
    lines.push(entry_count(entries.len()));
    lines
}

pub fn print_list_output(entries: &[String]) {
    for line in format_list_output(entries) {
        println!("{}", line);
    }
}
