//! Shared test utilities for the dir-index test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_tree(&[".git", "api", "v1.0.0"], &["README.md"]);
//! let names = sorted(list_directories(tmp.path()).unwrap());
//! assert_eq!(names, vec!["api", "v1.0.0"]);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory containing the given subdirectories and files.
///
/// Directory entries may be nested (`"v1.0.0/api"`); files are written with
/// placeholder content and their parent directories are created as needed.
pub fn setup_tree(dirs: &[&str], files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    for file in files {
        let path = tmp.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "placeholder").unwrap();
    }
    tmp
}

/// Fixed generation time so rendered output is reproducible.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
}

// =========================================================================
// Comparison helpers
// =========================================================================

/// Sort a listing so filesystem enumeration order doesn't leak into asserts.
pub fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

/// Owned names from string literals.
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Position of `needle` in `haystack`. Panics with context if absent.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output:\n{haystack}"))
}
