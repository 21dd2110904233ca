//! Directory listing.
//!
//! Stage 1 of the index pipeline: enumerate the immediate children of the base
//! directory and keep the ones that should appear in the index.
//!
//! ```text
//! docs/
//! ├── .git/          # hidden, skipped
//! ├── api/           # listed
//! ├── guide/         # listed
//! ├── v1.0.0/        # listed
//! ├── v2.0.0 -> v2/  # symlink to a directory, listed
//! ├── index.html     # file, skipped
//! └── broken -> nope # dangling symlink, skipped
//! ```
//!
//! ## Failure Tiers
//!
//! - The base directory itself must be readable. If it isn't, [`list_directories`]
//!   returns [`ScanError::ReadDir`] and nothing is listed.
//! - Anything that goes wrong for a single entry (it vanished, it can't be
//!   stat'ed, its name is not UTF-8) just drops that entry.
//!
//! No recursion, no sorting: ordering is the job of [`crate::order`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the non-hidden subdirectories of `base`, in filesystem order.
pub fn list_directories(base: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(base).map_err(|source| ScanError::ReadDir {
        path: base.to_path_buf(),
        source,
    })?;

    let names = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            if is_hidden(&name) || !is_directory(&e.path()) {
                return None;
            }
            Some(name)
        })
        .collect();

    Ok(names)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Follows symlinks. A failed stat counts as "not a directory".
fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
