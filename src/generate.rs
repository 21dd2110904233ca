//! Index generation.
//!
//! Drives the whole pipeline for one base directory:
//!
//! ```text
//! list_directories(base) → order_entries(policy) → render(format) → base/index.{html,json}
//! ```
//!
//! The artifact is written straight into the base directory and replaces any
//! previous one. Because it is a file, it never shows up in its own listing.

use crate::config::IndexConfig;
use crate::order::order_entries;
use crate::render::render;
use crate::scan::{self, list_directories};
use crate::types::OutputFormat;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a build produced, for console reporting.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub entries: Vec<String>,
    pub generated: DateTime<Utc>,
}

/// List and order the subdirectories of `base` without writing anything.
pub fn ordered_directories(
    base: &Path,
    config: &IndexConfig,
) -> Result<Vec<String>, scan::ScanError> {
    let names = list_directories(base)?;
    Ok(order_entries(names, config.sort))
}

/// Build the index for `base`, stamped with the current time.
pub fn build_index(base: &Path, config: &IndexConfig) -> Result<BuildReport, GenerateError> {
    build_index_at(base, config, Utc::now())
}

/// Build the index for `base` with an explicit generation time.
pub fn build_index_at(
    base: &Path,
    config: &IndexConfig,
    generated: DateTime<Utc>,
) -> Result<BuildReport, GenerateError> {
    let entries = ordered_directories(base, config)?;
    let content = render(config.format, &entries, generated, config)?;

    let output_path = base.join(config.format.file_name());
    fs::write(&output_path, content).map_err(|source| GenerateError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(BuildReport {
        output_path,
        format: config.format,
        entries,
        generated,
    })
}
