//! Strategy types shared by the CLI, the config file and the pipeline.
//!
//! Both enums serialize as lowercase strings so the same spelling works in
//! `--sort semver` and in `sort = "semver"`.

use serde::{Deserialize, Serialize};

/// How the listed directory names are ordered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Plain names alphabetically, then `vX.Y.Z` names newest first.
    #[default]
    Semver,
    /// Every name alphabetically (case-sensitive).
    Lexical,
    /// Whatever order the filesystem returned.
    Listing,
}

/// Which artifact gets written into the base directory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// Fixed file name of the artifact for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Html => "index.html",
            OutputFormat::Json => "index.json",
        }
    }
}
