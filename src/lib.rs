//! # dir-index
//!
//! Generates an index of the immediate subdirectories of a directory, typically
//! a published documentation root holding one directory per release:
//!
//! ```text
//! docs/
//! ├── api/
//! ├── guide/
//! ├── v1.2.0/
//! ├── v1.10.0/
//! └── index.html   ← written by dir-index
//! ```
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Scan      docs/          →  names            (read-only directory listing)
//! 2. Order     names          →  ordered names    (SortPolicy)
//! 3. Render    ordered names  →  HTML or JSON     (OutputFormat)
//! 4. Write     artifact       →  docs/index.*     (overwrites)
//! ```
//!
//! Stages 2 and 3 are pure, so most tests exercise them without touching the
//! filesystem. The base directory is always passed explicitly; nothing depends
//! on the process working directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists non-hidden subdirectories of the base directory |
//! | [`version`] | `vMAJOR.MINOR.PATCH` recognition and parsing |
//! | [`order`] | Stage 2: applies the selected [`types::SortPolicy`] |
//! | [`render`] | Stage 3: HTML page (Maud) or JSON manifest |
//! | [`generate`] | Runs the pipeline and writes the artifact |
//! | [`config`] | Optional TOML config: strategies, page copy, colors |
//! | [`types`] | Strategy enums shared by CLI, config, and pipeline |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Strategies, Not Variants
//!
//! Sort policy and output format are independent choices. Any combination is
//! reachable from `--sort`/`--format` or the config file; the defaults are the
//! semver-aware ordering and the HTML page.
//!
//! ## Deterministic Ordering
//!
//! Release directories whose version prefixes are equal (`v1.0.0` and
//! `v1.0.0-rc1`) are ordered by name, so the same tree always yields the same
//! index regardless of filesystem enumeration order. Only the explicit
//! `listing` policy exposes enumeration order.

pub mod config;
pub mod generate;
pub mod order;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod test_helpers;
