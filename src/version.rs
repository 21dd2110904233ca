//! Release-directory name recognition.
//!
//! Versioned documentation lives in directories named after the release tag:
//! a literal `v` followed by three dot-separated numbers. Anything after the
//! patch number is allowed and ignored:
//!
//! - `v1.2.3` → 1.2.3
//! - `v2.0.0-rc.1` → 2.0.0
//! - `v1.007.0` → 1.7.0 (leading zeros are plain decimal)
//! - `1.2.3`, `v1.2`, `V1.2.3`, `latest` → not versioned
//!
//! Matching and parsing use the same pattern, so a name is versioned exactly
//! when [`parse_version`] returns `Some`.

use regex::Regex;
use std::sync::LazyLock;

static VERSION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)").expect("version pattern must compile")
});

/// Numeric triple parsed from a `vMAJOR.MINOR.PATCH` prefix.
///
/// Field order gives the derived `Ord` major → minor → patch precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Parse the version prefix of a directory name.
///
/// Returns `None` when the name does not start with `v<int>.<int>.<int>`, or
/// when a group is too large for `u64`.
pub fn parse_version(name: &str) -> Option<ParsedVersion> {
    let caps = VERSION_PREFIX.captures(name)?;
    Some(ParsedVersion {
        major: caps[1].parse().ok()?,
        minor: caps[2].parse().ok()?,
        patch: caps[3].parse().ok()?,
    })
}

/// Whether a directory name looks like a release tag.
pub fn is_versioned(name: &str) -> bool {
    parse_version(name).is_some()
}
