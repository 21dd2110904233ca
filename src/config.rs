//! Index configuration.
//!
//! Everything has a built-in default, so a config file is optional and only
//! read when passed with `--config`. Command-line flags override whatever the
//! file says.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! sort = "semver"           # semver | lexical | listing
//! format = "html"           # html | json
//!
//! [html]
//! title = "Documentation Index"   # <title> of the page
//! heading = "Documentation"       # <h1> of the page
//! intro = ""                      # Paragraph under the heading (empty = none)
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! muted = "#666666"         # Entry count, empty-state line, footer
//! border = "#e0e0e0"
//! link = "#0b57d0"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! muted = "#999999"
//! border = "#333333"
//! link = "#8ab4f8"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want; a partial
//! `[colors.dark]` table keeps the dark defaults for the rest:
//!
//! ```toml
//! format = "json"
//!
//! [colors.dark]
//! link = "#ffcc00"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{OutputFormat, SortPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration for one index build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Ordering strategy for the listed directories.
    pub sort: SortPolicy,
    /// Artifact to write (`index.html` or `index.json`).
    pub format: OutputFormat,
    /// Page copy for the HTML artifact.
    pub html: HtmlConfig,
    /// Color schemes for the HTML artifact.
    pub colors: ColorConfig,
}

impl IndexConfig {
    /// Validate values that end up inside the generated page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.html.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "html.title must not be empty".into(),
            ));
        }
        if self.html.heading.trim().is_empty() {
            return Err(ConfigError::Validation(
                "html.heading must not be empty".into(),
            ));
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (key, _, value) in scheme.entries() {
                if value.trim().is_empty() || value.contains([';', '{', '}', '<', '>']) {
                    return Err(ConfigError::Validation(format!(
                        "colors.{mode}.{key} is not a valid CSS color: {value:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Page copy for the HTML index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Document `<title>`.
    pub title: String,
    /// Page `<h1>`.
    pub heading: String,
    /// Optional paragraph under the heading. Empty means no paragraph.
    pub intro: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Documentation Index".to_string(),
            heading: "Documentation".to_string(),
            intro: String::new(),
        }
    }
}

/// Light and dark palettes. The dark one applies under
/// `prefers-color-scheme: dark`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// One palette. Each field feeds one `--color-*` property in the page CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Entry count, empty-state line and footer.
    pub muted: String,
    /// Header rule and entry separators.
    pub border: String,
    pub link: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#0b57d0".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#8ab4f8".to_string(),
        }
    }

    /// `(config key, CSS property, value)` for every color.
    fn entries(&self) -> [(&'static str, &'static str, &str); 5] {
        [
            ("background", "--color-bg", self.background.as_str()),
            ("text", "--color-text", self.text.as_str()),
            ("muted", "--color-muted", self.muted.as_str()),
            ("border", "--color-border", self.border.as_str()),
            ("link", "--color-link", self.link.as_str()),
        ]
    }

    fn declarations(&self, indent: &str) -> String {
        self.entries()
            .iter()
            .map(|(_, property, value)| format!("{indent}{property}: {value};\n"))
            .collect()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Lay `overlay` over `base` in place. Tables merge key by key; any other
/// overlay value replaces what was there.
///
/// Needed because a sparse `[colors.dark]` table must keep the dark defaults
/// for the keys it leaves out, which `#[serde(default)]` alone cannot express.
fn overlay_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(table), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match table.get_mut(&key) {
                    Some(slot) => overlay_toml(slot, value),
                    None => {
                        table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Parse a config file's text. Missing keys take the values from
/// [`stock_config_toml`]; the result is validated.
pub fn parse_config(content: &str) -> Result<IndexConfig, ConfigError> {
    let mut merged: toml::Value = toml::from_str(stock_config_toml())?;
    overlay_toml(&mut merged, toml::from_str(content)?);
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`.
///
/// A missing file is an error: the path was asked for explicitly.
pub fn load_config(path: &Path) -> Result<IndexConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load `path` if given, otherwise the built-in defaults.
pub fn load_optional_config(path: Option<&Path>) -> Result<IndexConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(IndexConfig::default()),
    }
}

/// The `gen-config` output: every key at its default, with comments.
/// Also the base layer that [`parse_config`] fills missing keys from.
pub fn stock_config_toml() -> &'static str {
    r##"# dir-index Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass this file with `dir-index --config <file>`. Command-line flags
# (--sort, --format) override the values set here.
# Unknown keys will cause an error.

# How subdirectories are ordered:
#   semver  - named directories A-Z, then vX.Y.Z directories newest first
#   lexical - every directory A-Z (case-sensitive)
#   listing - the order the filesystem returns them in
sort = "semver"

# Which file is written into the scanned directory:
#   html - index.html, a page linking to every directory
#   json - index.json, {"directories": [...], "generated": "<timestamp>"}
format = "html"

# ---------------------------------------------------------------------------
# HTML page copy
# ---------------------------------------------------------------------------
[html]
title = "Documentation Index"
heading = "Documentation"
# Paragraph shown under the heading. Leave empty for none.
intro = ""

# ---------------------------------------------------------------------------
# Page colors. Any CSS color value works.
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
muted = "#666666"         # Entry count, empty-state line, footer
border = "#e0e0e0"
link = "#0b57d0"

# Used when the browser prefers a dark color scheme.
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
muted = "#999999"
border = "#333333"
link = "#8ab4f8"
"##
}

/// CSS custom properties for both palettes.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}    }}\n}}\n",
        colors.light.declarations("    "),
        colors.dark.declarations("        "),
    )
}
