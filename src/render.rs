//! Index rendering.
//!
//! Stage 3 of the index pipeline. Turns the ordered directory list and a
//! generation timestamp into the artifact selected by [`OutputFormat`].
//!
//! ## HTML
//!
//! A single self-contained page: heading, optional intro paragraph, entry
//! count, one `name/` link per directory, and a footer with the generation
//! time. Styles are embedded; colors come from the config as CSS custom
//! properties with a dark-mode override.
//!
//! Uses [maud](https://maud.lambda.xyz/) so directory names are escaped
//! automatically.
//!
//! ## JSON
//!
//! ```json
//! {
//!   "directories": ["api", "guide", "v2.0.0", "v1.0.0"],
//!   "generated": "2024-05-01T12:30:45.000Z"
//! }
//! ```

use crate::config::{self, ColorConfig, HtmlConfig, IndexConfig};
use crate::types::OutputFormat;
use chrono::{DateTime, SecondsFormat, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

const CSS_STATIC: &str = include_str!("../static/style.css");

/// The JSON artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexManifest {
    pub directories: Vec<String>,
    /// RFC 3339 UTC timestamp, millisecond precision, `Z` suffix.
    pub generated: String,
}

impl IndexManifest {
    pub fn new(directories: Vec<String>, generated: DateTime<Utc>) -> Self {
        Self {
            directories,
            generated: iso_timestamp(generated),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// Render `entries` in the given format.
pub fn render(
    format: OutputFormat,
    entries: &[String],
    generated: DateTime<Utc>,
    config: &IndexConfig,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Html => Ok(render_html(entries, generated, &config.html, &config.colors)),
        OutputFormat::Json => render_json(entries, generated),
    }
}

pub fn render_json(entries: &[String], generated: DateTime<Utc>) -> serde_json::Result<String> {
    IndexManifest::new(entries.to_vec(), generated).to_json()
}

pub fn render_html(
    entries: &[String],
    generated: DateTime<Utc>,
    page: &HtmlConfig,
    colors: &ColorConfig,
) -> String {
    let css = format!("{}\n\n{}", config::generate_color_css(colors), CSS_STATIC);

    let content = html! {
        main.index-page {
            header.index-header {
                h1 { (page.heading) }
                @if !page.intro.is_empty() {
                    p.index-intro { (page.intro) }
                }
                p.entry-count { (entry_count(entries.len())) }
            }
            @if entries.is_empty() {
                p.empty-state { "No directories found." }
            } @else {
                ul.entry-list {
                    @for name in entries {
                        li {
                            a href=(entry_href(name)) { (name) "/" }
                        }
                    }
                }
            }
            footer.index-footer {
                p.generated {
                    "Generated "
                    time datetime=(iso_timestamp(generated)) { (human_timestamp(generated)) }
                }
            }
        }
    };

    base_document(&page.title, &css, content).into_string()
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// "N directories", singular for one.
pub(crate) fn entry_count(n: usize) -> String {
    match n {
        1 => "1 directory".to_string(),
        n => format!("{n} directories"),
    }
}

/// Relative link to a directory. Characters that would end the path
/// component early are percent-encoded, and so is `:` so that a name like
/// `javascript:x` or `c:` cannot be read as a URL scheme.
fn entry_href(name: &str) -> String {
    let encoded = name
        .replace('%', "%25")
        .replace('#', "%23")
        .replace('?', "%3F")
        .replace(':', "%3A");
    format!("{encoded}/")
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn human_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
