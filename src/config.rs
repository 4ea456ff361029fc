//! Run configuration
//!
//! Everything the driver needs for one run: which series to process, where
//! their documents live, and where reports go. Defaults mirror the upstream
//! release guide; the CLI can override each piece. Nothing here is global
//! state, a `RunConfig` is built per invocation and passed down.

use std::path::PathBuf;

/// Release series processed by default, newest line first
pub const DEFAULT_SERIES: &[&str] = &["7.x", "6.x", "5.x", "4.x"];

/// Document location template; `{series}` is replaced per series
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://docs.aws.amazon.com/emr/latest/ReleaseGuide/emr-release-app-versions-{series}.html";

/// Prefix carried by upstream column labels and re-applied in reports
pub const DEFAULT_COLUMN_PREFIX: &str = "emr-";

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Series identifiers to process, in order
    pub series: Vec<String>,

    /// URL template with a `{series}` placeholder
    pub url_template: String,

    /// Directory reports are written into
    pub output_dir: PathBuf,

    /// Column-label prefix stripped on extraction, re-applied on display
    pub column_prefix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            series: DEFAULT_SERIES.iter().map(|s| s.to_string()).collect(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            output_dir: PathBuf::from("."),
            column_prefix: DEFAULT_COLUMN_PREFIX.to_string(),
        }
    }
}

impl RunConfig {
    /// Resolve the document URL for a series
    pub fn url_for(&self, series: &str) -> String {
        self.url_template.replace("{series}", series)
    }

    /// Path of the report written for a series
    pub fn output_path(&self, series: &str) -> PathBuf {
        self.output_dir.join(format!("emr-{}.html", series))
    }
}
