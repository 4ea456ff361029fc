//! HTTP acquisition of release guide documents

use std::time::Duration;

use log::debug;

use super::error::ScrapeError;
use super::table;
use super::types::VersionTable;
use super::VersionSource;

/// Fetches and extracts version tables from the release guide site.
///
/// One blocking GET per series, no retry. The URL template must contain a
/// `{series}` placeholder.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url_template: String,
    column_prefix: String,
}

impl HttpSource {
    /// Create a source for the given URL template and column-label prefix
    pub fn new(url_template: &str, column_prefix: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url_template: url_template.to_string(),
            column_prefix: column_prefix.to_string(),
        })
    }

    /// Resolve the document URL for a series
    pub fn url_for(&self, series: &str) -> String {
        self.url_template.replace("{series}", series)
    }
}

impl VersionSource for HttpSource {
    fn fetch(&self, series: &str) -> Result<VersionTable, ScrapeError> {
        let url = self.url_for(series);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::Status { url, status });
        }

        let body = response.text()?;
        debug!("fetched {} bytes for series {}", body.len(), series);

        table::extract(&body, &self.column_prefix)
    }
}
