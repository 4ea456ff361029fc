use thiserror::Error;

/// Error types for version-table acquisition.
///
/// All variants are fatal for the series being fetched and are reported by
/// the driver without aborting the remaining series.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure (connection, timeout, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The document contains no table element
    #[error("no version table found in document")]
    MissingTable,

    /// The table has no header row to derive columns from
    #[error("version table has no header row")]
    MissingHeader,

    /// A row's cell count does not match the column count
    #[error("row for '{application}' has {found} cells, expected {expected}")]
    RowShape {
        application: String,
        expected: usize,
        found: usize,
    },
}
