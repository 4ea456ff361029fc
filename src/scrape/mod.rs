//! Version table acquisition
//!
//! Fetches one release guide document per series and extracts its
//! application-version table into the `VersionTable` data model. Everything
//! downstream (classification, rendering) consumes that model through the
//! `VersionSource` trait and never touches HTTP or HTML directly, so the
//! core is testable with fixture tables.

mod client;
mod error;
mod table;
mod types;

pub use client::HttpSource;
pub use error::ScrapeError;
pub use types::{VersionRow, VersionTable};

/// Supplies the version table for a release series.
///
/// Implementations may fail per series (network, document shape); the driver
/// isolates failures so one series never blocks the others.
pub trait VersionSource {
    fn fetch(&self, series: &str) -> Result<VersionTable, ScrapeError>;
}
