//! Data types for acquired version tables
//!
//! This is the contract between acquisition and the classifier/renderer core:
//! an ordered list of release columns plus one row per application, each row
//! carrying exactly one cell per column.

use serde::Serialize;

/// One application's row in the version table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRow {
    /// Application name (e.g., "Spark"), unique within a series
    pub application: String,

    /// Cell values, one per column, newest release first.
    /// Either a version string or the not-available sentinel.
    pub cells: Vec<String>,
}

impl VersionRow {
    /// Create a row from an application name and its cells
    pub fn new(application: &str, cells: &[&str]) -> Self {
        Self {
            application: application.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A fully extracted version table for one release series.
///
/// Column order is newest-to-oldest and is load-bearing: "previous" always
/// means the next column to the right. Every row holds exactly
/// `columns.len()` cells; acquisition rejects documents that violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionTable {
    /// Release labels, newest first, with the upstream column prefix stripped
    pub columns: Vec<String>,

    /// Application rows in document order
    pub rows: Vec<VersionRow>,
}

impl VersionTable {
    /// Number of releases in the series
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of applications in the table
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
