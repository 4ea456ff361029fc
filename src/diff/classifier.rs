//! Version change classifier
//!
//! Compares a cell against its neighbor one release older and assigns a
//! `ChangeKind`. The comparison is purely local: it looks at exactly two
//! cell strings and nothing else, never fails, and degrades to
//! `Unavailable` for any pair it cannot compare.

use regex::Regex;

use super::types::{ChangeKind, ChangeSummary, Version, NOT_AVAILABLE};
use crate::scrape::VersionTable;

/// Classifies version changes between adjacent releases
pub struct VersionClassifier {
    version_pattern: Regex,
}

impl Default for VersionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionClassifier {
    /// Create a classifier with the compiled version pattern
    pub fn new() -> Self {
        Self {
            // First major.minor.patch group anywhere in the cell text;
            // surrounding free text is ignored.
            version_pattern: Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("Invalid version pattern regex"),
        }
    }

    /// Extract the first three-component version embedded in `text`.
    ///
    /// Returns `None` when no `d.d.d` group is present; callers treat that
    /// as a non-comparable value, not an error.
    pub fn parse_version(&self, text: &str) -> Option<Version> {
        let caps = self.version_pattern.captures(text)?;

        Some(Version {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }

    /// Classify the change from `previous` (one release older) to `current`.
    ///
    /// Sentinel on either side wins over everything; "newly introduced" and
    /// "removed" intentionally collapse into the same `Unavailable` bucket.
    /// For comparable versions the most significant differing component
    /// decides: major over minor over patch.
    pub fn classify(&self, current: &str, previous: &str) -> ChangeKind {
        if current == NOT_AVAILABLE || previous == NOT_AVAILABLE {
            return ChangeKind::Unavailable;
        }

        if current == previous {
            return ChangeKind::NoChange;
        }

        let (Some(curr), Some(prev)) = (self.parse_version(current), self.parse_version(previous))
        else {
            return ChangeKind::Unavailable;
        };

        if curr.major != prev.major {
            ChangeKind::MajorBump
        } else if curr.minor != prev.minor {
            ChangeKind::MinorBump
        } else if curr.patch != prev.patch {
            ChangeKind::PatchBump
        } else {
            // Literal strings differed but the embedded versions agree
            // (e.g. annotation text changed around the same version).
            ChangeKind::NoChange
        }
    }

    /// Tally classifications for every adjacent cell pair in the table.
    ///
    /// The oldest column has no older neighbor and contributes nothing.
    pub fn summarize(&self, table: &VersionTable) -> ChangeSummary {
        let mut summary = ChangeSummary::default();

        for row in &table.rows {
            for pair in row.cells.windows(2) {
                summary.record(self.classify(&pair[0], &pair[1]));
            }
        }

        summary
    }
}
