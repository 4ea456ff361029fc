//! Data types for version change classification

use serde::Serialize;

/// Cell value marking an application as absent from a release
pub const NOT_AVAILABLE: &str = "-";

/// Classification of the change between a cell and its older neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeKind {
    /// Identical version in both releases
    NoChange,
    /// Only the patch component changed
    PatchBump,
    /// Minor component changed (patch may have too)
    MinorBump,
    /// Major component changed (lower components may have too)
    MajorBump,
    /// Either side absent or not comparable
    Unavailable,
}

impl ChangeKind {
    /// CSS class used for this classification in the report
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeKind::NoChange => "green",
            ChangeKind::PatchBump => "yellow",
            ChangeKind::MinorBump => "orange",
            ChangeKind::MajorBump => "red",
            ChangeKind::Unavailable => "gray",
        }
    }

    /// Legend text for this classification
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::NoChange => "No Change",
            ChangeKind::PatchBump => "Patch Bump (0.0.x)",
            ChangeKind::MinorBump => "Minor Bump (0.x.0)",
            ChangeKind::MajorBump => "Major Bump (x.0.0)",
            ChangeKind::Unavailable => "Not Available",
        }
    }
}

/// A three-component numeric version extracted from cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Per-series counts of each classification across all adjacent cell pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub major_bumps: usize,
    pub minor_bumps: usize,
    pub patch_bumps: usize,
    pub unchanged: usize,
    pub unavailable: usize,
}

impl ChangeSummary {
    /// Count one classification
    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::MajorBump => self.major_bumps += 1,
            ChangeKind::MinorBump => self.minor_bumps += 1,
            ChangeKind::PatchBump => self.patch_bumps += 1,
            ChangeKind::NoChange => self.unchanged += 1,
            ChangeKind::Unavailable => self.unavailable += 1,
        }
    }

    /// Total number of classified pairs
    pub fn total(&self) -> usize {
        self.major_bumps + self.minor_bumps + self.patch_bumps + self.unchanged + self.unavailable
    }
}

impl std::fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} major, {} minor, {} patch, {} unchanged, {} n/a",
            self.major_bumps, self.minor_bumps, self.patch_bumps, self.unchanged, self.unavailable
        )
    }
}
