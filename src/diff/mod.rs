//! Version diff classification module
//!
//! This module assigns a color classification to every table cell relative
//! to its neighbor one release older, following semantic-versioning
//! severity: a major difference outranks minor, minor outranks patch.
//! Sentinel or unparsable cells fall back to `Unavailable`; classification
//! never fails.
//!
//! # Example
//!
//! ```ignore
//! use emr_diff::diff::{ChangeKind, VersionClassifier};
//!
//! let classifier = VersionClassifier::new();
//! assert_eq!(classifier.classify("3.5.1", "3.5.0"), ChangeKind::PatchBump);
//! ```

mod classifier;
mod types;

pub use classifier::VersionClassifier;
pub use types::{ChangeKind, ChangeSummary, Version, NOT_AVAILABLE};
