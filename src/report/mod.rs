//! Report renderers for scan results.
//!
//! - [`terminal`]: colored table of flagged packages plus a summary line; respects `--quiet`.
//! - [`log`]: plain-text report persisted to a file.
//!
//! JSON output needs no module of its own: verdicts serialize directly.

pub mod log;
pub mod terminal;

use std::collections::HashSet;

use crate::models::ClassificationVerdict;

/// Counts shown at the end of every report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Manifests classified.
    pub scanned: usize,
    /// Manifests that could not be read or parsed.
    pub skipped: usize,
    /// Packages dropped by the `ignore` list.
    pub ignored: usize,
    /// Distinct `name@version` with at least one verdict.
    pub flagged: usize,
}

impl Summary {
    pub fn new(
        scanned: usize,
        skipped: usize,
        ignored: usize,
        verdicts: &[ClassificationVerdict],
    ) -> Self {
        let flagged = verdicts
            .iter()
            .map(|v| (v.name.as_str(), v.version.as_str()))
            .collect::<HashSet<_>>()
            .len();
        Summary {
            scanned,
            skipped,
            ignored,
            flagged,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scanned: {}  Flagged: {}  Ignored: {}  Skipped: {}",
            self.scanned, self.flagged, self.ignored, self.skipped
        )
    }
}
