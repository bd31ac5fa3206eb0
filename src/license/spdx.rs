use std::path::Path;

use crate::license::registry::Classifier;
use crate::models::{ClassificationVerdict, LicenseDeclaration};

/// Creative Commons non-commercial identifiers, every published version.
const NC_IDENTIFIERS: &[&str] = &[
    "CC-BY-NC-1.0",
    "CC-BY-NC-2.0",
    "CC-BY-NC-2.5",
    "CC-BY-NC-3.0",
    "CC-BY-NC-4.0",
    "CC-BY-NC-SA-1.0",
    "CC-BY-NC-SA-2.0",
    "CC-BY-NC-SA-2.5",
    "CC-BY-NC-SA-3.0",
    "CC-BY-NC-SA-4.0",
];

pub const IDENTIFIER_REASON: &str = "SPDX identifier is known to be non-commercial";

/// Returns `true` if `id` is exactly one of the known NC identifiers,
/// ignoring case. Surrounding whitespace is not stripped.
pub fn is_nc_identifier(id: &str) -> bool {
    let upper = id.to_uppercase();
    NC_IDENTIFIERS.contains(&upper.as_str())
}

/// High-precision classifier: exact match of the `license` string against
/// [`NC_IDENTIFIERS`]. Compound expressions and the legacy `licenses` array
/// are never considered.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierClassifier;

impl IdentifierClassifier {
    pub const NAME: &'static str = "spdx";

    pub fn new() -> Self {
        Self
    }
}

impl Classifier for IdentifierClassifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classify(
        &self,
        path: &Path,
        declaration: &LicenseDeclaration,
    ) -> Option<ClassificationVerdict> {
        let raw = declaration.license.as_deref().unwrap_or("");
        if !is_nc_identifier(raw) {
            return None;
        }

        tracing::debug!(
            package = %declaration.id(),
            path = %path.display(),
            license = raw,
            "known NC identifier"
        );
        Some(ClassificationVerdict::new(declaration, raw, IDENTIFIER_REASON))
    }
}
