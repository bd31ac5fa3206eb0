use std::path::Path;

use crate::license::registry::Classifier;
use crate::models::{ClassificationVerdict, LicenseDeclaration};

/// Substrings that mark a license as non-commercial once lowercased.
const NC_KEYWORDS: &[&str] = &[
    "non-commercial",
    "noncommercial",
    "by-nc",
    "cc-by-nc",
    "attribution-noncommercial",
    "nc",
];

/// The bare token is also a substring of the corporate suffix below, so it
/// only counts when no `inc.` is present or another keyword matched too.
const BARE_NC: &str = "nc";
const CORPORATE_SUFFIX: &str = "inc.";

pub const LICENSE_FIELD_REASON: &str = "license field contains NC keyword";
pub const LICENSES_ARRAY_REASON: &str = "licenses array contains NC keyword";

/// Broad-recall classifier: any NC keyword anywhere in the license text.
///
/// The `license` string is checked first with the `inc.` guard applied. When
/// it yields nothing, the legacy `licenses` array is checked entry by entry
/// without the guard.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub const NAME: &'static str = "keyword";

    pub fn new() -> Self {
        Self
    }
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn classify(
        &self,
        path: &Path,
        declaration: &LicenseDeclaration,
    ) -> Option<ClassificationVerdict> {
        let raw = declaration.license.as_deref().unwrap_or("");
        let lower = raw.to_lowercase();

        if license_field_matches(&lower) {
            tracing::debug!(
                package = %declaration.id(),
                path = %path.display(),
                license = raw,
                "NC keyword in license field"
            );
            return Some(ClassificationVerdict::new(declaration, raw, LICENSE_FIELD_REASON));
        }

        // Legacy array fallback. The `inc.` guard is not applied here.
        declaration
            .licenses
            .iter()
            .filter_map(|entry| entry.kind.as_deref())
            .find(|kind| contains_keyword(&kind.to_lowercase()))
            .map(|kind| {
                tracing::debug!(
                    package = %declaration.id(),
                    path = %path.display(),
                    license = kind,
                    "NC keyword in licenses array"
                );
                ClassificationVerdict::new(declaration, kind, LICENSES_ARRAY_REASON)
            })
    }
}

fn contains_keyword(lower: &str) -> bool {
    NC_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Keyword test for the `license` string, with the corporate-suffix guard.
fn license_field_matches(lower: &str) -> bool {
    let specific = NC_KEYWORDS
        .iter()
        .filter(|k| **k != BARE_NC)
        .any(|k| lower.contains(k));
    if specific {
        return true;
    }

    if !lower.contains(BARE_NC) {
        return false;
    }

    if lower.contains(CORPORATE_SUFFIX) {
        tracing::trace!(license = lower, "bare `nc` suppressed by `inc.` guard");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LegacyLicense;

    fn decl(license: Option<&str>, licenses: &[&str]) -> LicenseDeclaration {
        LicenseDeclaration {
            name: "pkg".to_string(),
            version: "1.0.0".to_string(),
            license: license.map(str::to_string),
            licenses: licenses
                .iter()
                .map(|t| LegacyLicense {
                    kind: Some(t.to_string()),
                    url: None,
                })
                .collect(),
        }
    }

    fn classify(d: &LicenseDeclaration) -> Option<ClassificationVerdict> {
        KeywordClassifier::new().classify(Path::new("node_modules/pkg/package.json"), d)
    }

    #[test]
    fn test_spdx_nc_identifier() {
        let v = classify(&decl(Some("CC-BY-NC-4.0"), &[])).unwrap();
        assert_eq!(v.license, "CC-BY-NC-4.0");
        assert_eq!(v.reason, LICENSE_FIELD_REASON);
        assert!(v.reason.contains("NC keyword"));
    }

    #[test]
    fn test_prose_forms() {
        assert!(classify(&decl(Some("Non-Commercial Use Only"), &[])).is_some());
        assert!(classify(&decl(Some("Free for noncommercial use"), &[])).is_some());
        assert!(
            classify(&decl(Some("Attribution-NonCommercial 4.0 International"), &[])).is_some()
        );
    }

    #[test]
    fn test_permissive_no_match() {
        assert!(classify(&decl(Some("MIT"), &[])).is_none());
        assert!(classify(&decl(Some("Apache-2.0"), &[])).is_none());
        assert!(classify(&decl(Some("BSD-3-Clause"), &[])).is_none());
    }

    #[test]
    fn test_inc_guard_suppresses_bare_nc() {
        assert!(classify(&decl(Some("GNU General Public License v3.0 (Inc.)"), &[])).is_none());
        assert!(classify(&decl(Some("Copyright XYZ, Inc."), &[])).is_none());
    }

    #[test]
    fn test_inc_guard_keeps_specific_keyword() {
        let v = classify(&decl(Some("CC-BY-NC-4.0, Acme Inc."), &[])).unwrap();
        assert_eq!(v.license, "CC-BY-NC-4.0, Acme Inc.");
    }

    #[test]
    fn test_bare_nc_without_inc_matches() {
        assert!(classify(&decl(Some("NC"), &[])).is_some());
    }

    #[test]
    fn test_padded_whitespace_matches() {
        let v = classify(&decl(Some("  CC-BY-NC-4.0  "), &[])).unwrap();
        assert_eq!(v.license, "  CC-BY-NC-4.0  ");
    }

    #[test]
    fn test_compound_expression_matches() {
        assert!(classify(&decl(Some("MIT OR CC-BY-NC-4.0"), &[])).is_some());
    }

    #[test]
    fn test_legacy_array_fallback() {
        let v = classify(&decl(None, &["MIT", "CC-BY-NC-SA-3.0", "CC-BY-NC-4.0"])).unwrap();
        assert_eq!(v.license, "CC-BY-NC-SA-3.0");
        assert_eq!(v.reason, LICENSES_ARRAY_REASON);
    }

    #[test]
    fn test_legacy_array_used_when_string_field_clean() {
        let v = classify(&decl(Some("MIT"), &["CC-BY-NC-4.0"])).unwrap();
        assert_eq!(v.license, "CC-BY-NC-4.0");
        assert_eq!(v.reason, LICENSES_ARRAY_REASON);
    }

    #[test]
    fn test_string_field_wins_over_array() {
        let v = classify(&decl(Some("CC-BY-NC-2.0"), &["CC-BY-NC-4.0"])).unwrap();
        assert_eq!(v.license, "CC-BY-NC-2.0");
        assert_eq!(v.reason, LICENSE_FIELD_REASON);
    }

    #[test]
    fn test_legacy_array_has_no_inc_guard() {
        // Known discrepancy: the string path would suppress this.
        let v = classify(&decl(None, &["GNU General Public License v3.0 (Inc.)"])).unwrap();
        assert_eq!(v.reason, LICENSES_ARRAY_REASON);
    }

    #[test]
    fn test_legacy_entry_without_type_is_skipped() {
        let mut d = decl(None, &[]);
        d.licenses.push(LegacyLicense::default());
        assert!(classify(&d).is_none());
    }

    #[test]
    fn test_absent_license() {
        assert!(classify(&decl(None, &[])).is_none());
    }

    #[test]
    fn test_idempotent() {
        let d = decl(Some("CC-BY-NC-4.0"), &[]);
        assert_eq!(classify(&d), classify(&d));
    }
}
