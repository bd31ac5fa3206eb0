use indicatif::ProgressBar;

use crate::config::Config;
use crate::license::registry::{self, Classifier};
use crate::models::ClassificationVerdict;
use crate::report::Summary;
use crate::scanner::Scan;

/// Verdicts for a whole dependency tree.
#[derive(Debug, Default)]
pub struct Audit {
    pub verdicts: Vec<ClassificationVerdict>,
    pub summary: Summary,
}

impl Audit {
    pub fn is_clean(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Run `classifiers` over every scanned manifest not on the ignore list.
pub fn audit(
    scan: &Scan,
    classifiers: &[&dyn Classifier],
    config: &Config,
    progress: &ProgressBar,
) -> Audit {
    let mut verdicts = Vec::new();
    let mut scanned = 0;
    let mut ignored = 0;

    for manifest in &scan.manifests {
        progress.inc(1);
        if config.is_ignored(&manifest.declaration.name) {
            tracing::debug!(package = %manifest.declaration.id(), "ignored by config");
            ignored += 1;
            continue;
        }
        scanned += 1;
        verdicts.extend(registry::run(classifiers, &manifest.path, &manifest.declaration));
    }

    let summary = Summary::new(scanned, scan.skipped.len(), ignored, &verdicts);
    tracing::info!(
        scanned = summary.scanned,
        flagged = summary.flagged,
        ignored = summary.ignored,
        skipped = summary.skipped,
        "audit complete"
    );

    Audit { verdicts, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::registry::ClassifierRegistry;
    use crate::models::LicenseDeclaration;
    use crate::scanner::ScannedManifest;
    use std::path::PathBuf;

    fn manifest(name: &str, license: &str) -> ScannedManifest {
        ScannedManifest {
            path: PathBuf::from(format!("node_modules/{name}/package.json")),
            declaration: LicenseDeclaration {
                name: name.to_string(),
                version: "1.0.0".to_string(),
                license: Some(license.to_string()),
                licenses: Vec::new(),
            },
        }
    }

    fn scan() -> Scan {
        Scan {
            manifests: vec![
                manifest("clean", "MIT"),
                manifest("either", "MIT OR CC-BY-NC-4.0"),
                manifest("art", "CC-BY-NC-SA-4.0"),
                manifest("vendored", "CC-BY-NC-4.0"),
            ],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_audit_all_classifiers() {
        let registry = ClassifierRegistry::builtin();
        let classifiers = registry.resolve(["keyword", "spdx"]).unwrap();
        let config = Config {
            ignore: vec!["vendored".to_string()],
            ..Config::default()
        };

        let audit = audit(&scan(), &classifiers, &config, &ProgressBar::hidden());

        assert!(!audit.is_clean());
        assert_eq!(audit.verdicts.len(), 3);
        assert_eq!(
            audit.summary,
            Summary {
                scanned: 3,
                skipped: 0,
                ignored: 1,
                flagged: 2,
            }
        );
        assert!(audit.verdicts.iter().all(|v| v.name != "vendored"));
    }

    #[test]
    fn test_audit_strict() {
        let registry = ClassifierRegistry::builtin();
        let classifiers = registry.resolve(["spdx"]).unwrap();

        let audit = audit(&scan(), &classifiers, &Config::default(), &ProgressBar::hidden());

        let names: Vec<_> = audit.verdicts.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["art", "vendored"]);
    }

    #[test]
    fn test_audit_clean_tree() {
        let registry = ClassifierRegistry::builtin();
        let classifiers = registry.resolve(["keyword", "spdx"]).unwrap();
        let scan = Scan {
            manifests: vec![manifest("clean", "MIT")],
            skipped: Vec::new(),
        };

        let audit = audit(&scan, &classifiers, &Config::default(), &ProgressBar::hidden());
        assert!(audit.is_clean());
        assert_eq!(audit.summary.scanned, 1);
    }
}
