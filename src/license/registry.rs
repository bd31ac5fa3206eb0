use std::path::Path;

use thiserror::Error;

use crate::license::keyword::KeywordClassifier;
use crate::license::spdx::IdentifierClassifier;
use crate::models::{ClassificationVerdict, LicenseDeclaration};

/// One non-commercial detection strategy.
///
/// Implementations are stateless: calling [`Classifier::classify`] twice with
/// the same input yields the same result. Odd input (missing or mistyped
/// license fields) means "no restriction found", never an error.
pub trait Classifier: Send + Sync {
    /// Name used in configuration and in the `(filter: ...)` provenance suffix.
    fn name(&self) -> &'static str;

    /// Classify one declaration. `path` is the manifest it was read from and
    /// is only used for diagnostics.
    fn classify(
        &self,
        path: &Path,
        declaration: &LicenseDeclaration,
    ) -> Option<ClassificationVerdict>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown classifier `{name}` (available: {available})")]
    UnknownClassifier { name: String, available: String },
}

/// Static table of every classifier this build knows about.
pub struct ClassifierRegistry {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierRegistry {
    /// The built-in table: `keyword` and `spdx`.
    pub fn builtin() -> Self {
        let classifiers: Vec<Box<dyn Classifier>> = vec![
            Box::new(KeywordClassifier::new()),
            Box::new(IdentifierClassifier::new()),
        ];
        Self { classifiers }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Classifier> {
        self.classifiers
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    /// Look up `names` in order. Fails on the first name not in the table.
    pub fn resolve<I, S>(&self, names: I) -> Result<Vec<&dyn Classifier>, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| RegistryError::UnknownClassifier {
                    name: name.to_string(),
                    available: self.names().join(", "),
                })
            })
            .collect()
    }
}

/// Run every classifier over `declaration` and collect their verdicts.
///
/// Each verdict's reason gets a `(filter: <name>)` suffix naming the
/// classifier that produced it. An empty result means the package is clean.
pub fn run(
    classifiers: &[&dyn Classifier],
    path: &Path,
    declaration: &LicenseDeclaration,
) -> Vec<ClassificationVerdict> {
    classifiers
        .iter()
        .filter_map(|classifier| {
            classifier.classify(path, declaration).map(|mut verdict| {
                verdict.reason = format!("{} (filter: {})", verdict.reason, classifier.name());
                verdict
            })
        })
        .collect()
}
