use serde::{Deserialize, Serialize};
use serde_json::Value;

/// License information read from one package manifest.
///
/// Two conventions exist in the wild: a single `license` string, and the
/// legacy `licenses` array of `{ "type": ..., "url": ... }` objects. Either,
/// both, or neither may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseDeclaration {
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    #[serde(default)]
    pub licenses: Vec<LegacyLicense>,
}

/// One entry of the legacy `licenses` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyLicense {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

impl LicenseDeclaration {
    /// Build a declaration from a parsed manifest without ever failing.
    ///
    /// Fields of an unexpected JSON type are dropped rather than rejected: a
    /// `license` that is not a string becomes `None`, a `licenses` value that
    /// is not an array becomes empty, and non-object array entries are skipped.
    pub fn from_manifest(json: &Value) -> Self {
        let string_field = |key: &str| {
            json.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        let licenses = json
            .get("licenses")
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.is_object())
                    .map(|e| LegacyLicense {
                        kind: e.get("type").and_then(|v| v.as_str()).map(str::to_string),
                        url: e.get("url").and_then(|v| v.as_str()).map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default();

        LicenseDeclaration {
            name: string_field("name"),
            version: string_field("version"),
            license: json
                .get("license")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            licenses,
        }
    }

    /// Package identity as `name@version`.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// A positive non-commercial finding for one package.
///
/// `license` always carries the text exactly as declared, never the
/// lowercased or uppercased working copy used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub name: String,
    pub version: String,
    pub license: String,
    pub reason: String,
}

impl ClassificationVerdict {
    pub fn new(declaration: &LicenseDeclaration, license: &str, reason: &str) -> Self {
        ClassificationVerdict {
            name: declaration.name.clone(),
            version: declaration.version.clone(),
            license: license.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for ClassificationVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NC-license detected: {}@{} ({}): {}",
            self.name, self.version, self.license, self.reason
        )
    }
}
