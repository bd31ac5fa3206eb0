use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use walkdir::WalkDir;

use crate::models::LicenseDeclaration;

const NODE_MODULES: &str = "node_modules";
const MANIFEST: &str = "package.json";

/// A dependency manifest and the declaration parsed from it.
#[derive(Debug, Clone)]
pub struct ScannedManifest {
    pub path: PathBuf,
    pub declaration: LicenseDeclaration,
}

/// Why a manifest was skipped, or why the scan could not start.
///
/// Only [`ScanError::Root`] and a [`ScanError::Walk`] on `node_modules`
/// itself are returned from [`scan`]; the rest end up in [`Scan::skipped`].
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot scan {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result of walking one project's dependency tree.
#[derive(Debug, Default)]
pub struct Scan {
    pub manifests: Vec<ScannedManifest>,
    pub skipped: Vec<ScanError>,
}

/// Collect every dependency manifest under `<root>/node_modules`.
///
/// Nested `node_modules` directories and `@scope` directories are followed;
/// symlinks are not. The project's own `package.json` is not included. A
/// project without `node_modules` yields an empty scan, but a `root` that is
/// not a readable directory is an error.
pub fn scan(root: &Path) -> Result<Scan, ScanError> {
    std::fs::read_dir(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut result = Scan::default();
    let modules = root.join(NODE_MODULES);
    if !modules.is_dir() {
        tracing::warn!(path = %modules.display(), "no node_modules directory");
        return Ok(result);
    }

    for entry in WalkDir::new(&modules)
        .min_depth(2)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // node_modules itself could not be read
            Err(e) if e.depth() == 0 => return Err(ScanError::Walk(e)),
            Err(e) => {
                tracing::warn!("{}", e);
                result.skipped.push(ScanError::Walk(e));
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_package_manifest(entry.path()) {
            continue;
        }

        match read_manifest(entry.path()) {
            Ok(declaration) => {
                tracing::debug!(
                    package = %declaration.id(),
                    path = %entry.path().display(),
                    "read manifest"
                );
                result.manifests.push(ScannedManifest {
                    path: entry.into_path(),
                    declaration,
                });
            }
            Err(e) => {
                tracing::warn!("skipping manifest: {}", e);
                result.skipped.push(e);
            }
        }
    }

    Ok(result)
}

/// Parse one `package.json` into a [`LicenseDeclaration`].
pub fn read_manifest(path: &Path) -> Result<LicenseDeclaration, ScanError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let json: Value = serde_json::from_str(&content).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LicenseDeclaration::from_manifest(&json))
}

/// True for `node_modules/<pkg>/package.json` and
/// `node_modules/@scope/<pkg>/package.json`, at any nesting depth.
/// Manifests of test fixtures and the like deeper inside a package are not.
fn is_package_manifest(path: &Path) -> bool {
    if path.file_name() != Some(OsStr::new(MANIFEST)) {
        return false;
    }

    let Some(package_dir) = path.parent() else {
        return false;
    };
    let Some(parent) = package_dir.parent() else {
        return false;
    };

    if parent.file_name() == Some(OsStr::new(NODE_MODULES)) {
        return true;
    }

    let is_scope = parent
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with('@'));
    is_scope && parent.parent().and_then(Path::file_name) == Some(OsStr::new(NODE_MODULES))
}
