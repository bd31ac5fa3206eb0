use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::license::keyword::KeywordClassifier;
use crate::license::spdx::IdentifierClassifier;

const CONFIG_DIR: &str = "nc-license-checkr";

/// Root configuration structure, deserialized from `.nc-license-checkr/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Classifier names to run, in order. Defaults to every built-in classifier.
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,
    /// Package names that are never reported.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Where to write the plain-text report. No log file when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_filters() -> Vec<String> {
    vec![
        KeywordClassifier::NAME.to_string(),
        IdentifierClassifier::NAME.to_string(),
    ]
}

impl Default for Config {
    /// Built-in configuration used when no config file is found: every
    /// classifier enabled, nothing ignored, no log file.
    fn default() -> Self {
        Config {
            filters: default_filters(),
            ignore: Vec::new(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn is_ignored(&self, package: &str) -> bool {
        self.ignore.iter().any(|name| name == package)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<project_path>/.nc-license-checkr/config.toml`
/// 3. `~/.config/nc-license-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(format!(".{CONFIG_DIR}")).join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join(CONFIG_DIR).join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
