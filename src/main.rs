//! `nc-license-checkr`: find dependencies with non-commercial licenses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`load_config`]) and apply CLI overrides.
//! 3. Resolve the enabled classifiers from the built-in registry.
//! 4. Walk `node_modules` for manifests ([`scanner::scan`]).
//! 5. Classify every manifest ([`audit()`]).
//! 6. Render the requested report and optionally persist it to a log file.
//! 7. Exit `0` (clean), `1` (at least one verdict) or `2` (fatal error).

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use nc_license_checkr::audit::{audit, Audit};
use nc_license_checkr::config::load_config;
use nc_license_checkr::license::registry::ClassifierRegistry;
use nc_license_checkr::license::spdx::IdentifierClassifier;
use nc_license_checkr::{report, scanner};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(audit) if audit.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<Audit> {
    // Resolve project path; a missing root must not pass as a clean audit
    let path = cli
        .path
        .canonicalize()
        .with_context(|| format!("cannot access project path {}", cli.path.display()))?;

    let mut config = load_config(&path, cli.config.as_deref())?;
    if cli.strict {
        config.filters = vec![IdentifierClassifier::NAME.to_string()];
    } else if !cli.filters.is_empty() {
        config.filters = cli.filters.clone();
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file.clone();
    }
    tracing::debug!(filters = ?config.filters, "enabled classifiers");

    let registry = ClassifierRegistry::builtin();
    let classifiers = registry.resolve(&config.filters)?;

    let scan = scanner::scan(&path)?;
    if !scan.skipped.is_empty() {
        tracing::warn!("{} manifest(s) could not be read", scan.skipped.len());
    }

    let progress = if cli.quiet || matches!(cli.report, ReportFormat::Json) {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(scan.manifests.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        pb
    };

    let audit = audit(&scan, &classifiers, &config, &progress);
    progress.finish_and_clear();

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&audit.verdicts, &audit.summary, &path, cli.quiet);
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&audit.verdicts)?);
        }
    }

    if let Some(log_file) = &config.log_file {
        report::log::write(log_file, &audit.verdicts, &audit.summary)?;
    }

    Ok(audit)
}
