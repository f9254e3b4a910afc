//! `orcid-rendr` — fetch public ORCID records and render researcher activity
//! summaries.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load display config ([`config::load_config`]).
//! 3. Collect raw records: a local file (`--input`) or concurrent API fetches
//!    ([`fetch`]).
//! 4. Normalize each record into ordered, display-ready sections
//!    ([`normalize`]).
//! 5. Render the requested report ([`report`]; JSON via `serde_json`).
//! 6. Exit `0` (all profiles rendered) or `1` (at least one fetch failed).

mod cli;
mod config;
mod fetch;
mod models;
mod normalize;
mod report;
mod sections;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use cli::{Cli, ReportFormat};
use config::load_config;
use models::ProfileReport;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut had_errors = false;
    let mut reports: Vec<ProfileReport> = Vec::new();

    if let Some(path) = &cli.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let profile: Value = serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        reports.push(build_report(&profile, None));
    } else {
        // Reject malformed iDs before any network traffic
        for id in &cli.orcid_ids {
            if !fetch::is_valid_orcid_id(id) {
                eprintln!("{} {} is not a valid ORCID iD", "✗".red(), id);
                std::process::exit(1);
            }
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        let pb = if !cli.quiet {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            pb.set_message(format!(
                "Fetching {} profile(s) from orcid.org",
                cli.orcid_ids.len()
            ));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let fetches: Vec<_> = cli
            .orcid_ids
            .iter()
            .map(|id| fetch::fetch_record(&client, id))
            .collect();
        let results = futures::future::join_all(fetches).await;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        for (id, result) in cli.orcid_ids.iter().zip(results) {
            match result {
                Ok(profile) => reports.push(build_report(&profile, Some(id))),
                Err(err) => {
                    // Logged and skipped, no retry
                    eprintln!("{} {}: {}", "✗".red(), id, err);
                    had_errors = true;
                }
            }
        }
    }

    match cli.report {
        ReportFormat::Terminal => {
            for profile_report in &reports {
                report::terminal::render(profile_report, &config, cli.verbose, cli.quiet);
            }
        }
        ReportFormat::Json => {
            if let [single] = reports.as_slice() {
                println!("{}", serde_json::to_string_pretty(single)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        ReportFormat::Markdown => {
            for profile_report in &reports {
                print!("{}", report::markdown::render(profile_report, &config));
            }
        }
    }

    if had_errors {
        std::process::exit(1);
    }

    Ok(())
}

/// Normalize one raw record and attach its identity for rendering. The iD
/// recorded inside the document wins over the one the caller asked for.
fn build_report(profile: &Value, requested_id: Option<&str>) -> ProfileReport {
    let orcid_id = normalize::record_orcid_id(profile)
        .or_else(|| requested_id.map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());
    ProfileReport {
        orcid_id,
        name: normalize::display_name(profile),
        data: normalize::processed(profile),
    }
}
