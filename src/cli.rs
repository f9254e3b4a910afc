use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "orcid-rendr",
    about = "Fetch public ORCID profiles and render display-ready activity summaries",
    version
)]
pub struct Cli {
    /// ORCID iDs to fetch (e.g. 0000-0002-1825-0097)
    #[arg(value_name = "ORCID_ID", required_unless_present = "input")]
    pub orcid_ids: Vec<String>,

    /// Read one record from a local JSON file instead of the API
    #[arg(long, value_name = "FILE", conflicts_with = "orcid_ids")]
    pub input: Option<PathBuf>,

    /// Display config file [default: ./.orcid-rendr/config.toml, fallback ~/.config/orcid-rendr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show full record details (not just titles)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print per-profile record counts
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Markdown,
}
