use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use loan_core::enums::{ExportFormat, Tab};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look up one loan and print its timeline view.
    Show(ShowArgs),
    /// Interactive session: search loans, switch tabs, tick action items.
    Browse(BrowseArgs),
    /// Download a loan's timeline as JSON or CSV.
    Export(ExportArgs),
    /// List loans whose call history matches the given criteria.
    Find(FindArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Loan number to look up.
    pub loan: String,

    /// Tab to render: timeline, insights, summary.
    #[arg(short, long, default_value = "timeline")]
    pub tab: Tab,
}

#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// Loan number to search right away.
    pub loan: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Loan number to export.
    pub loan: String,

    /// Export format: json, csv.
    #[arg(long = "as", default_value = "json")]
    pub export_format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Earliest call date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest call date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Minimum number of calls.
    #[arg(long)]
    pub min_calls: Option<u32>,

    /// Only loans with calls of this sentiment.
    #[arg(long)]
    pub sentiment: Option<String>,
}
