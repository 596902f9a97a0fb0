use clap::Parser;
use loan_config::ColorMode;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `loanline` binary.
#[derive(Debug, Parser)]
#[command(
    name = "loanline",
    version,
    about = "Loanline - loan call-history timelines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: view, json, raw
    #[arg(short, long, global = true, default_value = "view")]
    pub format: OutputFormat,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Timeline service base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            api_url: self.api_url.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
