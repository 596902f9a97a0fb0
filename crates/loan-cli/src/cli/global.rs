use clap::ValueEnum;
use loan_config::ColorMode;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Painted terminal view.
    View,
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub color: Option<ColorMode>,
    pub api_url: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
