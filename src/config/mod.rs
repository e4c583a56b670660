pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::ValidatorKind;
#[cfg(feature = "cli")]
use clap::{Args, Parser};
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Flags shared by every validation binary.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML file overriding the validator bounds
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format written to stdout (default: text, or the config's [output] format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs on stderr as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "budget-validate")]
#[command(about = "Validate budget amounts, dates and menu choices read line by line from stdin")]
pub struct CliConfig {
    /// Which validator to run
    #[arg(value_enum)]
    pub kind: ValidatorKind,

    #[command(flatten)]
    pub common: CommonArgs,
}
