//! CLI parse: clap types for reminisce. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Reminisce CLI - memory-elicitation questions from image analysis results
#[derive(Parser)]
#[command(name = "reminisce")]
#[command(about = "Generate memory-elicitation questions from image analysis results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the question set for an analysis result
    Questions {
        /// Analysis result JSON file ("-" for stdin)
        #[arg(long, short)]
        input: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Show the context signals extracted from an analysis result
    Context {
        /// Analysis result JSON file ("-" for stdin)
        #[arg(long, short)]
        input: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Translate a descriptor term through the configured lookup
    Translate {
        /// English term, e.g. "beach"
        token: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate the effective configuration
    Validate,
    /// Print the effective configuration as TOML
    Show,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Questions { .. } => "questions",
            Commands::Context { .. } => "context",
            Commands::Translate { .. } => "translate",
            Commands::Config {
                command: ConfigCommands::Validate,
            } => "config validate",
            Commands::Config {
                command: ConfigCommands::Show,
            } => "config show",
        }
    }
}
