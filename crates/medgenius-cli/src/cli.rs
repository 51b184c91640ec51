//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// MedGenius CLI - AI-assisted analysis for rare disease research.
#[derive(Debug, Parser)]
#[command(name = "medgenius")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the chat-completion service
    #[arg(long, global = true, env = "MEDGENIUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier to request
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Sectioned format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (compact JSON)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a patient report
    Analyze(AnalysisArgs),

    /// Recommend drug candidates for a patient report
    Recommend(AnalysisArgs),

    /// Predict disease risks from patient history
    Predict(AnalysisArgs),

    /// Search clinical trials
    Trials(TrialsArgs),
}

/// Arguments shared by the analysis commands.
#[derive(Debug, Parser)]
pub struct AnalysisArgs {
    /// Input text (patient report or history). Omit to use the
    /// built-in sample report.
    pub text: Option<String>,

    /// Read input text from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Name of an attached document to note alongside the input
    #[arg(long)]
    pub attachment: Option<String>,

    /// Write results to a JSON file after displaying them
    #[arg(short, long)]
    pub export: bool,

    /// Directory for exported files (defaults to the current directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the trials command.
#[derive(Debug, Parser)]
pub struct TrialsArgs {
    /// Filter by condition (case-insensitive substring)
    #[arg(short, long)]
    pub condition: Option<String>,

    /// Filter by location (case-insensitive substring)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Filter by phase (exact match, or "any")
    #[arg(short, long)]
    pub phase: Option<String>,

    /// Export one trial by its registry ID
    #[arg(short, long)]
    pub export: Option<String>,

    /// Directory for exported files (defaults to the current directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["medgenius", "analyze", "56-year-old male"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.text.as_deref(), Some("56-year-old male"));
                assert!(!args.export);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_trials_command() {
        let cli = Cli::parse_from([
            "medgenius",
            "trials",
            "--condition",
            "amyloid",
            "--phase",
            "Phase 3",
        ]);
        match cli.command {
            Command::Trials(args) => {
                assert_eq!(args.condition.as_deref(), Some("amyloid"));
                assert_eq!(args.phase.as_deref(), Some("Phase 3"));
                assert!(args.export.is_none());
            }
            _ => panic!("Expected Trials command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "medgenius",
            "--model",
            "llama3-8b-8192",
            "--no-color",
            "predict",
        ]);
        assert_eq!(cli.model.as_deref(), Some("llama3-8b-8192"));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Predict(_)));
    }
}
