//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aerofacts CLI - Extract engine facts from aircraft ads and compute
/// lifecycle metrics.
#[derive(Debug, Parser)]
#[command(name = "aerofacts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read an ad listing, extract engine facts, and write the computed
    /// lifecycle table
    Run(RunArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Input spreadsheet or CSV with ID and Description columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output workbook path (.xlsx)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Worksheet to read ads from (first sheet when omitted)
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Configuration file (TOML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to use, overriding the config file
    #[arg(short, long)]
    pub model: Option<String>,

    /// Canned provider response file; runs offline with a mock provider
    /// instead of calling the API
    #[arg(long)]
    pub mock_response: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_parses() {
        let cli = Cli::parse_from([
            "aerofacts",
            "run",
            "--input",
            "ads.xlsx",
            "--output",
            "computed.xlsx",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.input, PathBuf::from("ads.xlsx"));
                assert_eq!(args.output, PathBuf::from("computed.xlsx"));
                assert!(args.config.is_none());
                assert!(args.mock_response.is_none());
            }
        }
    }

    #[test]
    fn test_mock_response_flag() {
        let cli = Cli::parse_from([
            "aerofacts",
            "run",
            "--input",
            "ads.csv",
            "--output",
            "out.xlsx",
            "--mock-response",
            "canned.json",
        ]);
        let Command::Run(args) = cli.command;
        assert_eq!(args.mock_response, Some(PathBuf::from("canned.json")));
    }

    #[test]
    fn test_missing_input_rejected() {
        let result = Cli::try_parse_from(["aerofacts", "run", "--output", "out.xlsx"]);
        assert!(result.is_err());
    }
}
