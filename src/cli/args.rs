//! Command line argument parsing for the triage CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// parts-triage - scope and intent triage for appliance-parts chat messages
#[derive(Parser, Debug, Clone)]
#[command(name = "parts-triage")]
#[command(about = "Scope and intent triage for appliance-parts support chat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TriageArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Keyword tables and patterns (JSON); built-in tables when omitted
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TriageArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full pipeline over one utterance
    Analyze(AnalyzeArgs),

    /// Run the pipeline over every line of a file
    Batch(BatchArgs),

    /// Extract part and model numbers
    Entities(TextArgs),

    /// Show the sanitized forms of an utterance
    Sanitize(TextArgs),

    /// Print the effective configuration
    #[command(name = "dump-config")]
    DumpConfig,
}

/// Arguments for analyzing one utterance
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Utterance text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Include the token list in human output
    #[arg(long)]
    pub show_tokens: bool,
}

/// Arguments for batch analysis
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file with one utterance per line; `-` reads stdin
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Keep blank lines instead of skipping them
    #[arg(long)]
    pub keep_blank: bool,
}

impl BatchArgs {
    /// Whether the input is standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

/// Arguments for commands that take a single utterance
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Utterance text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = TriageArgs::try_parse_from([
            "parts-triage",
            "analyze",
            "how do i install PS11752778",
            "--show-tokens",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text, "how do i install PS11752778");
            assert!(analyze_args.show_tokens);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_batch_stdin() {
        let args = TriageArgs::try_parse_from(["parts-triage", "batch", "-"]).unwrap();
        if let Command::Batch(batch_args) = args.command {
            assert!(batch_args.reads_stdin());
            assert!(!batch_args.keep_blank);
        } else {
            panic!("Expected Batch command");
        }

        let args = TriageArgs::try_parse_from(["parts-triage", "batch", "lines.txt"]).unwrap();
        if let Command::Batch(batch_args) = args.command {
            assert!(!batch_args.reads_stdin());
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = TriageArgs::try_parse_from(["parts-triage", "dump-config"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = TriageArgs::try_parse_from(["parts-triage", "-v", "dump-config"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = TriageArgs::try_parse_from(["parts-triage", "-vv", "dump-config"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = TriageArgs::try_parse_from(["parts-triage", "--quiet", "dump-config"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = TriageArgs::try_parse_from([
            "parts-triage",
            "entities",
            "WDT780SAEM1",
            "--format",
            "json",
            "--config",
            "tables.json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.config, Some(PathBuf::from("tables.json")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let argv = ["parts-triage", "--format", "yaml", "dump-config"];
        assert!(TriageArgs::try_parse_from(argv).is_err());
    }
}
