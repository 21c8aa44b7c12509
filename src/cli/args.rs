//! Command line argument parsing for the Namesake CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Namesake - fuzzy name suggestions backed by a BK-tree
#[derive(Parser, Debug, Clone)]
#[command(name = "namesake")]
#[command(about = "Suggest likely-intended names for misspelled input")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NamesakeArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "NAMESAKE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NamesakeArgs {
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
    /// Suggest corpus words close to a query
    Suggest(SuggestArgs),

    /// Print the edit distance between two words
    Distance(DistanceArgs),

    /// Show index statistics for a corpus
    Stats(StatsArgs),

    /// Read queries from stdin, one per line, and print suggestions for each
    Interactive(InteractiveArgs),
}

/// Corpus and matching options shared by the index-backed commands
#[derive(Parser, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// Corpus file with one word per line (default: built-in names)
    #[arg(long, value_name = "CORPUS_FILE")]
    pub corpus: Option<PathBuf>,

    /// Lowercase corpus words and queries
    #[arg(long)]
    pub ignore_case: bool,
}

/// Arguments for a single suggestion query
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Maximum edit distance
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub max_distance: Option<i64>,

    /// Maximum number of suggestions to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "A")]
    pub a: String,

    /// Second word
    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Maximum edit distance
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub max_distance: Option<i64>,

    /// Maximum number of suggestions per query
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
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

    #[test]
    fn test_suggest_args() {
        let args = NamesakeArgs::try_parse_from([
            "namesake",
            "suggest",
            "jhon",
            "--corpus",
            "names.txt",
            "-d",
            "1",
            "-n",
            "3",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 1);
        assert!(args.config.is_none());
        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.query, "jhon");
            assert_eq!(suggest_args.corpus.corpus, Some(PathBuf::from("names.txt")));
            assert_eq!(suggest_args.max_distance, Some(1));
            assert_eq!(suggest_args.limit, Some(3));
            assert!(!suggest_args.corpus.ignore_case);
        } else {
            panic!("Expected suggest command");
        }
    }

    #[test]
    fn test_negative_max_distance_parses() {
        let args = NamesakeArgs::try_parse_from(["namesake", "suggest", "juan", "-d", "-1"]).unwrap();
        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.max_distance, Some(-1));
        } else {
            panic!("Expected suggest command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = NamesakeArgs::try_parse_from([
            "namesake", "distance", "jhon", "john", "--format", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
        assert!(matches!(args.command, Command::Distance(_)));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            NamesakeArgs::try_parse_from(["namesake", "-q", "-vvv", "stats", "--ignore-case"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
        if let Command::Stats(stats_args) = args.command {
            assert!(stats_args.corpus.ignore_case);
        } else {
            panic!("Expected stats command");
        }
    }

    #[test]
    fn test_missing_query_is_rejected() {
        assert!(NamesakeArgs::try_parse_from(["namesake", "suggest"]).is_err());
    }
}
