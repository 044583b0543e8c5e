//! Command line argument parsing for the domainfix CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::scorer::{Algorithm, DEFAULT_CUTOFF};

/// domainfix - suggest corrections for mistyped email domains
#[derive(Parser, Debug, Clone)]
#[command(name = "domainfix")]
#[command(about = "Suggest corrections for mistyped email domains")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DomainfixArgs {
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

    /// Reference data file (JSON with "domains" and "lookup")
    #[arg(long, value_name = "FILE", global = true)]
    pub reference: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DomainfixArgs {
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
    /// Suggest corrections for one or more domains
    Suggest(SuggestArgs),

    /// Run every algorithm on a domain and compare outputs and latency
    Compare(CompareArgs),

    /// List the reference domains and lookup table
    Domains(DomainsArgs),
}

/// Arguments for suggesting domains
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Domains to correct
    #[arg(value_name = "DOMAIN", required = true)]
    pub domains: Vec<String>,

    /// Minimum similarity required to accept a match
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Similarity algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::BlockMatch)]
    pub algorithm: Algorithm,

    /// Domain list replacing the reference domains, one per line
    #[arg(long, value_name = "FILE")]
    pub domains_file: Option<PathBuf>,
}

/// Arguments for comparing algorithms
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Domain to correct
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Minimum similarity required to accept a match
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Number of timed runs per algorithm
    #[arg(short, long, default_value = "100")]
    pub iterations: usize,
}

/// Arguments for listing reference data
#[derive(Parser, Debug, Clone)]
pub struct DomainsArgs {
    /// Include the lookup table
    #[arg(short, long)]
    pub lookup: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest() {
        let args = DomainfixArgs::try_parse_from([
            "domainfix",
            "suggest",
            "gmal.com",
            "yahuo.com",
            "--algorithm",
            "levenshtein",
            "--cutoff",
            "0.8",
        ])
        .unwrap();

        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.domains, vec!["gmal.com", "yahuo.com"]);
                assert_eq!(suggest.algorithm, Algorithm::EditDistance);
                assert!((suggest.cutoff - 0.8).abs() < 1e-9);
                assert!(suggest.domains_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let args = DomainfixArgs::try_parse_from(["domainfix", "suggest", "gmal.com"]).unwrap();
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);

        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.algorithm, Algorithm::BlockMatch);
                assert!((suggest.cutoff - DEFAULT_CUTOFF).abs() < 1e-9);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args =
            DomainfixArgs::try_parse_from(["domainfix", "-vvv", "domains", "--lookup"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = DomainfixArgs::try_parse_from(["domainfix", "-q", "-v", "domains"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_suggest_requires_domain() {
        assert!(DomainfixArgs::try_parse_from(["domainfix", "suggest"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = DomainfixArgs::try_parse_from([
            "domainfix",
            "compare",
            "gmal.com",
            "--format",
            "json",
            "--iterations",
            "5",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Compare(compare) => assert_eq!(compare.iterations, 5),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
