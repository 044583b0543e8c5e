//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{DomainfixArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a single suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub input: String,
    pub suggestion: String,
    pub changed: bool,
    pub algorithm: String,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub results: Vec<SuggestionResult>,
    pub cutoff: f64,
}

/// One algorithm's output in a comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlgorithmComparison {
    pub algorithm: String,
    pub suggestion: String,
    pub edit_distance: usize,
    pub average_latency_us: f64,
}

/// Result structure for the compare command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResults {
    pub domain: String,
    pub iterations: usize,
    pub algorithms: Vec<AlgorithmComparison>,
}

/// Reference data listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct DomainListing {
    pub domains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<BTreeMap<String, String>>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result for a terminal.
    fn print_human(&self, args: &DomainfixArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &DomainfixArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DomainfixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for SuggestionResults {
    fn print_human(&self, args: &DomainfixArgs) {
        for result in &self.results {
            if args.verbosity() > 1 {
                let marker = if result.changed { "->" } else { "==" };
                println!(
                    "{} {marker} {} ({})",
                    result.input, result.suggestion, result.algorithm
                );
            } else {
                println!("{}", result.suggestion);
            }
        }
    }
}

impl HumanOutput for ComparisonResults {
    fn print_human(&self, _args: &DomainfixArgs) {
        println!("Algorithm comparison for: {}", self.domain);
        println!("══════════════════════════");

        for comparison in &self.algorithms {
            println!(
                "{:<14} {:<24} distance {:<3} {:.3}µs",
                comparison.algorithm,
                comparison.suggestion,
                comparison.edit_distance,
                comparison.average_latency_us
            );
        }

        println!();
        println!("Iterations per algorithm: {}", self.iterations);
    }
}

impl HumanOutput for DomainListing {
    fn print_human(&self, args: &DomainfixArgs) {
        if args.verbosity() > 0 {
            println!("Reference domains ({}):", self.domains.len());
            println!("───────────────────");
        }
        for domain in &self.domains {
            println!("{domain}");
        }

        if let Some(lookup) = &self.lookup {
            println!();
            if args.verbosity() > 0 {
                println!("Lookup table ({}):", lookup.len());
                println!("─────────────");
            }
            for (typo, domain) in lookup {
                println!("{typo:<12} {domain}");
            }
        }
    }
}
