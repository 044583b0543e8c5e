//! Command implementations for the domainfix CLI.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DomainfixError, Result};
use crate::spelling::domains::ReferenceData;
use crate::spelling::levenshtein::levenshtein_distance;
use crate::spelling::scorer::Algorithm;
use crate::spelling::suggest::{DomainSuggester, SuggestOptions};

/// Execute a CLI command.
pub fn execute_command(args: DomainfixArgs) -> Result<()> {
    let suggester = load_suggester(&args)?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest_domains(suggest_args, &suggester, &args),
        Command::Compare(compare_args) => compare_algorithms(compare_args, &suggester, &args),
        Command::Domains(domains_args) => list_domains(domains_args, &suggester, &args),
    }
}

/// Build the suggester from `--reference`, or the built-in data.
fn load_suggester(args: &DomainfixArgs) -> Result<DomainSuggester> {
    match &args.reference {
        Some(path) => {
            if args.verbosity() > 1 {
                eprintln!("Loading reference data from: {}", path.display());
            }
            Ok(DomainSuggester::with_reference(ReferenceData::load_from_file(path)?))
        }
        None => Ok(DomainSuggester::new()),
    }
}

/// Reject cutoffs outside (0, 1].
pub fn validate_cutoff(cutoff: f64) -> Result<f64> {
    if cutoff > 0.0 && cutoff <= 1.0 {
        Ok(cutoff)
    } else {
        Err(DomainfixError::invalid_argument(format!(
            "cutoff must be in (0, 1], got {cutoff}"
        )))
    }
}

/// Suggest corrections for every domain given on the command line.
fn suggest_domains(
    args: &SuggestArgs,
    suggester: &DomainSuggester,
    cli_args: &DomainfixArgs,
) -> Result<()> {
    let cutoff = validate_cutoff(args.cutoff)?;

    let override_list = match &args.domains_file {
        Some(path) => {
            let domains = ReferenceData::load_domain_list(path)?;
            log::info!("using {} domains from {}", domains.len(), path.display());
            Some(domains)
        }
        None => None,
    };

    let mut options = SuggestOptions::new().cutoff(cutoff).algorithm(args.algorithm);
    if let Some(domains) = &override_list {
        options = options.override_list(domains);
    }

    let suggestions = suggester.suggest_batch(&args.domains, &options);
    let results = args
        .domains
        .iter()
        .zip(suggestions)
        .map(|(input, suggestion)| SuggestionResult {
            changed: *input != suggestion,
            input: input.clone(),
            suggestion,
            algorithm: args.algorithm.name().to_string(),
        })
        .collect();

    output_result(&SuggestionResults { results, cutoff }, cli_args)
}

/// Run every algorithm on one domain, timing each.
fn compare_algorithms(
    args: &CompareArgs,
    suggester: &DomainSuggester,
    cli_args: &DomainfixArgs,
) -> Result<()> {
    let cutoff = validate_cutoff(args.cutoff)?;
    if args.iterations == 0 {
        return Err(DomainfixError::invalid_argument(
            "iterations must be at least 1",
        ));
    }

    let algorithms = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let options = SuggestOptions::new().cutoff(cutoff).algorithm(algorithm);

            let start_time = Instant::now();
            let mut suggestion = String::new();
            for _ in 0..args.iterations {
                suggestion = suggester.suggest_with(&args.domain, &options);
            }
            let duration = start_time.elapsed();

            AlgorithmComparison {
                algorithm: algorithm.name().to_string(),
                edit_distance: levenshtein_distance(&args.domain, &suggestion),
                suggestion,
                average_latency_us: duration.as_secs_f64() * 1_000_000.0
                    / args.iterations as f64,
            }
        })
        .collect();

    output_result(
        &ComparisonResults {
            domain: args.domain.clone(),
            iterations: args.iterations,
            algorithms,
        },
        cli_args,
    )
}

/// List the reference data in use.
fn list_domains(
    args: &DomainsArgs,
    suggester: &DomainSuggester,
    cli_args: &DomainfixArgs,
) -> Result<()> {
    let reference = suggester.reference();
    let lookup = args.lookup.then(|| {
        reference
            .lookup
            .iter()
            .map(|(typo, domain)| (typo.clone(), domain.clone()))
            .collect::<BTreeMap<_, _>>()
    });

    output_result(
        &DomainListing {
            domains: reference.domains.clone(),
            lookup,
        },
        cli_args,
    )
}
