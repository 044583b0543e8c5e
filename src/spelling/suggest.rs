//! Domain suggestion entry points.

use std::borrow::Cow;
use std::sync::LazyLock;

use rayon::prelude::*;

use crate::spelling::domains::ReferenceData;
use crate::spelling::scorer::{Algorithm, DEFAULT_CUTOFF};

static DEFAULT_SUGGESTER: LazyLock<DomainSuggester> = LazyLock::new(DomainSuggester::new);

/// Options for a single suggestion.
#[derive(Debug, Clone, Copy)]
pub struct SuggestOptions<'a> {
    /// Minimum similarity required to accept a fuzzy match.
    pub cutoff: f64,
    /// Replaces the reference domain list for this call. An empty list
    /// falls back to the reference domains.
    pub override_list: Option<&'a [String]>,
    /// Similarity algorithm to use after the lookup table misses.
    pub algorithm: Algorithm,
}

impl<'a> SuggestOptions<'a> {
    /// Create options with the default cutoff and algorithm.
    pub fn new() -> Self {
        SuggestOptions {
            cutoff: DEFAULT_CUTOFF,
            override_list: None,
            algorithm: Algorithm::default(),
        }
    }

    /// Set the cutoff.
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Score against `domains` instead of the suggester's reference list.
    pub fn override_list(mut self, domains: &'a [String]) -> Self {
        self.override_list = Some(domains);
        self
    }

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for SuggestOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggests corrections for mistyped email domains.
///
/// The exact typo table is consulted first; otherwise the configured
/// [`Algorithm`] scores the candidate against the reference domains. When
/// nothing qualifies the candidate comes back unchanged.
///
/// A suggester never mutates its reference data and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct DomainSuggester {
    reference: Cow<'static, ReferenceData>,
}

impl DomainSuggester {
    /// Create a suggester over the built-in provider list and lookup table.
    pub fn new() -> Self {
        DomainSuggester {
            reference: Cow::Borrowed(ReferenceData::builtin()),
        }
    }

    /// Create a suggester over custom reference data.
    pub fn with_reference(reference: ReferenceData) -> Self {
        DomainSuggester {
            reference: Cow::Owned(reference),
        }
    }

    /// The reference data this suggester scores against.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Exact lookup-table probe.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.reference.lookup(word)
    }

    /// Suggest a domain using the default cutoff and algorithm.
    pub fn suggest(&self, word: &str) -> String {
        self.suggest_with(word, &SuggestOptions::default())
    }

    /// Suggest a domain for `word`, or return `word` unchanged.
    pub fn suggest_with(&self, word: &str, options: &SuggestOptions<'_>) -> String {
        let domains = options
            .override_list
            .filter(|list| !list.is_empty())
            .unwrap_or(self.reference.domains.as_slice());

        if let Some(domain) = self.lookup(word) {
            log::debug!("lookup table hit: {word} -> {domain}");
            return domain.to_string();
        }

        let scorer = options.algorithm.scorer(options.cutoff);
        match scorer.best_match(word, domains) {
            Some(domain) => {
                log::debug!("{}: {word} -> {domain}", scorer.name());
                domain.to_string()
            }
            None => {
                log::debug!("{}: no suggestion for {word}", scorer.name());
                word.to_string()
            }
        }
    }

    /// Suggest domains for many words in parallel. Results keep input order.
    pub fn suggest_batch<S>(&self, words: &[S], options: &SuggestOptions<'_>) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.suggest_with(word.as_ref(), options))
            .collect()
    }
}

impl Default for DomainSuggester {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggest a domain with the built-in data, default cutoff and algorithm.
///
/// ```
/// assert_eq!(domainfix::suggest("gmal.com"), "gmail.com");
/// assert_eq!(domainfix::suggest("gmail"), "gmail.com");
/// assert_eq!(domainfix::suggest("example.org"), "example.org");
/// ```
pub fn suggest(word: &str) -> String {
    DEFAULT_SUGGESTER.suggest(word)
}

/// Suggest a domain with the built-in data and explicit options.
///
/// `override_list` replaces the built-in domain list for this call only; the
/// lookup table still applies. An empty override list is ignored.
pub fn suggest_with(
    word: &str,
    cutoff: f64,
    override_list: Option<&[String]>,
    algorithm: Algorithm,
) -> String {
    let options = SuggestOptions {
        cutoff,
        override_list,
        algorithm,
    };
    DEFAULT_SUGGESTER.suggest_with(word, &options)
}
