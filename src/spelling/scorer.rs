//! Domain similarity scorers.
//!
//! A [`DomainScorer`] picks the reference domain a candidate most likely
//! meant, or nothing when no domain is close enough. Three strategies are
//! provided and selected through [`Algorithm`]:
//!
//! - [`BlockMatchScorer`]: Ratcliff/Obershelp similarity, best score wins.
//! - [`EditDistanceScorer`]: normalized edit-distance ratio, first domain over
//!   the cutoff wins.
//! - [`FrequencyScorer`]: Norvig-style correction over one and two edits,
//!   most frequent domain wins.

use std::fmt;
use std::str::FromStr;

use ahash::AHashSet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{DomainfixError, Result};
use crate::spelling::dictionary::{DomainDictionary, DomainEntry};
use crate::spelling::levenshtein::{levenshtein_distance, levenshtein_ratio};
use crate::spelling::sequence_matcher::get_close_matches;

/// Default cutoff for [`BlockMatchScorer`] and for `suggest`.
pub const DEFAULT_CUTOFF: f64 = 0.77;

/// Default cutoff for [`EditDistanceScorer`] when used on its own.
pub const DEFAULT_EDIT_DISTANCE_CUTOFF: f64 = 0.80;

/// Picks the closest reference domain for a candidate.
pub trait DomainScorer: Send + Sync + fmt::Debug {
    /// Get the name of this scorer.
    fn name(&self) -> &'static str;

    /// The reference domain `word` most likely meant, if any qualifies.
    fn best_match<'a>(&self, word: &str, domains: &'a [String]) -> Option<&'a str>;
}

/// Similarity algorithm used when no lookup entry matches.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Ratcliff/Obershelp block matching
    #[default]
    #[value(alias = "difflib", alias = "default")]
    BlockMatch,
    /// Normalized edit-distance ratio
    #[value(alias = "levenshtein")]
    EditDistance,
    /// Frequency-weighted one and two edit correction
    #[value(alias = "norvig", alias = "spellr")]
    Frequency,
}

impl Algorithm {
    /// All algorithms, default first.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BlockMatch,
        Algorithm::EditDistance,
        Algorithm::Frequency,
    ];

    /// Get the name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BlockMatch => "block-match",
            Algorithm::EditDistance => "edit-distance",
            Algorithm::Frequency => "frequency",
        }
    }

    /// Create the scorer for this algorithm. The frequency scorer ignores `cutoff`.
    pub fn scorer(&self, cutoff: f64) -> Box<dyn DomainScorer> {
        match self {
            Algorithm::BlockMatch => Box::new(BlockMatchScorer::new(cutoff)),
            Algorithm::EditDistance => Box::new(EditDistanceScorer::new(cutoff)),
            Algorithm::Frequency => Box::new(FrequencyScorer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DomainfixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "block-match" | "block" | "difflib" | "default" => Ok(Algorithm::BlockMatch),
            "edit-distance" | "edit" | "levenshtein" => Ok(Algorithm::EditDistance),
            "frequency" | "norvig" | "spellr" => Ok(Algorithm::Frequency),
            other => Err(DomainfixError::invalid_argument(format!(
                "unknown algorithm '{other}'"
            ))),
        }
    }
}

/// Highest Ratcliff/Obershelp similarity at or above the cutoff.
#[derive(Debug, Clone, Copy)]
pub struct BlockMatchScorer {
    cutoff: f64,
}

impl BlockMatchScorer {
    /// Create a scorer accepting scores of at least `cutoff`.
    pub fn new(cutoff: f64) -> Self {
        BlockMatchScorer { cutoff }
    }
}

impl Default for BlockMatchScorer {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

impl DomainScorer for BlockMatchScorer {
    fn name(&self) -> &'static str {
        Algorithm::BlockMatch.name()
    }

    fn best_match<'a>(&self, word: &str, domains: &'a [String]) -> Option<&'a str> {
        get_close_matches(word, domains, 1, self.cutoff)
            .first()
            .map(|&(domain, score)| {
                log::trace!("block-match: {word} -> {domain} ({score:.3})");
                domain
            })
    }
}

/// First domain, in list order, whose edit-distance ratio exceeds the cutoff.
///
/// This is not the best-scoring domain: with a permissive cutoff an earlier,
/// weaker match shadows a later exact one.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceScorer {
    cutoff: f64,
}

impl EditDistanceScorer {
    /// Create a scorer accepting ratios strictly above `cutoff`.
    pub fn new(cutoff: f64) -> Self {
        EditDistanceScorer { cutoff }
    }

    /// All domains whose ratio exceeds the cutoff, in list order, at most `n`.
    pub fn matches<'a>(&self, word: &str, domains: &'a [String], n: usize) -> Vec<&'a str> {
        domains
            .iter()
            .map(String::as_str)
            .filter(|domain| levenshtein_ratio(word, domain) > self.cutoff)
            .take(n)
            .collect()
    }
}

impl Default for EditDistanceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_EDIT_DISTANCE_CUTOFF)
    }
}

impl DomainScorer for EditDistanceScorer {
    fn name(&self) -> &'static str {
        Algorithm::EditDistance.name()
    }

    fn best_match<'a>(&self, word: &str, domains: &'a [String]) -> Option<&'a str> {
        self.matches(word, domains, 1).first().copied()
    }
}

/// Norvig-style correction weighted by how often a domain appears in the list.
///
/// Candidates are the word itself, then every string one edit away, then
/// every string two edits away; the first tier containing known domains wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

const LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

impl DomainScorer for FrequencyScorer {
    fn name(&self) -> &'static str {
        Algorithm::Frequency.name()
    }

    fn best_match<'a>(&self, word: &str, domains: &'a [String]) -> Option<&'a str> {
        let dictionary = DomainDictionary::from_domains(domains);
        if dictionary.is_empty() {
            return None;
        }
        correction(word, &dictionary)
    }
}

fn correction<'a>(word: &str, dictionary: &DomainDictionary<'a>) -> Option<&'a str> {
    if let Some((known, _)) = dictionary.get(word) {
        return Some(known);
    }

    let first_edits = edits1(word);
    let known = first_edits.iter().filter_map(|edit| dictionary.get(edit));
    if let Some(best) = most_probable(known, dictionary) {
        return Some(best);
    }

    // Second tier: walk each domain back one edit instead of expanding
    // every second edit of the word.
    let alphabet = edit_alphabet(word);
    let word_len = word.chars().count();
    let known = dictionary
        .entries()
        .filter(|(domain, _)| domain.chars().count().abs_diff(word_len) <= 2)
        .filter(|(domain, _)| levenshtein_distance(word, domain) <= 4)
        .filter(|(domain, _)| has_predecessor_in(domain, &first_edits, &alphabet));
    most_probable(known, dictionary)
}

/// The most probable candidate; ties go to the domain listed first.
fn most_probable<'a, I>(candidates: I, dictionary: &DomainDictionary<'a>) -> Option<&'a str>
where
    I: Iterator<Item = (&'a str, DomainEntry)>,
{
    candidates
        .max_by(|(x, x_entry), (y, y_entry)| {
            dictionary
                .probability(x)
                .total_cmp(&dictionary.probability(y))
                .then_with(|| y_entry.position.cmp(&x_entry.position))
        })
        .map(|(domain, _)| domain)
}

/// `chars` with `remove` characters at `at` replaced by `insert`.
fn spliced(chars: &[char], at: usize, remove: usize, insert: Option<char>) -> String {
    chars[..at]
        .iter()
        .chain(insert.iter())
        .chain(&chars[at + remove..])
        .collect()
}

/// `chars` with the characters at `at` and `at + 1` swapped.
fn swapped(chars: &[char], at: usize) -> String {
    chars[..at]
        .iter()
        .chain([&chars[at + 1], &chars[at]])
        .chain(&chars[at + 2..])
        .collect()
}

/// Every string one deletion, adjacent transposition, substitution or
/// insertion away from `word`. Substituted and inserted letters are `a..=z`.
fn edits1(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::with_capacity(54 * len + 26);

    // Deletions
    for i in 0..len {
        edits.insert(spliced(&chars, i, 1, None));
    }

    // Transpositions (swapping adjacent characters)
    for i in 0..len.saturating_sub(1) {
        edits.insert(swapped(&chars, i));
    }

    // Replacements
    for i in 0..len {
        for letter in LETTERS {
            edits.insert(spliced(&chars, i, 1, Some(letter)));
        }
    }

    // Insertions
    for i in 0..=len {
        for letter in LETTERS {
            edits.insert(spliced(&chars, i, 0, Some(letter)));
        }
    }

    edits
}

/// Characters a single edit of `word` can contain.
fn edit_alphabet(word: &str) -> Vec<char> {
    let mut alphabet: Vec<char> = LETTERS.chain(word.chars()).collect();
    alphabet.sort_unstable();
    alphabet.dedup();
    alphabet
}

/// Whether some string in `first_edits` reaches `domain` in one more edit.
///
/// Generates the strings one edit before `domain`, restricted to characters
/// in `alphabet`, and probes `first_edits` for each.
fn has_predecessor_in(domain: &str, first_edits: &AHashSet<String>, alphabet: &[char]) -> bool {
    let chars: Vec<char> = domain.chars().collect();
    let len = chars.len();
    let is_letter = |i: usize| LETTERS.contains(&chars[i]);

    // Undo a deletion
    (0..=len).any(|i| {
        alphabet
            .iter()
            .any(|&c| first_edits.contains(&spliced(&chars, i, 0, Some(c))))
    })
        // Undo a transposition
        || (0..len.saturating_sub(1)).any(|i| first_edits.contains(&swapped(&chars, i)))
        // Undo a replacement, which always leaves a letter
        || (0..len).filter(|&i| is_letter(i)).any(|i| {
            alphabet
                .iter()
                .any(|&c| first_edits.contains(&spliced(&chars, i, 1, Some(c))))
        })
        // Undo an insertion, which always adds a letter
        || (0..len)
            .filter(|&i| is_letter(i))
            .any(|i| first_edits.contains(&spliced(&chars, i, 1, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::domains::ReferenceData;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::default(), Algorithm::BlockMatch);
        assert_eq!(Algorithm::BlockMatch.to_string(), "block-match");
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.scorer(DEFAULT_CUTOFF).name(), algorithm.name());
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_algorithm_from_str_aliases() {
        assert_eq!("difflib".parse::<Algorithm>().unwrap(), Algorithm::BlockMatch);
        assert_eq!("Levenshtein".parse::<Algorithm>().unwrap(), Algorithm::EditDistance);
        assert_eq!("spellr".parse::<Algorithm>().unwrap(), Algorithm::Frequency);
        assert!("soundex".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::EditDistance).unwrap();
        assert_eq!(json, "\"edit-distance\"");
        let parsed: Algorithm = serde_json::from_str("\"frequency\"").unwrap();
        assert_eq!(parsed, Algorithm::Frequency);
    }

    #[test]
    fn test_block_match_scorer() {
        let reference = &ReferenceData::builtin().domains;
        let scorer = BlockMatchScorer::default();

        assert_eq!(scorer.best_match("gmal.com", reference), Some("gmail.com"));
        assert_eq!(scorer.best_match("yahuo.com", reference), Some("yahoo.com"));
        assert_eq!(scorer.best_match("hotmial.com", reference), Some("hotmail.com"));
        assert_eq!(scorer.best_match("completelyrandomstring123", reference), None);
        assert_eq!(scorer.best_match("", reference), None);
    }

    #[test]
    fn test_block_match_cutoff_is_inclusive() {
        // ratio("gmail.com", "gmal.com") == 16 / 17
        let list = domains(&["gmail.com"]);
        let exact = 16.0 / 17.0;
        assert_eq!(BlockMatchScorer::new(exact).best_match("gmal.com", &list), Some("gmail.com"));
        assert_eq!(BlockMatchScorer::new(exact + 1e-9).best_match("gmal.com", &list), None);
    }

    #[test]
    fn test_block_match_prefers_best_score() {
        // "email.com" comes first but "gmail.com" scores higher.
        let list = domains(&["email.com", "gmail.com"]);
        assert_eq!(
            BlockMatchScorer::default().best_match("gmal.com", &list),
            Some("gmail.com")
        );
    }

    #[test]
    fn test_edit_distance_scorer_first_match_wins() {
        let reference = &ReferenceData::builtin().domains;

        let scorer = EditDistanceScorer::new(DEFAULT_CUTOFF);
        assert_eq!(scorer.best_match("yahuo.com", reference), Some("yahoo.com"));
        assert_eq!(scorer.best_match("hotmial.com", reference), Some("hotmail.com"));
        // Earlier, weaker matches shadow the best one.
        assert_eq!(scorer.best_match("gmal.com", reference), Some("aol.com"));
        assert_eq!(scorer.best_match("hotmail.com", reference), Some("email.com"));

        let scorer = EditDistanceScorer::default();
        assert_eq!(scorer.best_match("gmal.com", reference), Some("email.com"));
        assert_eq!(scorer.best_match("gmial.com", reference), Some("gmail.com"));
        assert_eq!(scorer.best_match("completelyrandomstring123", reference), None);
    }

    #[test]
    fn test_edit_distance_cutoff_is_exclusive() {
        // ratio("yahoo.com", "yahuo.com") == 16 / 18
        let list = domains(&["yahoo.com"]);
        let exact = 16.0 / 18.0;
        assert_eq!(EditDistanceScorer::new(exact).best_match("yahuo.com", &list), None);
        assert_eq!(
            EditDistanceScorer::new(exact - 1e-9).best_match("yahuo.com", &list),
            Some("yahoo.com")
        );
    }

    #[test]
    fn test_edit_distance_matches() {
        let list = domains(&["gmx.de", "gmx.at", "gmx.ch", "web.de"]);
        let scorer = EditDistanceScorer::new(0.5);
        assert_eq!(scorer.matches("gmx.xx", &list, 2), vec!["gmx.de", "gmx.at"]);
        assert!(scorer.matches("gmx.xx", &list, 0).is_empty());
    }

    #[test]
    fn test_edits1() {
        let edits = edits1("ab");
        // Deletions
        assert!(edits.contains("a"));
        assert!(edits.contains("b"));
        // Transposition
        assert!(edits.contains("ba"));
        // Substitutions
        assert!(edits.contains("zb"));
        assert!(edits.contains("az"));
        // Insertions
        assert!(edits.contains("xab"));
        assert!(edits.contains("abx"));
        assert!(!edits.contains("abxy"));

        assert_eq!(edits1("").len(), 26);
    }

    #[test]
    fn test_frequency_scorer() {
        let reference = &ReferenceData::builtin().domains;
        let scorer = FrequencyScorer;

        assert_eq!(scorer.best_match("yahoo.com", reference), Some("yahoo.com"));
        assert_eq!(scorer.best_match("gmal.com", reference), Some("gmail.com"));
        assert_eq!(scorer.best_match("yahuo.com", reference), Some("yahoo.com"));
        assert_eq!(scorer.best_match("hotmial.com", reference), Some("hotmail.com"));
        // Two edits away
        assert_eq!(scorer.best_match("gmial.co", reference), Some("gmail.com"));
        assert_eq!(scorer.best_match("gamil.cmo", reference), Some("gmail.com"));
        assert_eq!(scorer.best_match("completelyrandomstring123", reference), None);
    }

    #[test]
    fn test_frequency_scorer_only_returns_known_domains() {
        let list = domains(&["gmail.com"]);
        assert_eq!(FrequencyScorer.best_match("zzzz", &list), None);
        assert_eq!(FrequencyScorer.best_match("", &list), None);
        assert_eq!(FrequencyScorer.best_match("gmail.com", &[]), None);
    }

    #[test]
    fn test_frequency_scorer_ties() {
        // All three are two substitutions away from "gmx.xx".
        let uniform = domains(&["gmx.at", "gmx.ch", "gmx.de"]);
        assert_eq!(FrequencyScorer.best_match("gmx.xx", &uniform), Some("gmx.at"));

        let weighted = domains(&["gmx.at", "gmx.de", "gmx.de"]);
        assert_eq!(FrequencyScorer.best_match("gmx.xx", &weighted), Some("gmx.de"));
    }

    #[test]
    fn test_frequency_scorer_closer_tier_wins() {
        // "gmail.com" is one edit away and beats the more frequent two-edit match.
        let list = domains(&["gmail.co", "gmail.co", "gmail.com"]);
        assert_eq!(FrequencyScorer.best_match("gmal.com", &list), Some("gmail.com"));
    }

    /// Reference implementation of the second tier: expand every second edit.
    fn expanded_correction<'a>(word: &str, dictionary: &DomainDictionary<'a>) -> Option<&'a str> {
        if let Some((known, _)) = dictionary.get(word) {
            return Some(known);
        }
        let first_edits = edits1(word);
        let first: Vec<_> = first_edits
            .iter()
            .filter_map(|edit| dictionary.get(edit))
            .collect();
        if !first.is_empty() {
            return most_probable(first.into_iter(), dictionary);
        }
        let second: Vec<_> = first_edits
            .iter()
            .flat_map(|edit| edits1(edit))
            .filter_map(|edit| dictionary.get(&edit))
            .collect();
        most_probable(second.into_iter(), dictionary)
    }

    #[test]
    fn test_second_tier_matches_full_expansion() {
        let mut list = ReferenceData::builtin().domains.clone();
        list.extend(domains(&["gmx.de", "gmx.de", "c.a", "abc"]));
        let dictionary = DomainDictionary::from_domains(&list);

        for word in [
            "gmial.co",
            "gamil.cmo",
            "yhoo.cm",
            "hotmal.con",
            "outlok.cm",
            "Gmal.com",
            "GMAIL.COM",
            "gmx.xx",
            "wbe.dee",
            "ca",
            "cba",
            "a.c",
            "x",
            "",
        ] {
            assert_eq!(
                correction(word, &dictionary),
                expanded_correction(word, &dictionary),
                "mismatch for {word:?}"
            );
        }
    }

    #[test]
    fn test_has_predecessor_in() {
        let first_edits = edits1("ca");
        let alphabet = edit_alphabet("ca");
        // "ca" -> "ac" -> "abc"
        assert!(has_predecessor_in("abc", &first_edits, &alphabet));
        // Uppercase letters are never inserted.
        assert!(!has_predecessor_in("caXY", &first_edits, &alphabet));
        assert!(has_predecessor_in("caxy", &first_edits, &alphabet));
    }

    #[test]
    fn test_frequency_scorer_long_miss_is_fast() {
        let reference = &ReferenceData::builtin().domains;
        let words = [
            "completelyrandomstring123".to_string(),
            "a".repeat(40),
            "abcdefghij".repeat(6),
        ];

        let start = std::time::Instant::now();
        for word in &words {
            assert_eq!(FrequencyScorer.best_match(word, reference), None);
        }
        assert!(
            start.elapsed() < std::time::Duration::from_secs(1),
            "took {:?}",
            start.elapsed()
        );
    }
}
