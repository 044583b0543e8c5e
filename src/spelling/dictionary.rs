//! Frequency table over a reference domain list.

use ahash::AHashMap;

/// Occurrence count and first position of a domain in its source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainEntry {
    /// How many times the domain appears in the list.
    pub frequency: u32,
    /// Index of the first occurrence.
    pub position: usize,
}

/// A dictionary that stores domains and their frequencies for spelling correction.
///
/// Keys borrow from the list the dictionary was built from and are matched
/// exactly, without case folding.
#[derive(Debug, Clone, Default)]
pub struct DomainDictionary<'a> {
    /// Domains and their entries
    entries: AHashMap<&'a str, DomainEntry>,
    /// Total domain count for probability calculations
    total_count: u64,
}

impl<'a> DomainDictionary<'a> {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        DomainDictionary {
            entries: AHashMap::new(),
            total_count: 0,
        }
    }

    /// Count every domain in `domains`; duplicates raise the frequency.
    pub fn from_domains<S: AsRef<str>>(domains: &'a [S]) -> Self {
        let mut dictionary = DomainDictionary::new();
        for domain in domains {
            dictionary.increment(domain.as_ref());
        }
        dictionary
    }

    /// Increment the frequency of a domain by 1.
    pub fn increment(&mut self, domain: &'a str) {
        let position = self.entries.len();
        self.entries
            .entry(domain)
            .or_insert(DomainEntry {
                frequency: 0,
                position,
            })
            .frequency += 1;
        self.total_count += 1;
    }

    /// Check if a domain exists in the dictionary.
    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    /// The stored key and entry for `domain`, if present.
    pub fn get(&self, domain: &str) -> Option<(&'a str, DomainEntry)> {
        self.entries
            .get_key_value(domain)
            .map(|(&key, &entry)| (key, entry))
    }

    /// Every stored domain with its entry, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, DomainEntry)> + '_ {
        self.entries.iter().map(|(&key, &entry)| (key, entry))
    }

    /// Get the frequency of a domain.
    pub fn frequency(&self, domain: &str) -> u32 {
        self.entries.get(domain).map_or(0, |e| e.frequency)
    }

    /// Index of the domain's first occurrence among distinct domains.
    pub fn position(&self, domain: &str) -> Option<usize> {
        self.entries.get(domain).map(|e| e.position)
    }

    /// Get the probability of a domain (frequency / total_count).
    pub fn probability(&self, domain: &str) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.frequency(domain) as f64 / self.total_count as f64
    }

    /// Get the total number of unique domains.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
