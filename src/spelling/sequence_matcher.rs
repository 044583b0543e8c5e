//! Ratcliff/Obershelp block matching.
//!
//! The similarity of two strings is `2 * M / T`, where `T` is the total number
//! of characters in both strings and `M` is the number of characters covered
//! by matching blocks. Blocks are found by taking the longest common
//! contiguous run and recursing on the pieces to its left and right.
//!
//! The matcher indexes its second sequence (`b`) once, so scoring one word
//! against many reference domains keeps the word as `b` and swaps `a`.

use std::cmp::Ordering;

use ahash::AHashMap;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start of the block in the first sequence.
    pub a: usize,
    /// Start of the block in the second sequence.
    pub b: usize,
    /// Number of matching characters.
    pub size: usize,
}

impl Match {
    fn new(a: usize, b: usize, size: usize) -> Self {
        Match { a, b, size }
    }
}

/// Compares two strings character by character.
#[derive(Debug, Clone, Default)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each character of `b`, ascending.
    b2j: AHashMap<char, Vec<usize>>,
    /// Character counts of `b`, used by `quick_ratio`.
    b_counts: AHashMap<char, usize>,
}

impl SequenceMatcher {
    /// Create a matcher for the pair `(a, b)`.
    pub fn new(a: &str, b: &str) -> Self {
        let mut matcher = SequenceMatcher::default();
        matcher.set_seq1(a);
        matcher.set_seq2(b);
        matcher
    }

    /// Replace the first sequence. The index over `b` is kept.
    pub fn set_seq1(&mut self, a: &str) {
        self.a.clear();
        self.a.extend(a.chars());
    }

    /// Replace the second sequence and rebuild its index.
    pub fn set_seq2(&mut self, b: &str) {
        self.b = b.chars().collect();
        self.b2j.clear();
        self.b_counts.clear();

        for (j, &ch) in self.b.iter().enumerate() {
            self.b2j.entry(ch).or_default().push(j);
            *self.b_counts.entry(ch).or_insert(0) += 1;
        }
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of maximal size, the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`. Returns a zero-sized match at
    /// `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();
        for i in alo..ahi {
            let mut new_j2len = AHashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = j
                        .checked_sub(1)
                        .and_then(|p| j2len.get(&p))
                        .copied()
                        .unwrap_or(0);
                    let k = previous + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        Match::new(best_i, best_j, best_size)
    }

    /// All matching blocks in ascending order, adjacent blocks merged.
    ///
    /// The last element is always the sentinel `Match { a: len(a), b: len(b), size: 0 }`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            blocks.push(m);
        }

        blocks.sort_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            if let Some(last) = merged.last_mut()
                && last.a + last.size == m.a
                && last.b + last.size == m.b
            {
                last.size += m.size;
            } else {
                merged.push(m);
            }
        }
        merged.push(Match::new(la, lb, 0));
        merged
    }

    /// Similarity in `[0.0, 1.0]`. Two empty strings score 1.0.
    pub fn ratio(&self) -> f64 {
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared character counts.
    pub fn quick_ratio(&self) -> f64 {
        let mut available: AHashMap<char, isize> = AHashMap::new();
        let mut matches = 0;

        for ch in &self.a {
            let remaining = available
                .entry(*ch)
                .or_insert_with(|| self.b_counts.get(ch).copied().unwrap_or(0) as isize);
            if *remaining > 0 {
                matches += 1;
            }
            *remaining -= 1;
        }

        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// The best matches for `word` among `possibilities`, at most `n`, best first.
///
/// Only possibilities scoring at least `cutoff` are returned. Equal scores keep
/// the order of `possibilities`.
pub fn get_close_matches<'a, S: AsRef<str>>(
    word: &str,
    possibilities: &'a [S],
    n: usize,
    cutoff: f64,
) -> Vec<(&'a str, f64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut matcher = SequenceMatcher::default();
    matcher.set_seq2(word);

    let mut scored = Vec::new();
    for possibility in possibilities {
        let candidate = possibility.as_ref();
        matcher.set_seq1(candidate);
        if matcher.real_quick_ratio() >= cutoff && matcher.quick_ratio() >= cutoff {
            let score = matcher.ratio();
            if score >= cutoff {
                scored.push((candidate, score));
            }
        }
    }

    // Stable sort keeps list order among equal scores.
    scored.sort_by(|x, y| y.1.partial_cmp(&x.1).unwrap_or(Ordering::Equal));
    scored.truncate(n);
    scored
}
