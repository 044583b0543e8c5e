//! Levenshtein distances and the normalized edit-distance ratio.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    weighted_distance(s1, s2, 1)
}

/// Edit distance where a substitution costs two edits (a deletion plus an
/// insertion). Equal to `len(a) + len(b) - 2 * lcs(a, b)`.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    weighted_distance(s1, s2, 2)
}

/// Normalized similarity in `[0.0, 1.0]`, 1.0 for identical strings.
///
/// `ratio = (len(a) + len(b) - indel_distance(a, b)) / (len(a) + len(b))`.
/// Two empty strings are identical and score 1.0.
pub fn levenshtein_ratio(s1: &str, s2: &str) -> f64 {
    let len_sum = s1.chars().count() + s2.chars().count();
    if len_sum == 0 {
        return 1.0;
    }

    let distance = indel_distance(s1, s2);
    (len_sum - distance) as f64 / len_sum as f64
}

#[allow(clippy::needless_range_loop)]
fn weighted_distance(s1: &str, s2: &str, substitution_cost: usize) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                substitution_cost
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}
