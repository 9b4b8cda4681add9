// Shared-word similarity between two frequency profiles.
//
// For every word kept in both profiles, the score adds the word's frequency
// in each file:
//
//   sum(freq_a(w) + freq_b(w))  for w in a ∩ b
//
// Words present on only one side contribute nothing. The result is 0.0 for
// disjoint profiles and at most 2.0 (two identical, untruncated profiles).

use crate::profile::frequency::FrequencyProfile;

/// Compute the shared-word similarity of two profiles.
///
/// Shared terms are summed in ascending word order, whatever the argument
/// order, so `similarity(a, b)` and `similarity(b, a)` are bit-identical.
pub fn similarity(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    // Walk the smaller profile and probe the larger one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut shared: Vec<(&str, f64)> = small
        .iter()
        .filter_map(|(word, freq)| large.frequency(word).map(|other| (word, freq + other)))
        .collect();
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));

    shared.iter().map(|(_, term)| term).sum()
}
