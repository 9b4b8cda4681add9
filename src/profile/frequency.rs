// FrequencyProfile: the bounded word-frequency summary of one file.
//
// A profile maps each of a file's most frequent counted words to its relative
// frequency (occurrences / total counted words). Only the top `max_words`
// words are kept. Ties in frequency are broken by ascending word order so the
// same text always yields the same profile.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::debug;

use super::normalize::tokenize;
use crate::error::SimilarityError;

/// The word-frequency profile of a single file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    /// Kept words in rank order (highest frequency first)
    ranked: Vec<(String, f64)>,
    /// Same entries keyed by word, for overlap lookups
    lookup: HashMap<String, f64>,
    /// Number of counted words in the source text
    total_words: usize,
    /// Number of distinct counted words before truncation
    distinct_words: usize,
}

impl FrequencyProfile {
    /// Build a profile from raw text, keeping at most `max_words` entries.
    pub fn from_text(text: &str, max_words: usize) -> Self {
        // BTreeMap iterates in word order, which the stable sort below keeps
        // as the tie-break.
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_words = 0usize;
        for word in tokenize(text) {
            *counts.entry(word).or_insert(0) += 1;
            total_words += 1;
        }

        if total_words == 0 {
            return Self::default();
        }

        let distinct_words = counts.len();
        let total = total_words as f64;
        let mut ranked: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(max_words);

        let lookup = ranked.iter().cloned().collect();

        Self {
            ranked,
            lookup,
            total_words,
            distinct_words,
        }
    }

    /// An empty profile, used in place of a file that could not be read.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Relative frequency of `word`, if it made the cut.
    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.lookup.get(word).copied()
    }

    /// Iterate over kept words in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranked.iter().map(|(w, f)| (w.as_str(), *f))
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Counted words in the source text (the frequency denominator).
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Distinct counted words before the profile was truncated.
    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    /// Sum of the kept frequencies. At most 1.0; exactly 1.0 when nothing
    /// was truncated.
    pub fn frequency_sum(&self) -> f64 {
        self.ranked.iter().map(|(_, f)| f).sum()
    }

    /// Display the top `limit` words as a bar chart in the terminal.
    ///
    /// Bars are scaled against the most frequent word so the shape of the
    /// distribution is visible even when all frequencies are small.
    pub fn display(&self, name: &str, limit: usize) {
        println!(
            "\n{}",
            format!(
                "=== Word profile for {} ({} counted words, {} distinct) ===",
                name, self.total_words, self.distinct_words
            )
            .bold()
        );
        println!();

        if self.is_empty() {
            println!("  No countable words.");
            return;
        }

        let bar_width: usize = 20;
        let top = self.ranked[0].1;

        for (i, (word, freq)) in self.iter().take(limit).enumerate() {
            let filled = ((freq / top) * bar_width as f64).round() as usize;
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let colored_bar = if i < 10 {
                bar.bright_green()
            } else if i < 30 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!("  {:>3}. {:<20} {} {:.4}", i + 1, word.bold(), colored_bar, freq);
        }

        if self.len() > limit {
            println!(
                "\n  {}",
                format!("... {} more words in the profile", self.len() - limit).dimmed()
            );
        }
    }
}

/// Read a file and build its profile.
///
/// Fails with [`SimilarityError::UnreadableFile`] when the file cannot be
/// opened or read. Bytes are decoded lossily; anything non-ASCII is discarded
/// by normalization anyway.
pub fn build_profile(path: &Path, max_words: usize) -> Result<FrequencyProfile, SimilarityError> {
    let bytes = fs::read(path).map_err(|source| SimilarityError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let profile = FrequencyProfile::from_text(&text, max_words);

    debug!(
        path = %path.display(),
        total_words = profile.total_words(),
        kept = profile.len(),
        "Built frequency profile"
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_frequencies() {
        let profile = FrequencyProfile::from_text("the cat sat on the cat mat", 100);
        // THE is excluded: CAT SAT ON CAT MAT
        assert_eq!(profile.total_words(), 5);
        assert_eq!(profile.distinct_words(), 4);
        assert!((profile.frequency("CAT").unwrap() - 0.4).abs() < 1e-12);
        assert!((profile.frequency("MAT").unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(profile.frequency("THE"), None);
    }

    #[test]
    fn test_ties_break_by_word_order() {
        let profile = FrequencyProfile::from_text("zeta beta alpha beta", 100);
        let words: Vec<&str> = profile.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["BETA", "ALPHA", "ZETA"]);
    }

    #[test]
    fn test_truncation_keeps_most_frequent() {
        let profile = FrequencyProfile::from_text("d c c b b b a1 a1 a1 a1", 2);
        let words: Vec<&str> = profile.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["A1", "B"]);
        assert_eq!(profile.distinct_words(), 4);
        assert!((profile.frequency_sum() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_no_countable_words_is_empty() {
        let profile = FrequencyProfile::from_text("the and of ... !!", 100);
        assert!(profile.is_empty());
        assert_eq!(profile.total_words(), 0);
        assert_eq!(profile.frequency_sum(), 0.0);
    }

    #[test]
    fn test_build_profile_missing_file() {
        let err = build_profile(Path::new("/nonexistent/bookpairs/none.txt"), 100).unwrap_err();
        assert!(matches!(err, SimilarityError::UnreadableFile { .. }));
    }
}
