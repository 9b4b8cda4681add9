// Corpus ranking: profile every file, score every pair, keep the best.
//
// The corpus size is checked before any file is read. A file that cannot be
// read is logged, recorded, and given an empty profile, so it scores 0.0
// against everything and the run still completes.
//
// Pairs are ordered by score (highest first). Equal scores are ordered by the
// index pair (i, j), highest first, which makes the output fully determined
// by the input order.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use super::traits::{PairScorer, SharedFrequencyScorer};
use crate::config::{Config, EXPECTED_CORPUS_SIZE, MAX_FREQUENT_WORDS, TOP_PAIRS};
use crate::error::SimilarityError;
use crate::profile::frequency::{build_profile, FrequencyProfile};

/// Knobs for a ranking run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Exact number of files the corpus must contain
    pub expected_files: usize,
    /// Profile size per file
    pub max_words: usize,
    /// How many pairs to keep
    pub top_pairs: usize,
    /// Draw a progress bar on stderr while profiling
    pub show_progress: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            expected_files: EXPECTED_CORPUS_SIZE,
            max_words: MAX_FREQUENT_WORDS,
            top_pairs: TOP_PAIRS,
            show_progress: false,
        }
    }
}

impl From<&Config> for RankOptions {
    fn from(config: &Config) -> Self {
        Self {
            expected_files: config.expected_files,
            max_words: config.max_words,
            top_pairs: config.top_pairs,
            show_progress: true,
        }
    }
}

/// One entry of the ranking. `first < second` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPair {
    pub score: f64,
    /// Index of the first file in corpus order
    pub first: usize,
    /// Index of the second file in corpus order
    pub second: usize,
    /// Base name of the first file
    pub first_name: String,
    /// Base name of the second file
    pub second_name: String,
}

/// Result of ranking a corpus.
#[derive(Debug)]
pub struct CorpusRanking {
    /// Top pairs, best first
    pub pairs: Vec<RankedPair>,
    /// Number of files in the corpus
    pub file_count: usize,
    /// Files that could not be read and were treated as empty
    pub unreadable: Vec<SimilarityError>,
}

/// Rank every pair of `files` with the default shared-frequency scorer.
pub fn rank_pairs(
    files: &[PathBuf],
    options: &RankOptions,
) -> Result<CorpusRanking, SimilarityError> {
    rank_pairs_with(files, options, &SharedFrequencyScorer)
}

/// Rank every pair of `files` with a caller-supplied scorer.
pub fn rank_pairs_with<S: PairScorer + ?Sized>(
    files: &[PathBuf],
    options: &RankOptions,
    scorer: &S,
) -> Result<CorpusRanking, SimilarityError> {
    if files.len() != options.expected_files {
        return Err(SimilarityError::CorpusSizeMismatch {
            expected: options.expected_files,
            found: files.len(),
        });
    }

    let (profiles, unreadable) = profile_corpus(files, options);

    let pairs = rank_profiles(&profiles, scorer, options.top_pairs)
        .into_iter()
        .map(|(score, first, second)| RankedPair {
            score,
            first,
            second,
            first_name: base_name(&files[first]),
            second_name: base_name(&files[second]),
        })
        .collect::<Vec<_>>();

    info!(
        files = files.len(),
        unreadable = unreadable.len(),
        reported = pairs.len(),
        "Ranked corpus pairs"
    );

    Ok(CorpusRanking {
        pairs,
        file_count: files.len(),
        unreadable,
    })
}

/// Build one profile per file. Unreadable files get an empty profile and
/// their error is returned alongside.
fn profile_corpus(
    files: &[PathBuf],
    options: &RankOptions,
) -> (Vec<FrequencyProfile>, Vec<SimilarityError>) {
    let pb = if options.show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Profiling [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut profiles = Vec::with_capacity(files.len());
    let mut unreadable = Vec::new();

    for path in files {
        pb.set_message(base_name(path));
        match build_profile(path, options.max_words) {
            Ok(profile) => profiles.push(profile),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Treating unreadable file as empty");
                profiles.push(FrequencyProfile::empty());
                unreadable.push(err);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    (profiles, unreadable)
}

/// Score every unordered pair `i < j` and return the best `top`
/// as `(score, i, j)`, ordered by score then index pair, both descending.
pub fn rank_profiles<S: PairScorer + ?Sized>(
    profiles: &[FrequencyProfile],
    scorer: &S,
    top: usize,
) -> Vec<(f64, usize, usize)> {
    let n = profiles.len();
    let mut scored: Vec<(f64, usize, usize)> = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            scored.push((scorer.score(&profiles[i], &profiles[j]), i, j));
        }
    }

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| (b.1, b.2).cmp(&(a.1, a.2)))
    });
    scored.truncate(top);
    scored
}

/// File name without its directory, for display.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
