// Unit tests for pair similarity and profile ranking.
//
// Covers the algebraic properties of the shared-frequency score and the
// ordering contract of rank_profiles, without touching the filesystem.

use bookpairs::profile::frequency::FrequencyProfile;
use bookpairs::scoring::ranking::rank_profiles;
use bookpairs::scoring::similarity::similarity;
use bookpairs::scoring::traits::{PairScorer, SharedFrequencyScorer};

fn profile(text: &str) -> FrequencyProfile {
    FrequencyProfile::from_text(text, 100)
}

// ============================================================
// similarity
// ============================================================

#[test]
fn similarity_is_commutative() {
    let samples = [
        profile("whale ship sea whale captain harpoon"),
        profile("ship captain storm ship sail"),
        profile("garden rose tulip rose"),
        profile("sea sea sea storm whale"),
        FrequencyProfile::empty(),
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }
}

#[test]
fn similarity_is_exactly_commutative_for_equal_length_profiles() {
    // Every profile draws 7 distinct words from w0..w6 with varied counts,
    // so all pairs have equal length but different rank orders.
    let profiles: Vec<FrequencyProfile> = (0..40)
        .map(|seed: usize| {
            let text: String = (0..7)
                .map(|w| {
                    let count = 1 + (seed * 7 + w * 13 + seed * w) % 9;
                    format!("w{w} ").repeat(count)
                })
                .collect();
            profile(&text)
        })
        .collect();

    for a in &profiles {
        for b in &profiles {
            assert_eq!(a.len(), b.len());
            let ab = similarity(a, b);
            let ba = similarity(b, a);
            assert_eq!(ab, ba, "similarity not commutative: {ab:e} vs {ba:e}");
        }
    }
}

#[test]
fn self_similarity_is_twice_frequency_sum() {
    let text: String = (0..300).map(|i| format!("w{} ", i % 150)).collect();
    let a = FrequencyProfile::from_text(&text, 100);
    let copy = FrequencyProfile::from_text(&text, 100);

    let expected = 2.0 * a.frequency_sum();
    let score = similarity(&a, &copy);
    assert!(
        (score - expected).abs() < 1e-9,
        "Expected {expected}, got {score}"
    );
    // Truncated to 100 of 150 equally frequent words
    assert!((a.frequency_sum() - 100.0 / 150.0).abs() < 1e-9);
}

#[test]
fn similarity_is_non_negative_and_zero_without_overlap() {
    let a = profile("alpha beta gamma");
    let b = profile("delta epsilon");
    assert_eq!(similarity(&a, &b), 0.0);
    assert!(similarity(&a, &profile("beta")) > 0.0);
}

#[test]
fn similarity_only_counts_words_kept_in_both_profiles() {
    // "rare" appears in both texts but is truncated out of the first profile
    let a = FrequencyProfile::from_text("common common common rare", 1);
    let b = FrequencyProfile::from_text("common rare", 100);
    let score = similarity(&a, &b);
    // COMMON: 0.75 + 0.5
    assert!((score - 1.25).abs() < 1e-12, "Expected 1.25, got {score}");
}

#[test]
fn default_scorer_matches_similarity() {
    let a = profile("whale ship sea");
    let b = profile("ship sea storm");
    assert_eq!(SharedFrequencyScorer.score(&a, &b), similarity(&a, &b));
}

// ============================================================
// rank_profiles
// ============================================================

#[test]
fn rank_profiles_scores_every_pair_once() {
    let profiles: Vec<FrequencyProfile> = (0..8).map(|i| profile(&format!("w{i} shared"))).collect();
    let ranked = rank_profiles(&profiles, &SharedFrequencyScorer, usize::MAX);
    assert_eq!(ranked.len(), 8 * 7 / 2);
    assert!(ranked.iter().all(|&(_, i, j)| i < j));

    let mut seen: Vec<(usize, usize)> = ranked.iter().map(|&(_, i, j)| (i, j)).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 28);
}

#[test]
fn rank_profiles_non_increasing_scores() {
    let profiles = vec![
        profile("whale ship sea"),
        profile("whale ship storm"),
        profile("garden rose"),
        profile("whale ship sea"),
        profile("rose tulip"),
    ];
    let ranked = rank_profiles(&profiles, &SharedFrequencyScorer, 10);
    assert!(ranked.windows(2).all(|w| w[0].0 >= w[1].0));
    // The identical pair wins
    assert_eq!((ranked[0].1, ranked[0].2), (0, 3));
}

#[test]
fn rank_profiles_zero_score_ties_break_by_index_pair_descending() {
    let profiles = vec![FrequencyProfile::empty(); 3];
    let ranked = rank_profiles(&profiles, &SharedFrequencyScorer, 10);
    assert_eq!(ranked, vec![(0.0, 1, 2), (0.0, 0, 2), (0.0, 0, 1)]);
}
