// Pair scorer trait.
//
// The ranker only needs a number for two profiles, higher meaning more
// similar. Any symmetric, non-negative formula can stand in for the default.

use crate::profile::frequency::FrequencyProfile;

/// Trait for scoring how similar two frequency profiles are.
pub trait PairScorer {
    /// Score a pair of profiles. Must be symmetric and non-negative.
    fn score(&self, a: &FrequencyProfile, b: &FrequencyProfile) -> f64;
}

/// The default scorer: shared-word frequency mass (see [`super::similarity`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedFrequencyScorer;

impl PairScorer for SharedFrequencyScorer {
    fn score(&self, a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
        super::similarity::similarity(a, b)
    }
}
