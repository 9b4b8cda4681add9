// Pair scoring: shared-word similarity and corpus-wide ranking.

pub mod ranking;
pub mod similarity;
pub mod traits;
