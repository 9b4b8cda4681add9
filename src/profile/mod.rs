// Word profiling: normalization and per-file frequency profiles.

pub mod frequency;
pub mod normalize;
