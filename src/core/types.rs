//! Core data types for the NSRA metric library.

/// Signed effect size type for measured and predicted deltas.
pub type Delta = f64;

/// Pair counting type. Comparable-pair counts grow quadratically in the
/// number of items, so counting is done in 64 bits regardless of platform.
pub type PairCount = u64;
