//! Ground-truth stratification of measured effect sizes.
//!
//! Measured signed deltas are collapsed into a three-way stratification
//! (Up / Null / Down) using an epsilon-tolerant null band: only direction,
//! not magnitude, is trusted in the ground truth. The resulting labels and
//! per-stratum counts feed both scoring strategies in [`crate::metrics::nsra`].

use crate::core::types::{Delta, PairCount};
use ndarray::ArrayView1;
use std::fmt;

/// Ground-truth stratum of a single item, derived from its measured delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Stratum {
    /// Measured delta above +epsilon
    Up,
    /// Measured delta within the closed band [-epsilon, epsilon]
    Null,
    /// Measured delta below -epsilon
    Down,
}

impl Stratum {
    /// Classify a measured delta against an epsilon threshold.
    ///
    /// The null band is closed: with epsilon = 0 only an exact zero is Null.
    /// NaN compares false against both thresholds and lands in Null.
    #[inline]
    pub fn from_delta(measured: Delta, epsilon: Delta) -> Self {
        if measured > epsilon {
            Stratum::Up
        } else if measured < -epsilon {
            Stratum::Down
        } else {
            Stratum::Null
        }
    }

    /// Ordering value of the stratum under the convention Up > Null > Down.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Stratum::Up => 1,
            Stratum::Null => 0,
            Stratum::Down => -1,
        }
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stratum::Up => write!(f, "up"),
            Stratum::Null => write!(f, "null"),
            Stratum::Down => write!(f, "down"),
        }
    }
}

/// Per-stratum item counts for one stratification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StratumCounts {
    /// Number of Up-labeled items
    pub up: usize,
    /// Number of Null-labeled items
    pub null: usize,
    /// Number of Down-labeled items
    pub down: usize,
}

impl StratumCounts {
    /// Total number of items across all strata.
    pub fn total(&self) -> usize {
        self.up + self.null + self.down
    }

    /// Number of comparable (valid) unordered pairs: pairs whose strata
    /// differ and are not both Null, i.e. Up x (Null + Down) plus
    /// Null x Down. This is the denominator of the score.
    pub fn comparable_pairs(&self) -> PairCount {
        let (u, n, d) = (self.up as u64, self.null as u64, self.down as u64);
        u * (n + d) + n * d
    }
}

/// Stratify measured deltas into labels and per-stratum counts.
///
/// Deterministic, side-effect free, single pass; recomputed fully on every
/// scoring call with no caching.
pub fn stratify(measured: &ArrayView1<Delta>, epsilon: Delta) -> (Vec<Stratum>, StratumCounts) {
    let mut counts = StratumCounts::default();
    let labels = measured
        .iter()
        .map(|&m| {
            let s = Stratum::from_delta(m, epsilon);
            match s {
                Stratum::Up => counts.up += 1,
                Stratum::Null => counts.null += 1,
                Stratum::Down => counts.down += 1,
            }
            s
        })
        .collect();
    (labels, counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_stratum_from_delta_zero_epsilon() {
        assert_eq!(Stratum::from_delta(0.5, 0.0), Stratum::Up);
        assert_eq!(Stratum::from_delta(-0.5, 0.0), Stratum::Down);
        assert_eq!(Stratum::from_delta(0.0, 0.0), Stratum::Null);
    }

    #[test]
    fn test_stratum_band_is_closed() {
        // Values exactly at +/-epsilon belong to the null band.
        assert_eq!(Stratum::from_delta(0.1, 0.1), Stratum::Null);
        assert_eq!(Stratum::from_delta(-0.1, 0.1), Stratum::Null);
        assert_eq!(Stratum::from_delta(0.1 + 1e-12, 0.1), Stratum::Up);
    }

    #[test]
    fn test_nan_measured_is_null() {
        assert_eq!(Stratum::from_delta(f64::NAN, 0.0), Stratum::Null);
    }

    #[test]
    fn test_stratum_value_ordering() {
        assert!(Stratum::Up.value() > Stratum::Null.value());
        assert!(Stratum::Null.value() > Stratum::Down.value());
    }

    #[test]
    fn test_stratify_counts_sum_to_total() {
        let measured = Array1::from_vec(vec![2.0, 1.0, 0.0, -1.0, -2.0, 0.05, -0.05]);
        let (labels, counts) = stratify(&measured.view(), 0.1);
        assert_eq!(labels.len(), 7);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.up, 2);
        assert_eq!(counts.null, 3);
        assert_eq!(counts.down, 2);
    }

    #[test]
    fn test_comparable_pairs() {
        let counts = StratumCounts {
            up: 2,
            null: 3,
            down: 2,
        };
        // 2*(3+2) + 3*2 = 16
        assert_eq!(counts.comparable_pairs(), 16);

        let all_null = StratumCounts {
            up: 0,
            null: 10,
            down: 0,
        };
        assert_eq!(all_null.comparable_pairs(), 0);
    }

    #[test]
    fn test_comparable_pairs_no_overflow() {
        // Counts near the 32-bit boundary must not overflow the product.
        let counts = StratumCounts {
            up: 100_000,
            null: 100_000,
            down: 100_000,
        };
        assert_eq!(counts.comparable_pairs(), 30_000_000_000);
    }

    #[test]
    fn test_stratum_display() {
        assert_eq!(Stratum::Up.to_string(), "up");
        assert_eq!(Stratum::Null.to_string(), "null");
        assert_eq!(Stratum::Down.to_string(), "down");
    }
}
