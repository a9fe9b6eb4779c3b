//! Null-Stratified Rank Accuracy (NSRA) metric.
//!
//! NSRA measures how well a predicted ranking of per-item signed effect
//! sizes recovers the ground-truth three-way stratification produced by
//! [`crate::metrics::stratify`]. The score is the fraction of comparable
//! item pairs the predicted ranking orders correctly, with partial credit
//! for predicted ties, and is undefined (`None`) when no comparable pair
//! exists.
//!
//! Two scoring strategies are provided behind [`ScoringMethod`]:
//!
//! - [`ScoringMethod::RankReduced`] (default): a single sorted sweep with
//!   running per-stratum counts, O(G log G) time and O(G) memory.
//! - [`ScoringMethod::FullPairwise`]: the reference definition that scores
//!   every admissible pair explicitly, O(G^2). It exists to certify the
//!   rank-reduced path and is prohibitively slow for large inputs.
//!
//! Both strategies combine an exact count of correctly ordered pairs and an
//! exact count of tied pairs into `(correct + tie_score * ties) / total`,
//! so their outputs are bit-identical for the same inputs.

use crate::core::{
    error::{NsraError, Result},
    types::{Delta, PairCount},
};
use crate::metrics::stratify::{stratify, Stratum, StratumCounts};
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scoring strategy for the NSRA metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMethod {
    /// Sorted single-pass scorer, O(G log G). Production path.
    RankReduced,
    /// Exhaustive pairwise reference, O(G^2). Verification only.
    FullPairwise,
}

impl Default for ScoringMethod {
    fn default() -> Self {
        ScoringMethod::RankReduced
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMethod::RankReduced => write!(f, "rank-reduced"),
            ScoringMethod::FullPairwise => write!(f, "full-pairwise"),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = NsraError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rank-reduced" => Ok(ScoringMethod::RankReduced),
            "full-pairwise" => Ok(ScoringMethod::FullPairwise),
            other => Err(NsraError::config(format!(
                "unknown scoring method '{}', expected 'rank-reduced' or 'full-pairwise'",
                other
            ))),
        }
    }
}

/// Configuration for NSRA calculation.
///
/// Defaults match the reference definition: zero epsilon (only exact zeros
/// are Null), half credit for ties, rank-reduced scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NsraConfig {
    /// Soft sign tolerance: measured deltas in [-epsilon, epsilon] are Null
    pub epsilon: Delta,
    /// Partial credit for comparable pairs tied in the predicted ranking
    pub tie_score: f64,
    /// Scoring strategy
    pub method: ScoringMethod,
}

impl Default for NsraConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            tie_score: 0.5,
            method: ScoringMethod::RankReduced,
        }
    }
}

impl NsraConfig {
    /// Validate the configuration.
    ///
    /// Negative or non-finite epsilon and non-finite tie_score are rejected.
    /// A finite tie_score outside [0, 1] is accepted with a warning since
    /// the resulting score may leave [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(NsraError::invalid_parameter(
                "epsilon",
                self.epsilon.to_string(),
                "must be finite and non-negative",
            ));
        }
        if !self.tie_score.is_finite() {
            return Err(NsraError::invalid_parameter(
                "tie_score",
                self.tie_score.to_string(),
                "must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.tie_score) {
            log::warn!(
                "tie_score = {} is outside the intended range [0, 1]; the score may leave [0, 1]",
                self.tie_score
            );
        }
        Ok(())
    }
}

/// Builder for NSRA configuration.
#[derive(Debug, Default)]
pub struct NsraConfigBuilder {
    config: NsraConfig,
}

impl NsraConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the epsilon tolerance for the null stratum.
    pub fn epsilon(mut self, epsilon: Delta) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Set the partial credit for predicted ties.
    pub fn tie_score(mut self, tie_score: f64) -> Self {
        self.config.tie_score = tie_score;
        self
    }

    /// Set the scoring method.
    pub fn method(mut self, method: ScoringMethod) -> Self {
        self.config.method = method;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<NsraConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// NSRA metric calculator.
///
/// Holds a validated configuration and computes scores from paired
/// (measured, predicted) delta sequences. Each call is a pure function of
/// its inputs; nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct NsraMetric {
    config: NsraConfig,
}

impl NsraMetric {
    /// Create a new calculator from a configuration.
    pub fn new(config: NsraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &NsraConfig {
        &self.config
    }

    /// Compute the NSRA score for paired measured and predicted deltas.
    ///
    /// Returns `Ok(None)` when no comparable pair exists (for example an
    /// all-Null ground truth, or fewer than two items); callers must check
    /// for the sentinel before aggregating scores. Returns an error when
    /// the input lengths differ.
    pub fn calculate(
        &self,
        measured: &ArrayView1<Delta>,
        predicted: &ArrayView1<Delta>,
    ) -> Result<Option<f64>> {
        if measured.len() != predicted.len() {
            return Err(NsraError::dimension_mismatch(
                format!("measured: {}", measured.len()),
                format!("predicted: {}", predicted.len()),
            ));
        }

        let (labels, counts) = stratify(measured, self.config.epsilon);
        log::debug!(
            "nsra: G={} strata=(up={}, null={}, down={}) comparable_pairs={} method={}",
            counts.total(),
            counts.up,
            counts.null,
            counts.down,
            counts.comparable_pairs(),
            self.config.method
        );

        let score = match self.config.method {
            ScoringMethod::RankReduced => {
                rank_reduced(&labels, counts, predicted, self.config.tie_score)
            }
            ScoringMethod::FullPairwise => {
                full_pairwise(&labels, predicted, self.config.tie_score)
            }
        };
        Ok(score)
    }
}

/// One-shot NSRA computation with an explicit configuration.
pub fn nsra(
    measured: &ArrayView1<Delta>,
    predicted: &ArrayView1<Delta>,
    config: &NsraConfig,
) -> Result<Option<f64>> {
    NsraMetric::new(*config)?.calculate(measured, predicted)
}

/// Rank-reduced scorer: sort once by predicted value, then sweep tie blocks
/// left to right with running Down/Null counts.
///
/// Every comparable pair is counted exactly once: cross-block pairs when the
/// higher-predicted item's block is processed, same-block ties once per
/// block via combinatorial products.
fn rank_reduced(
    labels: &[Stratum],
    counts: StratumCounts,
    predicted: &ArrayView1<Delta>,
    tie_score: f64,
) -> Option<f64> {
    let total = counts.comparable_pairs();
    if total == 0 {
        return None;
    }

    let g = labels.len();
    let mut order: Vec<usize> = (0..g).collect();
    order.sort_by(|&a, &b| predicted[a].total_cmp(&predicted[b]));

    // Down/Null items in strictly earlier blocks. Up items need no counter:
    // under the convention Up > Null > Down an earlier Up never forms a
    // correctly ordered pair with a later item.
    let mut seen_down: PairCount = 0;
    let mut seen_null: PairCount = 0;
    let mut correct: PairCount = 0;
    let mut ties: PairCount = 0;

    let mut i = 0;
    while i < g {
        // Tie blocks are grouped by exact equality, the same tie definition
        // the pairwise reference uses. NaN never compares equal, so each
        // NaN forms its own block.
        let block_value = predicted[order[i]];
        let (mut u, mut n, mut d) = (0u64, 0u64, 0u64);
        let mut j = i;
        while j < g && predicted[order[j]] == block_value {
            match labels[order[j]] {
                Stratum::Up => u += 1,
                Stratum::Null => n += 1,
                Stratum::Down => d += 1,
            }
            j += 1;
        }

        // Up items here outrank every earlier Down or Null item; Null items
        // here outrank earlier Down items.
        correct += u * (seen_down + seen_null);
        correct += n * seen_down;

        // Cross-stratum pairs within the block are tied in the predicted
        // ranking regardless of stratum.
        ties += u * d + u * n + n * d;

        seen_down += d;
        seen_null += n;
        i = j;
    }

    Some((correct as f64 + tie_score * ties as f64) / total as f64)
}

/// Full-pairwise oracle: the quadratic reference definition.
///
/// Scores every unordered pair whose strata differ and are not both Null:
/// full credit when the predicted ordering agrees with the stratum ordering,
/// `tie_score` when the predicted values are exactly equal, zero otherwise.
fn full_pairwise(
    labels: &[Stratum],
    predicted: &ArrayView1<Delta>,
    tie_score: f64,
) -> Option<f64> {
    let g = labels.len();
    let mut valid: PairCount = 0;
    let mut correct: PairCount = 0;
    let mut ties: PairCount = 0;

    for i in 0..g {
        for j in (i + 1)..g {
            // Both-Null pairs yield a zero difference and drop out here.
            let sign_gt = labels[i].value() - labels[j].value();
            if sign_gt == 0 {
                continue;
            }
            valid += 1;

            let (pi, pj) = (predicted[i], predicted[j]);
            let sign_pred: i8 = if pi > pj {
                1
            } else if pi < pj {
                -1
            } else {
                0
            };

            if sign_pred == 0 {
                ties += 1;
            } else if (sign_pred > 0) == (sign_gt > 0) {
                correct += 1;
            }
        }
    }

    if valid == 0 {
        return None;
    }
    Some((correct as f64 + tie_score * ties as f64) / valid as f64)
}
