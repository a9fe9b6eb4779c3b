//! # NSRA — Null-Stratified Rank Accuracy
//!
//! A pure Rust implementation of the Null-Stratified Rank Accuracy metric:
//! a scalar in [0, 1] measuring how well a predicted ranking of per-item
//! signed effect sizes recovers a ground-truth three-way stratification
//! (Up / Down / Null) derived from measured effect sizes.
//!
//! NSRA is built for evaluating predictive models against a noisy or sparse
//! ground truth where only the direction of an effect is trusted, and where
//! "no measured effect" is a distinct, weakly ordered category rather than
//! something to ignore: a Null item is expected to rank below every Up item
//! and above every Down item.
//!
//! ## Features
//!
//! - **Rank-reduced scoring**: the production scorer collapses the quadratic
//!   pairwise definition into a single sorted sweep with running per-stratum
//!   counts — O(G log G) time, O(G) memory — while staying bit-identical to
//!   the exhaustive reference.
//! - **Epsilon-tolerant null stratum**: measured deltas within a closed
//!   `[-epsilon, epsilon]` band are treated as unchanged.
//! - **Partial tie credit**: comparable pairs with exactly equal predicted
//!   values receive a configurable `tie_score` instead of all-or-nothing.
//! - **Explicit undefined sentinel**: inputs with no comparable pair yield
//!   `None`, never a silent zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use nsra::{NsraConfig, NsraMetric};
//! use ndarray::Array1;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metric = NsraMetric::new(NsraConfig::default())?;
//!
//! let measured = Array1::from_vec(vec![2.0, 1.0, 0.0, -1.0, -2.0]);
//! let predicted = Array1::from_vec(vec![10.0, 5.0, 0.0, -5.0, -9.0]);
//!
//! match metric.calculate(&measured.view(), &predicted.view())? {
//!     Some(score) => println!("NSRA: {:.3}", score),
//!     None => println!("NSRA: undefined (no comparable pairs)"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom configuration
//!
//! ```rust
//! use nsra::{NsraConfigBuilder, NsraMetric, ScoringMethod};
//! use ndarray::Array1;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NsraConfigBuilder::new()
//!     .epsilon(0.1)
//!     .tie_score(0.5)
//!     .method(ScoringMethod::RankReduced)
//!     .build()?;
//! let metric = NsraMetric::new(config)?;
//!
//! let measured = Array1::from_vec(vec![0.05, -0.02, 1.0, -1.0]);
//! let predicted = Array1::from_vec(vec![0.2, -0.2, 0.5, -0.5]);
//! let score = metric.calculate(&measured.view(), &predicted.view())?;
//! assert_eq!(score, Some(1.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error types and fundamental type aliases
//! - [`metrics`]: the stratifier and both scoring strategies
//!
//! The exhaustive [`ScoringMethod::FullPairwise`] strategy is the reference
//! definition and exists so test harnesses can certify the rank-reduced
//! scorer; it is quadratic and not meant for production inputs.

#![warn(missing_docs)]

pub mod core;
pub mod metrics;

pub use crate::core::error::{NsraError, Result};
pub use crate::core::types::{Delta, PairCount};
pub use crate::metrics::{
    nsra, stratify, NsraConfig, NsraConfigBuilder, NsraMetric, ScoringMethod, Stratum,
    StratumCounts,
};
