//! Evaluation metrics for predicted signed effect sizes.
//!
//! The crate currently ships a single metric, Null-Stratified Rank Accuracy
//! (NSRA): the fraction of comparable item pairs whose predicted ordering
//! agrees with a ground-truth Up / Null / Down stratification, with partial
//! credit for predicted ties.
//!
//! # Examples
//!
//! ```rust
//! use nsra::metrics::{NsraConfig, NsraMetric};
//! use ndarray::Array1;
//!
//! # fn example() -> nsra::Result<()> {
//! let metric = NsraMetric::new(NsraConfig::default())?;
//!
//! let measured = Array1::from_vec(vec![2.0, 1.0, 0.0, -1.0, -2.0]);
//! let predicted = Array1::from_vec(vec![10.0, 5.0, 0.0, -5.0, -9.0]);
//!
//! let score = metric.calculate(&measured.view(), &predicted.view())?;
//! assert_eq!(score, Some(1.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod nsra;
pub mod stratify;

// Re-export main types for convenience
pub use nsra::{nsra, NsraConfig, NsraConfigBuilder, NsraMetric, ScoringMethod};
pub use stratify::{stratify, Stratum, StratumCounts};
