//! Core types and error handling for the NSRA metric library.

pub mod error;
pub mod types;

pub use error::{NsraError, Result};
pub use types::{Delta, PairCount};
