//! # hw-math
//!
//! Mathematical utilities for hullwhite-rs: the standard normal
//! distribution backing the closed-form bond-option formula, and 1-D
//! interpolation backing the zero-rate curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Probability distributions.
pub mod distributions;

/// 1-D interpolation.
pub mod interpolations;

pub use distributions::{normal_cdf, normal_pdf};
pub use interpolations::LinearInterpolation;
