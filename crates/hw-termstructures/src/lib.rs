//! # hw-termstructures
//!
//! Yield term structures: the [`YieldTermStructure`] interface consumed by
//! the short-rate model, plus two concrete curves — [`FlatForward`]
//! (constant rate, infinite domain) and [`ZeroCurve`] (interpolated zero
//! rates, finite domain).
//!
//! All curves are indexed by time in years from the curve's reference
//! point; date arithmetic and day-count conventions are the embedding
//! application's concern.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The yield term structure interface.
pub mod yield_term_structure;

/// Constant-forward-rate curve.
pub mod flat_forward;

/// Interpolated zero-rate curve.
pub mod zero_curve;

pub use flat_forward::FlatForward;
pub use yield_term_structure::YieldTermStructure;
pub use zero_curve::ZeroCurve;
