//! # hw-processes
//!
//! One-dimensional stochastic process definitions: the
//! [`StochasticProcess1D`] trait consumed by lattice builders, and the
//! [`OrnsteinUhlenbeckProcess`] driving the Hull-White state variable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The 1-D stochastic process trait.
pub mod stochastic_process;

/// Ornstein-Uhlenbeck mean-reverting process.
pub mod ornstein_uhlenbeck_process;

pub use ornstein_uhlenbeck_process::OrnsteinUhlenbeckProcess;
pub use stochastic_process::StochasticProcess1D;
