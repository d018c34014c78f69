//! # hw-methods
//!
//! Lattice methods for short-rate models: the [`TimeGrid`] used to
//! discretize time, the recombining additive [`TrinomialTree`] over a
//! one-dimensional diffusion, and the [`ShortRateTree`] that carries a
//! per-slice adjustment fitting the lattice to an input discount curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Lattice methods: time grids, trinomial trees, fitted short-rate trees.
pub mod lattice;

pub use lattice::{ShortRateTree, TimeGrid, TrinomialTree};
