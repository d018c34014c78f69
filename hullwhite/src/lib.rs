//! # hullwhite
//!
//! Single-factor Hull-White (extended Vasicek) short-rate model:
//!
//! ```text
//! dr = (θ(t) − a·r) dt + σ dW
//! ```
//!
//! with exact closed-form fitting to an arbitrary market term structure,
//! analytic discount-bond and bond-option pricing, and construction of
//! term-structure-consistent trinomial lattices for path-dependent
//! pricers.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `hw-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use hullwhite::core::{OptionType, RelinkableHandle};
//! use hullwhite::models::HullWhite;
//! use hullwhite::termstructures::{FlatForward, YieldTermStructure};
//! use std::sync::Arc;
//!
//! let curve: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::new(0.05));
//! let handle = RelinkableHandle::from_arc(curve);
//! let model = HullWhite::new(handle, 0.1, 0.01).unwrap();
//! let price = model
//!     .discount_bond_option(OptionType::Call, 0.98, 1.0, 2.0)
//!     .unwrap();
//! assert!(price > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hw_core as core;

/// Mathematical utilities: distributions, interpolation.
pub use hw_math as math;

/// Term structure interface and curve implementations.
pub use hw_termstructures as termstructures;

/// Stochastic process definitions.
pub use hw_processes as processes;

/// Lattice methods: time grids, trinomial trees, fitted short-rate trees.
pub use hw_methods as methods;

/// Calibratable short-rate models.
pub use hw_models as models;
