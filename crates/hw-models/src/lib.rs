//! # hw-models
//!
//! Calibratable short-rate models.
//!
//! ## Trait hierarchy
//!
//! ```text
//! CalibratedModel
//! └── ShortRateModel
//!     └── OneFactorModel  → HullWhite
//! ```
//!
//! The model holds a rebindable reference to the market term structure and
//! two free scalars (mean-reversion speed `a`, volatility `σ`); everything
//! else — the fitting parameter φ(t), the state↔rate dynamics, the analytic
//! bond and bond-option formulas, the fitted lattice — is derived.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Infrastructure ───────────────────────────────────────────────────────
pub mod calibrated_model;
pub mod short_rate_model;

// ── One-factor short-rate models ─────────────────────────────────────────
pub mod hull_white;

// ── Re-exports ───────────────────────────────────────────────────────────
pub use calibrated_model::{CalibratedModel, ConstantImpl, Constraint, Parameter, ParameterImpl};
pub use hull_white::HullWhite;
pub use short_rate_model::{OneFactorModel, ShortRateDynamics, ShortRateModel};
