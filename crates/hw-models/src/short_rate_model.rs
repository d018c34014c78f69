//! Short-rate model trait hierarchy.
//!
//! ```text
//! CalibratedModel
//! └── ShortRateModel
//!     └── OneFactorModel
//! ```
//!
//! plus the `ShortRateDynamics` snapshot a one-factor model hands to
//! lattice builders and simulators.

use crate::calibrated_model::CalibratedModel;
use hw_core::{errors::Result, Rate, Real, RelinkableHandle, Time};
use hw_processes::StochasticProcess1D;
use hw_termstructures::YieldTermStructure;
use std::fmt;

/// The short-rate dynamics of a one-factor model: an underlying state
/// process together with the change of variables between the state `x` and
/// the observable short rate `r`.
///
/// `variable` and `short_rate` are exact inverses for fixed `t`.  A
/// dynamics object is a snapshot of the model's parameters at the time it
/// was built; after recalibrating the model, request a fresh one.
pub trait ShortRateDynamics: fmt::Debug + Send + Sync {
    /// The process followed by the state variable.
    fn process(&self) -> &dyn StochasticProcess1D;

    /// Map the observable short rate to the state variable: `x = r − φ(t)`.
    fn variable(&self, t: Time, rate: Rate) -> Result<Real>;

    /// Map the state variable to the observable short rate: `r = x + φ(t)`.
    fn short_rate(&self, t: Time, x: Real) -> Result<Rate>;
}

/// A general short-rate model.
pub trait ShortRateModel: CalibratedModel {
    /// The discount bond price `P(t, T)` given the short rate at `t`.
    ///
    /// For affine models this has the closed form `A(t,T)·exp(−B(t,T)·r)`.
    fn discount_bond(&self, t: Time, bond_maturity: Time, rate: Rate) -> Result<Real>;

    /// The rebindable reference to the market term structure the model is
    /// fitted to.
    fn term_structure(&self) -> &RelinkableHandle<dyn YieldTermStructure>;
}

/// A one-factor short-rate model.
pub trait OneFactorModel: ShortRateModel {
    /// A freshly built dynamics snapshot reflecting the current parameters.
    fn dynamics(&self) -> Box<dyn ShortRateDynamics>;
}
