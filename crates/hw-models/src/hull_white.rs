//! Hull-White (extended Vasicek) model.
//!
//! ```text
//! dr = (θ(t) − a·r) dt + σ dW
//! ```
//!
//! The short rate decomposes as `r(t) = x(t) + φ(t)` where `x` follows a
//! zero-level Ornstein-Uhlenbeck process and the fitting parameter
//!
//! ```text
//! φ(t) = f(t) + ½·[σ·(1 − e^{−a·t})/a]²
//! ```
//!
//! is chosen so the model reproduces the market term structure exactly.
//!
//! Discount bond price: `P(t,T) = A(t,T)·exp(−B(t,T)·r(t))`, and European
//! options on discount bonds price in closed form because the log bond
//! price is Gaussian.

use crate::calibrated_model::{
    CalibratedModel, Constraint, ConstantImpl, Parameter, ParameterImpl,
};
use crate::short_rate_model::{OneFactorModel, ShortRateDynamics, ShortRateModel};
use hw_core::{
    ensure, errors::Result, Error, OptionType, Rate, Real, RelinkableHandle, Time, Volatility,
};
use hw_math::normal_cdf;
use hw_methods::{ShortRateTree, TimeGrid, TrinomialTree};
use hw_processes::{OrnsteinUhlenbeckProcess, StochasticProcess1D};
use hw_termstructures::YieldTermStructure;
use std::sync::Arc;

/// Volatility threshold below which the bond-option formula collapses to
/// its intrinsic value.
const MIN_STD_DEV: Real = 1e-12;

/// `(1 − e^{−a·τ})/a`, computed through `exp_m1` so precision survives
/// `a·τ → 0`, with the `a → 0` limit `τ`.
fn b_coefficient(a: Real, tau: Time) -> Real {
    if a.abs() < 1e-12 {
        tau
    } else {
        -(-a * tau).exp_m1() / a
    }
}

/// Hull-White one-factor short-rate model.
///
/// Owns the two free scalars (mean-reversion speed `a`, volatility `σ`)
/// and the derived fitting parameter φ; holds a rebindable reference to
/// the market term structure, not the curve itself.  φ reads the forward
/// curve live through that reference, so relinking the handle is reflected
/// immediately; changing `a` or `σ` goes through
/// [`set_params`](CalibratedModel::set_params), which regenerates φ before
/// returning.
#[derive(Debug)]
pub struct HullWhite {
    term_structure: RelinkableHandle<dyn YieldTermStructure>,
    /// Free parameters: `[a, σ]`.
    params: Vec<Parameter>,
    /// Derived fitting parameter φ(t).
    phi: Parameter,
}

impl HullWhite {
    /// Create a Hull-White model on a linked term-structure handle.
    ///
    /// # Errors
    /// Fails if `a ≤ 0`, `σ ≤ 0`, or the handle is unlinked.
    pub fn new(
        term_structure: RelinkableHandle<dyn YieldTermStructure>,
        a: Real,
        sigma: Volatility,
    ) -> Result<Self> {
        ensure!(a > 0.0, "mean-reversion speed must be positive, got {a}");
        ensure!(sigma > 0.0, "volatility must be positive, got {sigma}");
        if term_structure.is_empty() {
            return Err(Error::NoTermStructure);
        }
        let params = vec![
            Parameter::new(vec![a], Constraint::Positive, Arc::new(ConstantImpl))?,
            Parameter::new(vec![sigma], Constraint::Positive, Arc::new(ConstantImpl))?,
        ];
        let phi = FittingParameter::new(term_structure.clone(), a, sigma);
        Ok(Self {
            term_structure,
            params,
            phi,
        })
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> Real {
        self.params[0].values()[0]
    }

    /// Volatility of the state process.
    pub fn sigma(&self) -> Volatility {
        self.params[1].values()[0]
    }

    /// The fitting parameter φ as a [`Parameter`].
    pub fn phi(&self) -> &Parameter {
        &self.phi
    }

    /// `B(t,T) = (1 − e^{−a(T−t)})/a`.
    pub fn b(&self, t: Time, bond_maturity: Time) -> Real {
        b_coefficient(self.a(), bond_maturity - t)
    }

    /// `A(t,T)`: the curve-dependent coefficient of the affine bond
    /// formula, combining the market discount factors at `t` and `T` with
    /// the instantaneous forward rate at `t`.
    ///
    /// # Errors
    /// Rejects `t < 0` or `T < t`; curve domain errors propagate unchanged.
    pub fn a_factor(&self, t: Time, bond_maturity: Time) -> Result<Real> {
        ensure!(t >= 0.0, "negative time {t}");
        ensure!(
            bond_maturity >= t,
            "bond maturity ({bond_maturity}) must not precede t ({t})"
        );
        let curve = self.curve()?;
        let discount_t = curve.discount(t)?;
        let discount_s = curve.discount(bond_maturity)?;
        let forward = curve.forward_rate(t)?;

        let b = self.b(t, bond_maturity);
        let sigma_b = self.sigma() * b;
        // ln A = ln(P(0,T)/P(0,t)) + B·f(t) − ½·(σB)²·(1−e^{−2at})/(2a)
        let value = b * forward - 0.5 * sigma_b * sigma_b * b_coefficient(2.0 * self.a(), t);
        Ok(value.exp() * discount_s / discount_t)
    }

    /// Closed-form price of a European option on a discount bond.
    ///
    /// The bond matures at `bond_maturity`, the option at `maturity`.
    /// Under Hull-White the log bond price is Gaussian with standard
    /// deviation `σ_P = σ·B(T,S)·√[(1−e^{−2aT})/(2a)]`, so the price is the
    /// Black formula on the forward bond `P(0,S)` with strike
    /// `K·P(0,T)`.
    ///
    /// # Errors
    /// Rejects non-positive strikes, negative option maturities, and
    /// `bond_maturity ≤ maturity` before any computation; curve errors
    /// propagate.
    pub fn discount_bond_option(
        &self,
        option_type: OptionType,
        strike: Real,
        maturity: Time,
        bond_maturity: Time,
    ) -> Result<Real> {
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(
            maturity >= 0.0,
            "option maturity must be non-negative, got {maturity}"
        );
        ensure!(
            bond_maturity > maturity,
            "bond maturity ({bond_maturity}) must exceed option maturity ({maturity})"
        );
        let curve = self.curve()?;
        let discount_t = curve.discount(maturity)?;
        let discount_s = curve.discount(bond_maturity)?;

        let sigma_p = self.sigma()
            * self.b(maturity, bond_maturity)
            * b_coefficient(2.0 * self.a(), maturity).sqrt();

        let w = option_type.sign();
        let forward = discount_s;
        let strike_pv = strike * discount_t;
        if sigma_p < MIN_STD_DEV {
            // Deterministic bond price at expiry
            return Ok((w * (forward - strike_pv)).max(0.0));
        }
        let d1 = (forward / strike_pv).ln() / sigma_p + 0.5 * sigma_p;
        let d2 = d1 - sigma_p;
        Ok(w * (forward * normal_cdf(w * d1) - strike_pv * normal_cdf(w * d2)))
    }

    /// Build a trinomial lattice of the short rate over `grid`, fitted per
    /// time slice so the lattice reproduces the market discount factor at
    /// every grid point.
    ///
    /// # Errors
    /// Propagates curve domain errors for grid times past the curve's
    /// domain.
    pub fn tree(&self, grid: &TimeGrid) -> Result<ShortRateTree> {
        let curve = self.curve()?;
        let mut targets = Vec::with_capacity(grid.steps());
        for i in 0..grid.steps() {
            targets.push(curve.discount(grid.time(i + 1))?);
        }
        let process = OrnsteinUhlenbeckProcess::new_zero_level(self.a(), self.sigma());
        let trinomial = TrinomialTree::new(&process, grid);
        ShortRateTree::fitted(trinomial, &targets)
    }

    fn curve(&self) -> Result<Arc<dyn YieldTermStructure>> {
        self.term_structure.current().ok_or(Error::NoTermStructure)
    }
}

impl CalibratedModel for HullWhite {
    fn params(&self) -> &[Parameter] {
        &self.params
    }

    fn set_params(&mut self, values: &[Real]) -> Result<()> {
        ensure!(
            values.len() == 2,
            "expected [a, sigma], got {} values",
            values.len()
        );
        self.params[0].set_values(vec![values[0]])?;
        self.params[1].set_values(vec![values[1]])?;
        self.generate_parameters();
        Ok(())
    }

    fn generate_parameters(&mut self) {
        self.phi = FittingParameter::new(self.term_structure.clone(), self.a(), self.sigma());
    }
}

impl ShortRateModel for HullWhite {
    fn discount_bond(&self, t: Time, bond_maturity: Time, rate: Rate) -> Result<Real> {
        Ok(self.a_factor(t, bond_maturity)? * (-self.b(t, bond_maturity) * rate).exp())
    }

    fn term_structure(&self) -> &RelinkableHandle<dyn YieldTermStructure> {
        &self.term_structure
    }
}

impl OneFactorModel for HullWhite {
    fn dynamics(&self) -> Box<dyn ShortRateDynamics> {
        Box::new(Dynamics::new(self.phi.clone(), self.a(), self.sigma()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dynamics
// ────────────────────────────────────────────────────────────────────────────

/// Short-rate dynamics in the Hull-White model.
///
/// The short rate is `r(t) = φ(t) + x(t)` where `x` follows a zero-level
/// Ornstein-Uhlenbeck process.  The snapshot captures `(φ, a, σ)` at build
/// time; it does not track later recalibrations of the model it came from.
#[derive(Debug)]
pub struct Dynamics {
    fitting: Parameter,
    process: OrnsteinUhlenbeckProcess,
}

impl Dynamics {
    /// Build a dynamics snapshot from a fitting parameter and the two model
    /// constants.
    pub fn new(fitting: Parameter, a: Real, sigma: Volatility) -> Self {
        Self {
            fitting,
            process: OrnsteinUhlenbeckProcess::new_zero_level(a, sigma),
        }
    }
}

impl ShortRateDynamics for Dynamics {
    fn process(&self) -> &dyn StochasticProcess1D {
        &self.process
    }

    fn variable(&self, t: Time, rate: Rate) -> Result<Real> {
        Ok(rate - self.fitting.value(t)?)
    }

    fn short_rate(&self, t: Time, x: Real) -> Result<Rate> {
        Ok(x + self.fitting.value(t)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FittingParameter
// ────────────────────────────────────────────────────────────────────────────

/// Analytical term-structure fitting parameter φ(t).
///
/// ```text
/// φ(t) = f(t) + ½·[σ·(1 − e^{−a·t})/a]²
/// ```
///
/// where `f(t)` is the instantaneous forward rate at `t`, read live
/// through the rebindable curve handle.
pub struct FittingParameter;

impl FittingParameter {
    /// Build φ as a [`Parameter`] capturing the curve handle and the two
    /// model constants.
    pub fn new(
        term_structure: RelinkableHandle<dyn YieldTermStructure>,
        a: Real,
        sigma: Volatility,
    ) -> Parameter {
        Parameter::unconstrained(Arc::new(FittingImpl {
            term_structure,
            a,
            sigma,
        }))
    }
}

#[derive(Debug)]
struct FittingImpl {
    term_structure: RelinkableHandle<dyn YieldTermStructure>,
    a: Real,
    sigma: Volatility,
}

impl ParameterImpl for FittingImpl {
    fn value(&self, _params: &[Real], t: Time) -> Result<Real> {
        let curve = self
            .term_structure
            .current()
            .ok_or(Error::NoTermStructure)?;
        let forward = curve.forward_rate(t)?;
        let temp = self.sigma * b_coefficient(self.a, t);
        Ok(forward + 0.5 * temp * temp)
    }
}
