//! Calibrated-model infrastructure: `Parameter`, `Constraint`, and the
//! `CalibratedModel` trait.
//!
//! A `Parameter` pairs a vector of free values with a pluggable
//! [`ParameterImpl`] strategy mapping `(values, t)` to the parameter's value
//! at time `t`.  Constant parameters ignore `t`; time-dependent parameters
//! (such as the Hull-White fitting parameter φ) ignore the values and
//! compute from captured state instead.  The strategy seam lets alternative
//! fitting schemes be swapped in without touching the pricing code.

use hw_core::{ensure, errors::Result, Error, Real, Time};
use std::fmt;
use std::sync::Arc;

// ────────────────────────────────────────────────────────────────────────────
// Constraint
// ────────────────────────────────────────────────────────────────────────────

/// A constraint on parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// No constraint — all values are valid.
    None,
    /// All values must be strictly positive.
    Positive,
    /// All values must lie in `[lower, upper]`.
    Boundary {
        /// Lower bound (inclusive).
        lower: Real,
        /// Upper bound (inclusive).
        upper: Real,
    },
}

impl Constraint {
    /// Whether `values` satisfies this constraint.
    pub fn test(&self, values: &[Real]) -> bool {
        match self {
            Constraint::None => true,
            Constraint::Positive => values.iter().all(|&v| v > 0.0),
            Constraint::Boundary { lower, upper } => {
                values.iter().all(|&v| v >= *lower && v <= *upper)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter
// ────────────────────────────────────────────────────────────────────────────

/// Strategy mapping a parameter's free values to its value at time `t`.
pub trait ParameterImpl: fmt::Debug + Send + Sync {
    /// The parameter value at time `t` given the free values `params`.
    fn value(&self, params: &[Real], t: Time) -> Result<Real>;
}

/// A constant parameter: its value is `params[0]` at every time.
#[derive(Debug, Clone, Copy)]
pub struct ConstantImpl;

impl ParameterImpl for ConstantImpl {
    fn value(&self, params: &[Real], _t: Time) -> Result<Real> {
        params
            .first()
            .copied()
            .ok_or_else(|| Error::Runtime("constant parameter has no value".into()))
    }
}

/// A model parameter: free values, a constraint on them, and a strategy
/// producing the (possibly time-dependent) parameter value.
#[derive(Debug, Clone)]
pub struct Parameter {
    values: Vec<Real>,
    constraint: Constraint,
    implementation: Arc<dyn ParameterImpl>,
}

impl Parameter {
    /// Create a parameter from values, constraint, and strategy.
    ///
    /// # Errors
    /// Returns a precondition error if the initial values violate the
    /// constraint.
    pub fn new(
        values: Vec<Real>,
        constraint: Constraint,
        implementation: Arc<dyn ParameterImpl>,
    ) -> Result<Self> {
        ensure!(
            constraint.test(&values),
            "initial parameter values {values:?} violate the constraint {constraint:?}"
        );
        Ok(Self {
            values,
            constraint,
            implementation,
        })
    }

    /// Create an unconstrained parameter driven entirely by its strategy.
    pub fn unconstrained(implementation: Arc<dyn ParameterImpl>) -> Self {
        Self {
            values: Vec::new(),
            constraint: Constraint::None,
            implementation,
        }
    }

    /// Create a constant (non-calibratable) parameter.
    pub fn constant(value: Real) -> Self {
        Self {
            values: vec![value],
            constraint: Constraint::None,
            implementation: Arc::new(ConstantImpl),
        }
    }

    /// The parameter value at time `t`.
    pub fn value(&self, t: Time) -> Result<Real> {
        self.implementation.value(&self.values, t)
    }

    /// The free values.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Replace the free values, checking the constraint first.
    pub fn set_values(&mut self, values: Vec<Real>) -> Result<()> {
        ensure!(
            self.constraint.test(&values),
            "parameter values {values:?} violate the constraint {:?}",
            self.constraint
        );
        self.values = values;
        Ok(())
    }

    /// Whether the current values satisfy the constraint.
    pub fn is_valid(&self) -> bool {
        self.constraint.test(&self.values)
    }

    /// The constraint on the free values.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CalibratedModel trait
// ────────────────────────────────────────────────────────────────────────────

/// A model whose free parameters can be driven by an optimizer.
///
/// `set_params` is the single mutation path: it validates the new values
/// against each parameter's constraint and then regenerates every derived
/// quantity, so a model observed between calls is never stale.
pub trait CalibratedModel: fmt::Debug + Send + Sync {
    /// The model's free parameters.
    fn params(&self) -> &[Parameter];

    /// Set the free parameters from a flat vector of values
    /// (used by optimizers during calibration).
    ///
    /// Implementations must call
    /// [`generate_parameters`](CalibratedModel::generate_parameters) after a
    /// successful update.
    fn set_params(&mut self, values: &[Real]) -> Result<()>;

    /// Rebuild derived parameters after a free-parameter update.
    fn generate_parameters(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parameter_constant() {
        let p = Parameter::constant(0.05);
        assert_abs_diff_eq!(p.value(0.0).unwrap(), 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(p.value(7.3).unwrap(), 0.05, epsilon = 1e-15);
        assert!(p.is_valid());
    }

    #[test]
    fn positive_constraint() {
        let p = Parameter::new(vec![0.01], Constraint::Positive, Arc::new(ConstantImpl));
        assert!(p.is_ok());
        let p2 = Parameter::new(vec![-0.01], Constraint::Positive, Arc::new(ConstantImpl));
        assert!(p2.is_err());
    }

    #[test]
    fn boundary_constraint() {
        let c = Constraint::Boundary {
            lower: 0.0,
            upper: 1.0,
        };
        assert!(c.test(&[0.5]));
        assert!(!c.test(&[1.5]));
    }

    #[test]
    fn set_values_rejects_constraint_violation() {
        let mut p = Parameter::new(vec![0.1], Constraint::Positive, Arc::new(ConstantImpl))
            .unwrap();
        assert!(p.set_values(vec![-0.1]).is_err());
        // Old values survive a rejected update
        assert_abs_diff_eq!(p.value(0.0).unwrap(), 0.1, epsilon = 1e-15);
        assert!(p.set_values(vec![0.2]).is_ok());
        assert_abs_diff_eq!(p.value(0.0).unwrap(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn time_dependent_strategy() {
        #[derive(Debug)]
        struct LinearImpl;
        impl ParameterImpl for LinearImpl {
            fn value(&self, params: &[Real], t: Time) -> Result<Real> {
                Ok(params[0] + params[1] * t)
            }
        }
        let p = Parameter::new(vec![0.02, 0.01], Constraint::None, Arc::new(LinearImpl))
            .unwrap();
        assert_abs_diff_eq!(p.value(2.0).unwrap(), 0.04, epsilon = 1e-15);
    }
}
