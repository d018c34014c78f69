//! `FlatForward` — a yield term structure with a constant forward rate.
//!
//! This is the simplest possible yield curve: a constant
//! continuously-compounded rate that applies for all maturities.

use crate::yield_term_structure::YieldTermStructure;
use hw_core::{DiscountFactor, Rate, Time};

/// A flat (constant) forward-rate yield term structure.
///
/// Discount factors are computed as `P(t) = exp(-r·t)` where `r` is the
/// continuously-compounded flat rate.  The domain is unbounded.
#[derive(Debug, Clone)]
pub struct FlatForward {
    /// The continuously-compounded flat rate.
    rate: Rate,
}

impl FlatForward {
    /// Create a flat-forward curve from a continuously-compounded rate.
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn discount_at_zero_is_one() {
        let ts = FlatForward::new(0.05);
        assert_abs_diff_eq!(ts.discount(0.0).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn discount_matches_closed_form() {
        let ts = FlatForward::new(0.05);
        assert_abs_diff_eq!(
            ts.discount(2.0).unwrap(),
            (-0.1_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn forward_is_flat() {
        let ts = FlatForward::new(0.05);
        for &t in &[0.0, 1.0, 7.5, 30.0] {
            assert_abs_diff_eq!(ts.forward_rate(t).unwrap(), 0.05, epsilon = 1e-15);
        }
    }

    #[test]
    fn unbounded_domain() {
        let ts = FlatForward::new(0.05);
        assert!(ts.discount(1.0e4).is_ok());
    }
}
