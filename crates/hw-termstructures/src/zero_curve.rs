//! `ZeroCurve` — a yield term structure built from zero rates at known
//! pillar times.
//!
//! The curve stores (time, zero-rate) pairs and interpolates the zero rate
//! linearly in time.  Discount factors are `P(t) = exp(-z(t)·t)`.  Unlike
//! [`FlatForward`][crate::FlatForward], the domain is finite: queries past
//! the last pillar fail with an out-of-range error.

use crate::yield_term_structure::YieldTermStructure;
use hw_core::{ensure, errors::Result, DiscountFactor, Rate, Time};
use hw_math::LinearInterpolation;

/// A yield curve defined by continuously-compounded zero rates at known
/// pillar times.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    interp: LinearInterpolation,
    max_time: Time,
}

impl ZeroCurve {
    /// Build a zero-rate curve from pillar times and corresponding rates.
    ///
    /// # Arguments
    /// * `times` — pillar times, strictly increasing, first entry `0.0`
    /// * `rates` — continuously-compounded zero rates at each pillar
    ///
    /// # Errors
    /// Returns a precondition error if the pillars are malformed.
    pub fn new(times: &[Time], rates: &[Rate]) -> Result<Self> {
        ensure!(!times.is_empty(), "need at least one pillar time");
        ensure!(
            times[0] == 0.0,
            "the first pillar must be at t = 0, got {}",
            times[0]
        );
        let interp = LinearInterpolation::new(times, rates)?;
        let max_time = interp.x_max();
        Ok(Self { interp, max_time })
    }

    /// The interpolated zero rate at `t` (no range check).
    fn zero(&self, t: Time) -> Rate {
        self.interp.value(t)
    }
}

impl YieldTermStructure for ZeroCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero(t) * t).exp()
    }

    fn zero_rate_impl(&self, t: Time) -> Rate {
        self.zero(t)
    }

    fn max_time(&self) -> Time {
        self.max_time
    }
}
