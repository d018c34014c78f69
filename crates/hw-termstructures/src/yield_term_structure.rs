//! `YieldTermStructure` — the yield-curve interface.
//!
//! This module defines the `YieldTermStructure` trait together with the
//! three fundamental quantities any yield curve must provide:
//!
//! * **discount factor** — `P(0,t)`
//! * **zero rate** — the continuously-compounded zero rate for maturity *t*
//! * **forward rate** — the instantaneous forward rate at time *t*
//!
//! The public accessors are fallible: a request outside the curve's domain
//! surfaces as an error to the caller instead of being clamped or
//! extrapolated silently.

use hw_core::{errors::Result, DiscountFactor, Error, Rate, Real, Time};

/// Small time step used for instantaneous forward rate computations.
const DT: Real = 1.0e-4;

/// A yield (interest-rate) term structure indexed by time.
///
/// Implementors must provide **exactly one** of the two low-level methods:
///
/// * [`discount_impl`](YieldTermStructure::discount_impl)
/// * [`zero_rate_impl`](YieldTermStructure::zero_rate_impl)
///
/// Default implementations of the other (and of
/// [`forward_rate_impl`](YieldTermStructure::forward_rate_impl)) are
/// provided via the mathematical relationships that connect them.  The
/// `*_impl` hooks are total over `[0, max_time]`; range checking happens
/// once in the public accessors.
pub trait YieldTermStructure: std::fmt::Debug + Send + Sync {
    // ── Low-level impl hooks ─────────────────────────────────────────────

    /// Return the discount factor for a given time `t`.
    ///
    /// Default: computed from `zero_rate_impl`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        let r = self.zero_rate_impl(t);
        (-r * t).exp()
    }

    /// Return the continuously-compounded zero rate for time `t`.
    ///
    /// Default: computed from `discount_impl`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        if t == 0.0 {
            // Use the instantaneous forward rate at t=0 as the limit
            return self.forward_rate_impl(0.0);
        }
        let df = self.discount_impl(t);
        -df.ln() / t
    }

    /// Return the instantaneous forward rate at time `t`.
    ///
    /// Default: computed via the negative derivative of log discount,
    /// using a central difference approximation of `∂ ln P / ∂t`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let t1 = (t - DT / 2.0).max(0.0);
        let t2 = t + DT / 2.0;
        let df1 = self.discount_impl(t1);
        let df2 = self.discount_impl(t2);
        // -d(ln P)/dt ≈ (ln P(t1) - ln P(t2)) / (t2 - t1)
        (df1.ln() - df2.ln()) / (t2 - t1)
    }

    // ── Domain ───────────────────────────────────────────────────────────

    /// The latest time for which the curve can be used.
    fn max_time(&self) -> Time {
        Time::INFINITY
    }

    /// Check whether a time is in the valid range of the term structure.
    fn check_range(&self, t: Time) -> Result<()> {
        if t < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "negative time {t} given to a term structure"
            )));
        }
        if t > self.max_time() {
            return Err(Error::OutOfCurveRange {
                time: t,
                max_time: self.max_time(),
            });
        }
        Ok(())
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor `P(0,t)`.
    fn discount(&self, t: Time) -> Result<DiscountFactor> {
        self.check_range(t)?;
        Ok(self.discount_impl(t))
    }

    /// Continuously-compounded zero rate for maturity `t`.
    fn zero_rate(&self, t: Time) -> Result<Rate> {
        self.check_range(t)?;
        Ok(self.zero_rate_impl(t))
    }

    /// Instantaneous forward rate `f(t)`.
    fn forward_rate(&self, t: Time) -> Result<Rate> {
        self.check_range(t)?;
        Ok(self.forward_rate_impl(t))
    }
}
