//! `StochasticProcess1D` — base trait for one-dimensional diffusions.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is described by its drift (`μ`),
//! diffusion (`σ`), and conditional moments over a finite step.  The
//! defaults use a first-order Euler discretization; processes with known
//! closed-form moments (such as Ornstein-Uhlenbeck) override them.

use hw_core::{Real, Time};

/// A one-dimensional stochastic process.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Instantaneous drift `μ(t, x)`.
    fn drift(&self, t: Time, x: Real) -> Real;

    /// Instantaneous diffusion `σ(t, x)`.
    fn diffusion(&self, t: Time, x: Real) -> Real;

    /// Expectation `E[x(t+Δt) | x(t) = x]`.
    ///
    /// Default: first-order Euler `x + μ(t,x)·Δt`.
    fn expectation(&self, t: Time, x: Real, dt: Time) -> Real {
        x + self.drift(t, x) * dt
    }

    /// Standard deviation of `x(t+Δt) | x(t) = x`.
    ///
    /// Default: `σ(t,x)·√Δt`.
    fn std_deviation(&self, t: Time, x: Real, dt: Time) -> Real {
        self.diffusion(t, x) * dt.sqrt()
    }

    /// Variance of `x(t+Δt) | x(t) = x`.
    ///
    /// Default: the square of `std_deviation`.
    fn variance(&self, t: Time, x: Real, dt: Time) -> Real {
        let sd = self.std_deviation(t, x, dt);
        sd * sd
    }

    /// Advance the state by one step given a draw `dw` of the Brownian
    /// increment (already normalized to unit variance).
    ///
    /// `x(t+Δt) = E[x(t+Δt)|x(t)] + std·dw`
    fn evolve(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real {
        self.expectation(t, x, dt) + self.std_deviation(t, x, dt) * dw
    }
}
