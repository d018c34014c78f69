//! Lattice methods.
//!
//! * [`TimeGrid`] — validated grid of time points used by tree methods
//! * [`TrinomialTree`] — recombining trinomial tree of an additive-noise
//!   diffusion
//! * [`ShortRateTree`] — a trinomial tree plus per-slice fitting
//!   adjustments reproducing an input discount curve

pub mod short_rate_tree;
pub mod trinomial_tree;

pub use short_rate_tree::ShortRateTree;
pub use trinomial_tree::TrinomialTree;

use hw_core::{ensure, errors::Result, Real, Size, Time};

// ─── TimeGrid ─────────────────────────────────────────────────────────────────

/// A grid of time points used by lattice methods.
///
/// The grid always starts at `t = 0`; the remaining points must be
/// non-negative and strictly increasing.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times: Vec<Time>,
    dts: Vec<Time>,
}

impl TimeGrid {
    /// Create a grid from an ordered sequence of times.
    ///
    /// `t = 0` is inserted as the first point if absent.
    ///
    /// # Errors
    /// Returns a precondition error if the sequence is empty, contains a
    /// negative time, or is not strictly increasing.
    pub fn new(times: &[Time]) -> Result<Self> {
        ensure!(!times.is_empty(), "empty time sequence given to TimeGrid");
        ensure!(
            times[0] >= 0.0,
            "negative time {} given to TimeGrid",
            times[0]
        );
        ensure!(
            times.windows(2).all(|w| w[0] < w[1]),
            "times given to TimeGrid must be strictly increasing"
        );
        let mut all_times = Vec::with_capacity(times.len() + 1);
        if times[0] > 0.0 {
            all_times.push(0.0);
        }
        all_times.extend_from_slice(times);
        ensure!(
            all_times.len() >= 2,
            "TimeGrid needs at least one step after t = 0"
        );
        let dts = all_times.windows(2).map(|w| w[1] - w[0]).collect();
        Ok(Self {
            times: all_times,
            dts,
        })
    }

    /// Create a uniform time grid from 0 to `end` with `steps` intervals.
    pub fn uniform(end: Time, steps: Size) -> Self {
        assert!(steps > 0, "steps must be > 0");
        assert!(end > 0.0, "end must be > 0, got {end}");
        let dt = end / steps as Real;
        let times: Vec<Time> = (0..=steps).map(|i| i as Real * dt).collect();
        let dts = vec![dt; steps];
        Self { times, dts }
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Number of steps (= time points − 1).
    pub fn steps(&self) -> Size {
        self.times.len() - 1
    }

    /// Time at index `i`.
    pub fn time(&self, i: Size) -> Time {
        self.times[i]
    }

    /// Time step between index `i` and `i+1`.
    pub fn dt(&self, i: Size) -> Time {
        self.dts[i]
    }

    /// Final time.
    pub fn end(&self) -> Time {
        *self.times.last().expect("grid is never empty")
    }

    /// All time points.
    pub fn times(&self) -> &[Time] {
        &self.times
    }
}
