//! Short-rate lattice fitted to an input discount curve.
//!
//! A [`ShortRateTree`] wraps a [`TrinomialTree`] of the model's state
//! variable and carries one additive adjustment `θ_i` per time slice.  The
//! adjustments are solved by forward induction over Arrow-Debreu state
//! prices so that discounting a sure unit payoff through the lattice
//! reproduces the supplied discount factor at every grid time.
//!
//! For a model whose short rate is an additive shift of the state
//! (`r = x + θ`), the slice equation
//! `Σ_j Q_ij · e^{−(x_ij + θ_i)·Δt_i} = P(0, t_{i+1})`
//! has the closed-form solution
//! `θ_i = [ln Σ_j Q_ij·e^{−x_ij·Δt_i} − ln P(0, t_{i+1})] / Δt_i`.

use hw_core::{ensure, errors::Result, DiscountFactor, Rate, Real, Size};

use super::{TimeGrid, TrinomialTree};

/// A trinomial short-rate lattice with per-slice curve-fitting adjustments.
#[derive(Debug, Clone)]
pub struct ShortRateTree {
    tree: TrinomialTree,
    /// Additive adjustment θ_i for each slice 0..steps.
    spreads: Vec<Real>,
    /// Arrow-Debreu state prices at each slice 0..=steps.
    state_prices: Vec<Vec<Real>>,
}

impl ShortRateTree {
    /// Fit a short-rate lattice to a sequence of target discount factors.
    ///
    /// `target_discounts[i]` must be the curve discount factor `P(0, t_{i+1})`
    /// for grid time `t_{i+1}`, one entry per step.
    ///
    /// # Errors
    /// Returns a precondition error if the number of targets does not match
    /// the grid or a target is not strictly positive.
    pub fn fitted(tree: TrinomialTree, target_discounts: &[DiscountFactor]) -> Result<Self> {
        let n = tree.steps();
        ensure!(
            target_discounts.len() == n,
            "expected {n} target discount factors, got {}",
            target_discounts.len()
        );
        ensure!(
            target_discounts.iter().all(|&p| p > 0.0),
            "target discount factors must be strictly positive"
        );

        let mut spreads = Vec::with_capacity(n);
        let mut state_prices: Vec<Vec<Real>> = Vec::with_capacity(n + 1);
        state_prices.push(vec![1.0]);

        for i in 0..n {
            let dt = tree.time_grid().dt(i);
            let q = &state_prices[i];

            // Value of a unit payoff at t_{i+1} discounted at the raw state
            let raw: Real = (0..tree.size(i))
                .map(|j| q[j] * (-tree.underlying(i, j) * dt).exp())
                .sum();
            let theta = (raw.ln() - target_discounts[i].ln()) / dt;
            spreads.push(theta);

            // Propagate the state prices through the fitted discounting
            let mut q_next = vec![0.0; tree.size(i + 1)];
            for j in 0..tree.size(i) {
                let discount = (-(tree.underlying(i, j) + theta) * dt).exp();
                for b in 0..3 {
                    q_next[tree.descendant(i, j, b)] +=
                        q[j] * tree.probability(i, j, b) * discount;
                }
            }
            state_prices.push(q_next);
        }

        Ok(Self {
            tree,
            spreads,
            state_prices,
        })
    }

    /// The time grid the lattice was built on.
    pub fn time_grid(&self) -> &TimeGrid {
        self.tree.time_grid()
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.tree.steps()
    }

    /// Number of nodes at slice `i`.
    pub fn size(&self, i: Size) -> Size {
        self.tree.size(i)
    }

    /// The underlying (unfitted) trinomial tree.
    pub fn tree(&self) -> &TrinomialTree {
        &self.tree
    }

    /// Fitting adjustment θ_i at slice `i` (`i < steps()`).
    pub fn spread(&self, i: Size) -> Real {
        self.spreads[i]
    }

    /// Short rate at node `(i, index)` (`i < steps()`).
    pub fn short_rate(&self, i: Size, index: Size) -> Rate {
        self.tree.underlying(i, index) + self.spreads[i]
    }

    /// One-step discount factor applied at node `(i, index)` (`i < steps()`).
    pub fn discount(&self, i: Size, index: Size) -> DiscountFactor {
        (-self.short_rate(i, index) * self.tree.time_grid().dt(i)).exp()
    }

    /// Arrow-Debreu state price of node `(i, index)`.
    pub fn state_price(&self, i: Size, index: Size) -> Real {
        self.state_prices[i][index]
    }

    /// Lattice-implied discount factor `P(0, t_i)`: the sum of the state
    /// prices at slice `i`.  By construction this equals the fitting target
    /// at every slice.
    pub fn discount_factor(&self, i: Size) -> DiscountFactor {
        self.state_prices[i].iter().sum()
    }

    /// Present value at the root of a payoff observed at slice `i`.
    pub fn present_value(&self, i: Size, values: &[Real]) -> Result<Real> {
        ensure!(
            values.len() == self.size(i),
            "expected {} values at slice {i}, got {}",
            self.size(i),
            values.len()
        );
        Ok(values
            .iter()
            .zip(&self.state_prices[i])
            .map(|(v, q)| v * q)
            .sum())
    }

    /// Roll a vector of slice-`from` values back to slice `to` by backward
    /// induction, discounting at the fitted node rates.
    pub fn rollback(&self, values: &[Real], from: Size, to: Size) -> Result<Vec<Real>> {
        ensure!(from <= self.steps(), "slice {from} past the end of the tree");
        ensure!(to <= from, "cannot roll back from slice {from} to later slice {to}");
        ensure!(
            values.len() == self.size(from),
            "expected {} values at slice {from}, got {}",
            self.size(from),
            values.len()
        );

        let mut current = values.to_vec();
        for i in (to..from).rev() {
            let mut next = vec![0.0; self.size(i)];
            for (j, slot) in next.iter_mut().enumerate() {
                let expected: Real = (0..3)
                    .map(|b| {
                        self.tree.probability(i, j, b)
                            * current[self.tree.descendant(i, j, b)]
                    })
                    .sum();
                *slot = self.discount(i, j) * expected;
            }
            current = next;
        }
        Ok(current)
    }
}
