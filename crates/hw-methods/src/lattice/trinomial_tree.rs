//! Recombining trinomial tree for an additive-noise diffusion.
//!
//! The diffusion term must be independent of the underlying process value
//! (additive noise).  This tree is the standard discretization of the
//! Ornstein-Uhlenbeck state variable in short-rate models: node values are
//! `x0 + j·dx` and each node branches to three adjacent nodes around the
//! conditional mean at the next slice.

use hw_core::{Real, Size};
use hw_processes::StochasticProcess1D;

use super::TimeGrid;

const SQRT3: Real = 1.732_050_807_568_877_3;

/// Branching data for a single time step of the trinomial tree.
#[derive(Debug, Clone)]
struct Branching {
    /// Central descendant offset for each node.
    k: Vec<i32>,
    /// Probabilities for each branch (0=down, 1=mid, 2=up) for each node.
    probs: [Vec<Real>; 3],
    /// Minimum and maximum descendant offsets, defining the width at the
    /// next step.
    j_min: i32,
    j_max: i32,
}

impl Branching {
    fn new() -> Self {
        Self {
            k: Vec::new(),
            probs: [Vec::new(), Vec::new(), Vec::new()],
            j_min: i32::MAX,
            j_max: i32::MIN,
        }
    }

    /// Add a branching node: `k` is the central descendant offset,
    /// `p_down`, `p_mid`, `p_up` the three probabilities.
    fn add(&mut self, k: i32, p_down: Real, p_mid: Real, p_up: Real) {
        self.k.push(k);
        self.probs[0].push(p_down);
        self.probs[1].push(p_mid);
        self.probs[2].push(p_up);
        // Descendant range: k-1, k, k+1
        self.j_min = self.j_min.min(k - 1);
        self.j_max = self.j_max.max(k + 1);
    }

    /// Number of nodes at the next time step.
    fn size(&self) -> Size {
        (self.j_max - self.j_min + 1) as Size
    }

    /// Descendant index for node `index` and branch `b` (0=down, 1=mid, 2=up).
    fn descendant(&self, index: Size, branch: Size) -> Size {
        (self.k[index] - self.j_min - 1 + branch as i32) as Size
    }

    /// Probability at node `index` for branch `b`.
    fn probability(&self, index: Size, branch: Size) -> Real {
        self.probs[branch][index]
    }
}

/// A recombining trinomial tree approximating a 1-D stochastic process
/// with state-independent variance.
///
/// The slice spacing is `dx = σ_step·√3` where `σ_step` is the conditional
/// standard deviation over the step; each node's three branches are centred
/// on the node nearest its conditional mean, so the first two moments of
/// the process are matched exactly at every node.
#[derive(Debug, Clone)]
pub struct TrinomialTree {
    x0: Real,
    /// dx at each slice (dx[0] = 0 for the root; dx[i] for slice i ≥ 1).
    dx: Vec<Real>,
    branchings: Vec<Branching>,
    time_grid: TimeGrid,
}

impl TrinomialTree {
    /// Build a trinomial tree from a 1-D stochastic process and time grid.
    ///
    /// The process variance must be independent of the state variable and
    /// strictly positive over every step.
    pub fn new(process: &dyn StochasticProcess1D, grid: &TimeGrid) -> Self {
        let x0 = process.x0();
        let n = grid.steps();

        let mut dx: Vec<Real> = vec![0.0]; // dx[0] unused (root slice)
        let mut branchings: Vec<Branching> = Vec::with_capacity(n);

        let mut j_low = 0i32;
        let mut j_high = 0i32;

        for i in 0..n {
            let t = grid.time(i);
            let dt = grid.dt(i);

            // Variance independent of x → evaluate at x0
            let v2 = process.variance(t, x0, dt);
            assert!(v2 > 0.0, "process variance must be positive over step {i}");
            let v = v2.sqrt();
            let dx_next = v * SQRT3;

            let mut branching = Branching::new();
            for j in j_low..=j_high {
                let x = x0 + j as Real * dx[i];
                let m = process.expectation(t, x, dt);
                // Centre the branches on the node nearest the conditional mean
                let k = ((m - x0) / dx_next + 0.5).floor() as i32;
                let e = m - (x0 + k as Real * dx_next);
                let e2 = e * e;
                let e3 = e * SQRT3;

                let p_down = (1.0 + e2 / v2 - e3 / v) / 6.0;
                let p_mid = (2.0 - e2 / v2) / 3.0;
                let p_up = (1.0 + e2 / v2 + e3 / v) / 6.0;

                branching.add(k, p_down, p_mid, p_up);
            }

            dx.push(dx_next);
            j_low = branching.j_min;
            j_high = branching.j_max;
            branchings.push(branching);
        }

        Self {
            x0,
            dx,
            branchings,
            time_grid: grid.clone(),
        }
    }

    /// Build a trinomial tree with a uniform time grid.
    pub fn uniform(process: &dyn StochasticProcess1D, end: Real, steps: Size) -> Self {
        let grid = TimeGrid::uniform(end, steps);
        Self::new(process, &grid)
    }

    /// The time grid the tree was built on.
    pub fn time_grid(&self) -> &TimeGrid {
        &self.time_grid
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.time_grid.steps()
    }

    /// Number of nodes at time step `i`.
    pub fn size(&self, i: Size) -> Size {
        if i == 0 {
            1
        } else {
            self.branchings[i - 1].size()
        }
    }

    /// Underlying process value at node `(i, index)`: `x0 + (j_min + index)·dx[i]`.
    pub fn underlying(&self, i: Size, index: Size) -> Real {
        if i == 0 {
            self.x0
        } else {
            let j_min = self.branchings[i - 1].j_min;
            self.x0 + (j_min as Real + index as Real) * self.dx[i]
        }
    }

    /// Descendant index at step `i` for node `index` and `branch` (0..2).
    pub fn descendant(&self, i: Size, index: Size, branch: Size) -> Size {
        self.branchings[i].descendant(index, branch)
    }

    /// Transition probability at step `i`, node `index`, branch `branch`.
    pub fn probability(&self, i: Size, index: Size, branch: Size) -> Real {
        self.branchings[i].probability(index, branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hw_processes::OrnsteinUhlenbeckProcess;

    fn ou() -> OrnsteinUhlenbeckProcess {
        OrnsteinUhlenbeckProcess::new_zero_level(0.1, 0.01)
    }

    #[test]
    fn root_is_single_node_at_x0() {
        let tree = TrinomialTree::uniform(&ou(), 1.0, 10);
        assert_eq!(tree.size(0), 1);
        assert_abs_diff_eq!(tree.underlying(0, 0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn sizes_grow_and_recombine() {
        let tree = TrinomialTree::uniform(&ou(), 1.0, 10);
        for i in 1..=10 {
            // Each step widens by at most one node on each side
            assert!(tree.size(i) <= tree.size(i - 1) + 2);
            assert!(tree.size(i) >= tree.size(i - 1));
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let tree = TrinomialTree::uniform(&ou(), 5.0, 20);
        for i in 0..tree.steps() {
            for j in 0..tree.size(i) {
                let sum: Real = (0..3).map(|b| tree.probability(i, j, b)).sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn descendants_are_adjacent_and_in_range() {
        let tree = TrinomialTree::uniform(&ou(), 5.0, 20);
        for i in 0..tree.steps() {
            for j in 0..tree.size(i) {
                let d0 = tree.descendant(i, j, 0);
                let d1 = tree.descendant(i, j, 1);
                let d2 = tree.descendant(i, j, 2);
                assert_eq!(d1, d0 + 1);
                assert_eq!(d2, d1 + 1);
                assert!(d2 < tree.size(i + 1));
            }
        }
    }

    #[test]
    fn matches_conditional_moments_per_node() {
        let process = ou();
        let grid = TimeGrid::uniform(2.0, 8);
        let tree = TrinomialTree::new(&process, &grid);
        for i in 0..tree.steps() {
            let t = grid.time(i);
            let dt = grid.dt(i);
            for j in 0..tree.size(i) {
                let x = tree.underlying(i, j);
                let mut mean = 0.0;
                let mut second = 0.0;
                for b in 0..3 {
                    let p = tree.probability(i, j, b);
                    let x_next = tree.underlying(i + 1, tree.descendant(i, j, b));
                    mean += p * x_next;
                    second += p * x_next * x_next;
                }
                assert_abs_diff_eq!(mean, process.expectation(t, x, dt), epsilon = 1e-12);
                assert_abs_diff_eq!(
                    second - mean * mean,
                    process.variance(t, x, dt),
                    epsilon = 1e-12
                );
            }
        }
    }
}
