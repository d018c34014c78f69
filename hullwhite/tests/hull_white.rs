//! End-to-end tests of the Hull-White model: curve reproduction through
//! the analytic formulas and through the fitted lattice, option pricing
//! scenarios, and recalibration behavior.

use approx::assert_abs_diff_eq;
use hullwhite::core::{OptionType, Real, RelinkableHandle};
use hullwhite::methods::TimeGrid;
use hullwhite::models::{CalibratedModel, HullWhite, OneFactorModel, ShortRateModel};
use hullwhite::termstructures::{FlatForward, YieldTermStructure, ZeroCurve};
use std::sync::Arc;

fn flat_handle(rate: Real) -> RelinkableHandle<dyn YieldTermStructure> {
    RelinkableHandle::from_arc(Arc::new(FlatForward::new(rate)))
}

fn market_curve() -> Arc<dyn YieldTermStructure> {
    Arc::new(
        ZeroCurve::new(
            &[0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
            &[0.030, 0.032, 0.034, 0.037, 0.041, 0.044, 0.046],
        )
        .unwrap(),
    )
}

#[test]
fn lattice_is_term_structure_consistent_on_flat_curve() {
    let model = HullWhite::new(flat_handle(0.05), 0.1, 0.01).unwrap();
    let grid = TimeGrid::uniform(5.0, 50);
    let lattice = model.tree(&grid).unwrap();
    for i in 1..=lattice.steps() {
        assert_abs_diff_eq!(
            lattice.discount_factor(i),
            (-0.05 * grid.time(i)).exp(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn lattice_is_term_structure_consistent_on_market_curve() {
    let curve = market_curve();
    let model = HullWhite::new(RelinkableHandle::from_arc(curve.clone()), 0.08, 0.012).unwrap();
    // Non-uniform grid with mandatory points at the curve pillars
    let grid = TimeGrid::new(&[0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 7.5, 10.0]).unwrap();
    let lattice = model.tree(&grid).unwrap();
    for i in 1..=lattice.steps() {
        assert_abs_diff_eq!(
            lattice.discount_factor(i),
            curve.discount(grid.time(i)).unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn lattice_rollback_prices_a_discount_bond() {
    // Rolling a unit payoff back from maturity is the lattice price of a
    // zero-coupon bond, which must match the input curve.
    let model = HullWhite::new(flat_handle(0.04), 0.1, 0.01).unwrap();
    let grid = TimeGrid::uniform(2.0, 40);
    let lattice = model.tree(&grid).unwrap();
    let n = lattice.steps();
    let ones = vec![1.0; lattice.size(n)];
    let pv = lattice.rollback(&ones, n, 0).unwrap()[0];
    assert_abs_diff_eq!(pv, (-0.04 * 2.0_f64).exp(), epsilon = 1e-12);
}

#[test]
fn analytic_and_lattice_bond_prices_agree() {
    let curve = market_curve();
    let model = HullWhite::new(RelinkableHandle::from_arc(curve.clone()), 0.08, 0.012).unwrap();
    let grid = TimeGrid::uniform(5.0, 100);
    let lattice = model.tree(&grid).unwrap();
    let r0 = curve.forward_rate(0.0).unwrap();
    // Analytic P(0,5) from the affine formula, lattice P(0,5) from the fit
    let analytic = model.discount_bond(0.0, 5.0, r0).unwrap();
    let from_lattice = lattice.discount_factor(lattice.steps());
    assert_abs_diff_eq!(analytic, from_lattice, epsilon = 1e-9);
}

#[test]
fn bond_option_matches_known_magnitude() {
    // a = 0.1, σ = 0.01, flat 5% curve: a near-the-money one-year call on
    // a two-year bond is worth a fraction of a basis point of notional.
    let model = HullWhite::new(flat_handle(0.05), 0.1, 0.01).unwrap();
    let price = model
        .discount_bond_option(OptionType::Call, 0.98, 1.0, 2.0)
        .unwrap();
    assert!(price > 0.0 && price < 0.01, "price = {price}");

    // A strike far below the forward bond price is worth its intrinsic
    let deep_itm = model
        .discount_bond_option(OptionType::Call, 0.5, 1.0, 2.0)
        .unwrap();
    let intrinsic = (-0.1_f64).exp() - 0.5 * (-0.05_f64).exp();
    assert_abs_diff_eq!(deep_itm, intrinsic, epsilon = 1e-10);
}

#[test]
fn recalibration_flows_through_every_operation() {
    let handle = flat_handle(0.05);
    let mut model = HullWhite::new(handle.clone(), 0.1, 0.01).unwrap();
    let grid = TimeGrid::uniform(2.0, 20);

    let phi_before = model.dynamics().short_rate(1.0, 0.0).unwrap();
    let option_before = model
        .discount_bond_option(OptionType::Call, 0.95, 1.0, 2.0)
        .unwrap();

    // Double the volatility: φ and the option price must both move
    model.set_params(&[0.1, 0.02]).unwrap();
    let phi_after = model.dynamics().short_rate(1.0, 0.0).unwrap();
    let option_after = model
        .discount_bond_option(OptionType::Call, 0.95, 1.0, 2.0)
        .unwrap();
    assert!(phi_after > phi_before);
    assert!(option_after > option_before);

    // Relink the curve: the lattice must fit the new curve, not the old one
    handle.link_to_arc(Arc::new(FlatForward::new(0.03)));
    let lattice = model.tree(&grid).unwrap();
    for i in 1..=lattice.steps() {
        assert_abs_diff_eq!(
            lattice.discount_factor(i),
            (-0.03 * grid.time(i)).exp(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn dynamics_snapshot_is_independent_of_later_recalibration() {
    let mut model = HullWhite::new(flat_handle(0.05), 0.1, 0.01).unwrap();
    let snapshot = model.dynamics();
    let before = snapshot.short_rate(1.0, 0.0).unwrap();

    model.set_params(&[0.3, 0.03]).unwrap();

    // The old snapshot keeps its (a, σ); only a fresh one sees the update
    assert_abs_diff_eq!(snapshot.short_rate(1.0, 0.0).unwrap(), before, epsilon = 1e-15);
    assert!(model.dynamics().short_rate(1.0, 0.0).unwrap() > before);
}
