//! Normal (Gaussian) distribution.

use hw_core::Real;
use std::f64::consts::PI;

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Uses a high-accuracy rational Chebyshev approximation.
/// Maximum absolute error < 7.5×10⁻⁸.
pub fn normal_cdf(x: Real) -> Real {
    // Abramowitz & Stegun 26.2.17 — maximum |error| < 7.5e-8
    // but special-case x = 0 for exact 0.5
    if x == 0.0 {
        return 0.5;
    }
    let sign = if x < 0.0 { -1.0_f64 } else { 1.0_f64 };
    let t = 1.0 / (1.0 + 0.2316419 * x.abs());
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937
                    + t * (-1.821_255_978 + t * 1.330_274_429))));
    let pdf = normal_pdf(x);
    0.5 + sign * (0.5 - poly * pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pdf_at_zero() {
        assert_abs_diff_eq!(normal_pdf(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn cdf_at_zero_is_exactly_half() {
        assert_eq!(normal_cdf(0.0), 0.5);
    }

    #[test]
    fn cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 1.96, 3.0] {
            assert_abs_diff_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn cdf_known_values() {
        // Tabulated values of Φ
        assert_abs_diff_eq!(normal_cdf(1.0), 0.841_344_746, epsilon = 1e-7);
        assert_abs_diff_eq!(normal_cdf(1.96), 0.975_002_105, epsilon = 1e-7);
        assert_abs_diff_eq!(normal_cdf(-2.0), 0.022_750_132, epsilon = 1e-7);
    }

    #[test]
    fn cdf_tails() {
        assert!(normal_cdf(8.0) > 1.0 - 1e-12);
        assert!(normal_cdf(-8.0) < 1e-12);
    }
}
