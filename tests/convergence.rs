use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use quadrature::math::integration::integrator1d::{
    riemann_left,
    simpson,
    trapezoidal
};
use quadrature::math::integration::integrator2d::riemann_left_2d;
use quadrature::math::integration::rule1d::Rule1D;

/// ∫_0^1 exp(-x²) dx = (√π / 2)·erf(1)
const GAUSSIAN_ON_UNIT_INTERVAL: f64 = 0.746_824_132_812_427_1;

fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

fn errors(rule: Rule1D, counts: &[usize]) -> Vec<f64> {
    counts
        .iter()
        .map(|&n| (rule.integrate(&gaussian, 0.0, 1.0, n).unwrap() - GAUSSIAN_ON_UNIT_INTERVAL).abs())
        .collect()
}

#[test]
fn error_ratios_on_doubling_match_rule_order() {
    let counts = [8, 16, 32, 64];
    for rule in Rule1D::ALL {
        let expected_ratio = 2f64.powi(rule.order());
        let errs = errors(rule, &counts);
        for pair in errs.windows(2) {
            let ratio = pair[0] / pair[1];
            assert!(
                (ratio / expected_ratio - 1.0).abs() < 0.15,
                "{}: ratio {} far from {}", rule.name(), ratio, expected_ratio
            );
        }
    }
}

#[test]
fn higher_order_rules_are_more_accurate_at_every_resolution() {
    let counts = [8, 16, 32, 64, 128];
    let riemann_errors = errors(Rule1D::RiemannLeft, &counts);
    let trapezoidal_errors = errors(Rule1D::Trapezoidal, &counts);
    let simpson_errors = errors(Rule1D::Simpson, &counts);
    for k in 0..counts.len() {
        assert!(simpson_errors[k] < trapezoidal_errors[k]);
        assert!(trapezoidal_errors[k] < riemann_errors[k]);
    }
}

#[test]
fn fine_grids_reach_the_reference_value() {
    assert_abs_diff_eq!(riemann_left(&gaussian, 0.0, 1.0, 100_000).unwrap(), GAUSSIAN_ON_UNIT_INTERVAL, epsilon = 1e-5);
    assert_abs_diff_eq!(trapezoidal(&gaussian, 0.0, 1.0, 10_000).unwrap(), GAUSSIAN_ON_UNIT_INTERVAL, epsilon = 1e-8);
    assert_abs_diff_eq!(simpson(&gaussian, 0.0, 1.0, 1_000).unwrap(), GAUSSIAN_ON_UNIT_INTERVAL, epsilon = 1e-12);
}

#[test]
fn reversed_bounds_negate_symmetric_rules() {
    for n in [2, 10, 64] {
        let forward = trapezoidal(&gaussian, 0.0, 1.0, n).unwrap();
        let reversed = trapezoidal(&gaussian, 1.0, 0.0, n).unwrap();
        assert_relative_eq!(reversed, -forward, max_relative = 1e-12);

        let forward = simpson(&gaussian, 0.0, 1.0, n).unwrap();
        let reversed = simpson(&gaussian, 1.0, 0.0, n).unwrap();
        assert_relative_eq!(reversed, -forward, max_relative = 1e-12);
    }
}

#[test]
fn reversed_riemann_sum_samples_the_other_endpoints() {
    // Reversed, the left endpoints become the right ones, so the two sums
    // differ by exactly h·(f(a) - f(b)).
    for n in [1, 5, 64] {
        let h = 1.0 / n as f64;
        let forward = riemann_left(&gaussian, 0.0, 1.0, n).unwrap();
        let reversed = riemann_left(&gaussian, 1.0, 0.0, n).unwrap();
        assert_abs_diff_eq!(forward + reversed, h * (gaussian(0.0) - gaussian(1.0)), epsilon = 1e-12);
    }

    let constant = |_: f64| 2.0;
    let forward = riemann_left(&constant, -1.0, 3.0, 7).unwrap();
    let reversed = riemann_left(&constant, 3.0, -1.0, 7).unwrap();
    assert_relative_eq!(reversed, -forward, max_relative = 1e-12);
}

#[test]
fn two_dimensional_sum_converges_to_product_of_gaussians() {
    let f = |x: f64, y: f64| (-(x * x + y * y)).exp();
    let coarse = riemann_left_2d(&f, 0.0, 1.0, 0.0, 1.0, 50, 50).unwrap();
    let fine = riemann_left_2d(&f, 0.0, 1.0, 0.0, 1.0, 400, 400).unwrap();
    let exact = GAUSSIAN_ON_UNIT_INTERVAL * GAUSSIAN_ON_UNIT_INTERVAL;
    assert!((fine - exact).abs() < (coarse - exact).abs());
    assert_abs_diff_eq!(fine, exact, epsilon = 2e-3);
}
