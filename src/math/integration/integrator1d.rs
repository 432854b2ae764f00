use log::trace;

use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::integration::integrationerror::{
    check_positive,
    IntegrationError
};

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-subdivision rules on [a, b]
// ─────────────────────────────────────────────────────────────────────────────
//
// All three rules split [a, b] into n subintervals of width h = (b - a) / n
// and sample at x_i = a + i·h. Reversed bounds give a negative h, so the
// result flips sign; a == b gives h = 0 and a zero result.

/// Left Riemann sum: samples the left endpoint of each subinterval.
///
///   ∫_a^b f(x) dx ≈ h · Σ_{i=0}^{n-1} f(a + i·h)
pub fn riemann_left<F>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
    where F: UnivariateFunction + ?Sized {
    check_positive("n", n)?;
    trace!("riemann_left on [{}, {}] with n = {}", a, b, n);

    let h = (b - a) / n as f64;
    let sum: f64 = (0..n)
        .map(|i| f.value(a + i as f64 * h))
        .sum();

    Ok(h * sum)
}

/// Trapezoidal rule: linear interpolation between consecutive samples,
/// endpoints weighted by one half.
///
///   ∫_a^b f(x) dx ≈ h · [ (f(a) + f(b)) / 2 + Σ_{i=1}^{n-1} f(a + i·h) ]
pub fn trapezoidal<F>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
    where F: UnivariateFunction + ?Sized {
    check_positive("n", n)?;
    trace!("trapezoidal on [{}, {}] with n = {}", a, b, n);

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f.value(a) + f.value(b));
    for i in 1..n {
        sum += f.value(a + i as f64 * h);
    }

    Ok(h * sum)
}

/// Composite Simpson's rule: one parabola per pair of subintervals, so `n`
/// must be even.
///
///   ∫_a^b f(x) dx ≈ (h/3) · [ f(a) + f(b) + 4·Σ_{i odd} f(x_i) + 2·Σ_{i even, 0<i<n} f(x_i) ]
///
/// Exact for polynomials of degree ≤ 3.
pub fn simpson<F>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
    where F: UnivariateFunction + ?Sized {
    check_positive("n", n)?;
    if n % 2 != 0 {
        log::debug!("rejecting odd n = {} for simpson", n);
        return Err(IntegrationError::odd_subdivisions(n));
    }
    trace!("simpson on [{}, {}] with n = {}", a, b, n);

    let h = (b - a) / n as f64;
    let mut sum = f.value(a) + f.value(b);

    // odd indices 1, 3, ..., n-1
    for i in (1..n).step_by(2) {
        sum += 4.0 * f.value(a + i as f64 * h);
    }

    // interior even indices 2, 4, ..., n-2
    for i in (2..n).step_by(2) {
        sum += 2.0 * f.value(a + i as f64 * h);
    }

    Ok((h / 3.0) * sum)
}
