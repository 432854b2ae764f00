use log::trace;

use crate::math::function::bivariatefunction::BivariateFunction;
use crate::math::integration::integrationerror::{
    check_positive,
    IntegrationError
};

/// Left Riemann sum over the rectangle [a, b] × [c, d], sampling the
/// bottom-left corner of each of the nx × ny grid cells:
///
///   ∬ f(x, y) dx dy ≈ hx · hy · Σ_{i=0}^{nx-1} Σ_{j=0}^{ny-1} f(a + i·hx, c + j·hy)
///
/// Cells are visited row by row along x, then y within each row. An empty
/// grid (`nx == 0` or `ny == 0`) is rejected instead of yielding NaN.
pub fn riemann_left_2d<F>(
    f: &F,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    nx: usize,
    ny: usize
) -> Result<f64, IntegrationError>
    where F: BivariateFunction + ?Sized {
    check_positive("nx", nx)?;
    check_positive("ny", ny)?;
    trace!("riemann_left_2d on [{}, {}] x [{}, {}] with nx = {}, ny = {}", a, b, c, d, nx, ny);

    let hx = (b - a) / nx as f64;
    let hy = (d - c) / ny as f64;

    let mut sum = 0.0;
    for i in 0..nx {
        let x = a + i as f64 * hx;
        for j in 0..ny {
            let y = c + j as f64 * hy;
            sum += f.value(x, y);
        }
    }

    Ok(hx * hy * sum)
}
