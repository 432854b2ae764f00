/// A real function of two real variables, f : R² -> R.
pub trait BivariateFunction {
    fn value(&self, x: f64, y: f64) -> f64;
}

impl<F> BivariateFunction for F
    where F: Fn(f64, f64) -> f64 {
    fn value(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
