/// A real function of one real variable, f : R -> R.
pub trait UnivariateFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> UnivariateFunction for F
    where F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
