use serde::Deserialize;

use crate::math::function::univariatefunction::UnivariateFunction;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator1d::{
    riemann_left,
    simpson,
    trapezoidal
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Rule1D {
    RiemannLeft,
    Trapezoidal,
    Simpson
}

impl Rule1D {
    pub const ALL: [Rule1D; 3] = [Rule1D::RiemannLeft, Rule1D::Trapezoidal, Rule1D::Simpson];

    pub fn name(&self) -> &'static str {
        match self {
            Rule1D::RiemannLeft => "Riemann (left)",
            Rule1D::Trapezoidal => "Trapezoidal",
            Rule1D::Simpson => "Simpson"
        }
    }

    /// Global error order p for smooth integrands: error = O(h^p).
    pub fn order(&self) -> i32 {
        match self {
            Rule1D::RiemannLeft => 1,
            Rule1D::Trapezoidal => 2,
            Rule1D::Simpson => 4
        }
    }

    /// Largest subdivision count ≤ `n` the rule accepts, or 0 if none.
    pub fn valid_subdivisions(&self, n: usize) -> usize {
        match self {
            Rule1D::Simpson => n - n % 2,
            _ => n
        }
    }

    pub fn integrate<F>(&self, f: &F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
        where F: UnivariateFunction + ?Sized {
        match self {
            Rule1D::RiemannLeft => riemann_left(f, a, b, n),
            Rule1D::Trapezoidal => trapezoidal(f, a, b, n),
            Rule1D::Simpson => simpson(f, a, b, n)
        }
    }
}
