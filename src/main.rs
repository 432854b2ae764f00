use std::env;
use std::process::ExitCode;

use log::{
    error,
    info
};

use quadrature::configuration::{
    Configuration,
    ConfigurationError
};
use quadrature::math::integration::integrator2d::riemann_left_2d;

fn load_configuration() -> Result<Configuration, ConfigurationError> {
    match env::args().nth(1) {
        Some(config_path) => {
            info!("reading configuration from {}", config_path);
            Configuration::from_file(config_path)
        },
        None => Ok(Configuration::new())
    }
}

fn run_1d(config: &Configuration) {
    let f = |x: f64| (-x * x).exp();
    let a = config.lower_bound();

    for &b in config.upper_bounds() {
        println!("==============================================");
        println!("Integral of exp(-x^2) on [{}, {}]", a, b);
        println!("n = {} subintervals", config.subdivisions_1d());
        println!("----------------------------------------------");

        for rule in config.rules() {
            let n = rule.valid_subdivisions(config.subdivisions_1d());
            match rule.integrate(&f, a, b, n) {
                Ok(value) => println!("{:<16} : {}", rule.name(), value),
                Err(error) => error!("{} failed on [{}, {}]: {}", rule.name(), a, b, error)
            }
        }

        println!();
    }
}

fn run_2d(config: &Configuration) {
    let f = |x: f64, y: f64| (-(x * x + y * y)).exp();
    let a = config.lower_bound();
    let n = config.subdivisions_2d();

    for &b in config.upper_bounds() {
        println!("=== double integral of exp(-(x^2+y^2)) on [{a}, {b}]x[{a}, {b}] ===");
        println!("nx = ny = {}", n);
        match riemann_left_2d(&f, a, b, a, b, n, n) {
            Ok(value) => println!("Riemann 2D (bottom-left) : {}", value),
            Err(error) => error!("2D Riemann failed on [{}, {}]: {}", a, b, error)
        }
        println!();
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_configuration() {
        Ok(config) => config,
        Err(error) => {
            error!("cannot load configuration: {}", error);
            return ExitCode::FAILURE;
        }
    };

    run_1d(&config);
    run_2d(&config);
    ExitCode::SUCCESS
}
