use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::math::integration::rule1d::Rule1D;

const DEFAULT_UPPER_BOUNDS: [f64; 3] = [1.0, 10.0, 100.0];
const DEFAULT_SUBDIVISIONS_1D: usize = 100_000;
const DEFAULT_SUBDIVISIONS_2D: usize = 2_000;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("invalid configuration value: {0}")]
    InvalidValue(String)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    lower_bound: Option<f64>,
    upper_bounds: Option<Vec<f64>>,
    subdivisions_1d: Option<usize>,
    subdivisions_2d: Option<usize>,
    rules: Option<Vec<Rule1D>>
}

/// Settings of the demonstration driver: integrate over [lower_bound, b]
/// (and [lower_bound, b]² in 2D) for every b in `upper_bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    lower_bound: f64,
    upper_bounds: Vec<f64>,
    subdivisions_1d: usize,
    subdivisions_2d: usize,
    rules: Vec<Rule1D>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            lower_bound: 0.0,
            upper_bounds: DEFAULT_UPPER_BOUNDS.to_vec(),
            subdivisions_1d: DEFAULT_SUBDIVISIONS_1D,
            subdivisions_2d: DEFAULT_SUBDIVISIONS_2D,
            rules: Rule1D::ALL.to_vec()
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bounds(&self) -> &[f64] {
        &self.upper_bounds
    }

    pub fn subdivisions_1d(&self) -> usize {
        self.subdivisions_1d
    }

    pub fn subdivisions_2d(&self) -> usize {
        self.subdivisions_2d
    }

    pub fn rules(&self) -> &[Rule1D] {
        &self.rules
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let defaults = Configuration::new();
        let config = Configuration {
            lower_bound: json_prop.lower_bound.unwrap_or(defaults.lower_bound),
            upper_bounds: json_prop.upper_bounds.unwrap_or(defaults.upper_bounds),
            subdivisions_1d: json_prop.subdivisions_1d.unwrap_or(defaults.subdivisions_1d),
            subdivisions_2d: json_prop.subdivisions_2d.unwrap_or(defaults.subdivisions_2d),
            rules: json_prop.rules.unwrap_or(defaults.rules)
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.subdivisions_1d == 0 {
            return Err(ConfigurationError::InvalidValue("subdivisions_1d must be strictly positive".to_owned()));
        }
        if self.subdivisions_2d == 0 {
            return Err(ConfigurationError::InvalidValue("subdivisions_2d must be strictly positive".to_owned()));
        }
        if let Some(b) = self.upper_bounds.iter().find(|b| !b.is_finite()) {
            return Err(ConfigurationError::InvalidValue(format!("upper bound {} is not finite", b)));
        }
        if !self.lower_bound.is_finite() {
            return Err(ConfigurationError::InvalidValue(format!("lower bound {} is not finite", self.lower_bound)));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
