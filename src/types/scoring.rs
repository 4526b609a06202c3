use crate::error::{Result, ScoreError};
use crate::types::parameter::Parameter;
use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = f64;

/// Importance weight per parameter, iterated in canonical parameter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weights(BTreeMap<Parameter, f64>);

impl Weights {
    pub fn new(weights: BTreeMap<Parameter, f64>) -> Result<Self> {
        for (&parameter, &weight) in &weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoreError::InvalidWeight { parameter, weight });
            }
        }
        Ok(Self(weights))
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.0.get(&parameter).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        self.0.iter().map(|(&parameter, &weight)| (parameter, weight))
    }

    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn sums_to_one(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Parameter::Speed, 0.25),
            (Parameter::Acceleration, 0.20),
            (Parameter::Braking, 0.20),
            (Parameter::LaneDiscipline, 0.10),
            (Parameter::Tailgating, 0.15),
            (Parameter::TurnSignal, 0.10),
        ]))
    }
}
