use crate::types::parameter::Parameter;
use crate::types::scoring::Weights;
use std::collections::BTreeMap;

/// Raw measurement series plus the weights used to combine them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub series: BTreeMap<Parameter, Vec<f64>>,
    pub weights: Weights,
}

impl Dataset {
    pub fn new(series: BTreeMap<Parameter, Vec<f64>>, weights: Weights) -> Self {
        Self { series, weights }
    }

    /// Five observations across the six default parameters, scored with the
    /// default weights.
    pub fn sample() -> Self {
        Self::new(Self::sample_series(), Weights::default())
    }

    pub fn sample_series() -> BTreeMap<Parameter, Vec<f64>> {
        BTreeMap::from([
            (Parameter::Speed, vec![60.0, 45.0, 50.0, 70.0, 55.0]),
            (Parameter::Acceleration, vec![2.5, 1.2, 1.8, 3.0, 1.5]),
            (Parameter::Braking, vec![1.5, 0.8, 1.2, 2.5, 0.9]),
            (Parameter::LaneDiscipline, vec![2.0, 1.0, 1.0, 3.0, 1.0]),
            (Parameter::Tailgating, vec![3.0, 1.0, 2.0, 4.0, 1.0]),
            (Parameter::TurnSignal, vec![10.0, 12.0, 11.0, 8.0, 13.0]),
        ])
    }
}
