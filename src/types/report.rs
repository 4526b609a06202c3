use crate::types::config::AlignmentPolicy;
use crate::types::parameter::Parameter;
use crate::types::scoring::Score;
use serde::Serialize;

/// Tukey fence computed from one raw series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fence {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fence {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outlier {
    pub index: usize,
    pub value: f64,
}

/// Outcome of the filter and normalize stages for one parameter.
///
/// `normalized` keeps the raw series length; entries removed by the outlier
/// filter are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterScore {
    pub parameter: Parameter,
    pub fence: Fence,
    pub outliers: Vec<Outlier>,
    pub normalized: Vec<Option<Score>>,
    pub degenerate: bool,
}

impl ParameterScore {
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn retained(&self) -> usize {
        self.normalized.iter().filter(|value| value.is_some()).count()
    }

    /// Normalized values with removed entries dropped.
    pub fn compacted(&self) -> Vec<Score> {
        self.normalized.iter().flatten().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverScore {
    pub observation: usize,
    pub score: Score,
    pub missing: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    WeightSum { sum: f64 },
    DegenerateRange { parameter: Parameter, fill: f64 },
    SeriesTruncated { from: usize, to: usize },
    ObservationsDropped { observations: Vec<usize> },
    UnweightedSeries { parameter: Parameter },
}

impl Warning {
    pub fn message(&self) -> String {
        match self {
            Warning::WeightSum { sum } => {
                format!("weights sum to {sum:.3}, not 1.0; scores are rescaled accordingly")
            }
            Warning::DegenerateRange { parameter, fill } => {
                format!("{parameter}: all retained values are equal; normalized to {fill}")
            }
            Warning::SeriesTruncated { from, to } => {
                format!("filtered series differ in length; truncated from {from} to {to} positions")
            }
            Warning::ObservationsDropped { observations } => format!(
                "observations dropped from aggregation: {}",
                observations
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Warning::UnweightedSeries { parameter } => {
                format!("{parameter}: series has no weight and is ignored")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub alignment: AlignmentPolicy,
    pub total_weight: f64,
    pub scores: Vec<DriverScore>,
    pub parameters: Vec<ParameterScore>,
    pub warnings: Vec<Warning>,
}

impl ScoreReport {
    pub fn score_values(&self) -> Vec<Score> {
        self.scores.iter().map(|driver| driver.score).collect()
    }

    pub fn parameter(&self, parameter: Parameter) -> Option<&ParameterScore> {
        self.parameters
            .iter()
            .find(|candidate| candidate.parameter == parameter)
    }
}
