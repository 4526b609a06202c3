use crate::error::{Result, ScoreError};
use crate::types::config::AlignmentPolicy;
use crate::types::report::{DriverScore, ParameterScore, Warning};
use crate::types::scoring::Weights;

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub scores: Vec<DriverScore>,
    pub warnings: Vec<Warning>,
}

/// Combines normalized parameter series into one weighted score per
/// observation, matching entries according to `policy`.
pub fn aggregate(
    parameters: &[ParameterScore],
    weights: &Weights,
    policy: AlignmentPolicy,
) -> Result<Aggregation> {
    if parameters.is_empty() {
        return Err(ScoreError::NoParameters);
    }
    match policy {
        AlignmentPolicy::Truncate => Ok(aggregate_truncated(parameters, weights)),
        AlignmentPolicy::Renormalize | AlignmentPolicy::DropObservation => {
            aggregate_by_observation(parameters, weights, policy)
        }
    }
}

fn weight_of(weights: &Weights, score: &ParameterScore) -> f64 {
    weights.get(score.parameter).unwrap_or(0.0)
}

fn aggregate_truncated(parameters: &[ParameterScore], weights: &Weights) -> Aggregation {
    let compacted = parameters
        .iter()
        .map(|score| (weight_of(weights, score), score.compacted()))
        .collect::<Vec<_>>();
    let shortest = compacted.iter().map(|(_, values)| values.len()).min().unwrap_or(0);
    let longest = compacted.iter().map(|(_, values)| values.len()).max().unwrap_or(0);

    let mut warnings = Vec::new();
    if shortest != longest {
        warnings.push(Warning::SeriesTruncated {
            from: longest,
            to: shortest,
        });
    }

    let scores = (0..shortest)
        .map(|position| DriverScore {
            observation: position,
            score: compacted
                .iter()
                .map(|(weight, values)| weight * values[position])
                .sum(),
            missing: Vec::new(),
        })
        .collect();

    Aggregation { scores, warnings }
}

fn aggregate_by_observation(
    parameters: &[ParameterScore],
    weights: &Weights,
    policy: AlignmentPolicy,
) -> Result<Aggregation> {
    let expected = parameters[0].len();
    if let Some(mismatch) = parameters.iter().find(|score| score.len() != expected) {
        return Err(ScoreError::LengthMismatch {
            parameter: mismatch.parameter,
            expected,
            found: mismatch.len(),
        });
    }

    let total_weight: f64 = parameters.iter().map(|score| weight_of(weights, score)).sum();
    let mut scores = Vec::with_capacity(expected);
    let mut dropped = Vec::new();

    for observation in 0..expected {
        let mut weighted = 0.0;
        let mut present_weight = 0.0;
        let mut missing = Vec::new();
        let mut missing_weighted = false;
        for score in parameters {
            let weight = weight_of(weights, score);
            match score.normalized[observation] {
                Some(value) => {
                    weighted += weight * value;
                    present_weight += weight;
                }
                None => {
                    missing.push(score.parameter);
                    missing_weighted |= weight > 0.0;
                }
            }
        }

        // Gaps in zero-weight parameters never change the score.
        let score = if !missing_weighted {
            Some(weighted)
        } else if policy == AlignmentPolicy::Renormalize && present_weight > 0.0 {
            Some(weighted * total_weight / present_weight)
        } else {
            None
        };

        match score {
            Some(score) => scores.push(DriverScore {
                observation,
                score,
                missing,
            }),
            None => dropped.push(observation),
        }
    }

    let mut warnings = Vec::new();
    if !dropped.is_empty() {
        warnings.push(Warning::ObservationsDropped {
            observations: dropped,
        });
    }

    Ok(Aggregation { scores, warnings })
}
