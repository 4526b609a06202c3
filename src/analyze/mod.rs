pub mod aggregate;
pub mod normalize;
pub mod outliers;
pub mod parameter;

use crate::error::{Result, ScoreError};
use crate::types::config::PipelineConfig;
use crate::types::dataset::Dataset;
use crate::types::report::{ScoreReport, Warning};

/// Runs outlier removal, normalization and weighted aggregation over every
/// weighted parameter of `dataset`.
pub fn analyze(dataset: &Dataset, config: &PipelineConfig) -> Result<ScoreReport> {
    let weights = &dataset.weights;
    if weights.is_empty() {
        return Err(ScoreError::NoParameters);
    }

    let mut warnings = Vec::new();
    let total_weight = weights.sum();
    if !weights.sums_to_one(config.weight_tolerance) {
        warnings.push(Warning::WeightSum { sum: total_weight });
    }
    for &parameter in dataset.series.keys() {
        if weights.get(parameter).is_none() {
            warnings.push(Warning::UnweightedSeries { parameter });
        }
    }

    let mut inputs = Vec::with_capacity(weights.len());
    for parameter in weights.parameters() {
        let series = dataset
            .series
            .get(&parameter)
            .ok_or(ScoreError::MissingSeries { parameter })?;
        inputs.push((parameter, series.as_slice()));
    }

    if config.alignment.preserves_indices() {
        let expected = inputs[0].1.len();
        if let Some(&(parameter, series)) = inputs.iter().find(|(_, series)| series.len() != expected)
        {
            return Err(ScoreError::LengthMismatch {
                parameter,
                expected,
                found: series.len(),
            });
        }
    }

    let mut parameters = Vec::with_capacity(inputs.len());
    for (parameter, series) in inputs {
        let score = parameter::score_parameter(parameter, series, config)?;
        if score.degenerate {
            warnings.push(Warning::DegenerateRange {
                parameter,
                fill: config.degenerate_fill,
            });
        }
        parameters.push(score);
    }

    let aggregation = aggregate::aggregate(&parameters, weights, config.alignment)?;
    warnings.extend(aggregation.warnings);

    for warning in &warnings {
        tracing::warn!("{}", warning.message());
    }
    tracing::info!(
        alignment = %config.alignment,
        parameters = parameters.len(),
        scores = aggregation.scores.len(),
        "driver scores computed"
    );

    Ok(ScoreReport {
        alignment: config.alignment,
        total_weight,
        scores: aggregation.scores,
        parameters,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::AlignmentPolicy;
    use crate::types::parameter::Parameter;
    use crate::types::scoring::Weights;
    use std::collections::BTreeMap;

    fn config(alignment: AlignmentPolicy) -> PipelineConfig {
        PipelineConfig {
            alignment,
            ..PipelineConfig::default()
        }
    }

    fn assert_scores(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "scores: {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {e}, got {a}");
        }
    }

    #[test]
    fn sample_under_truncate_reproduces_positional_zip() {
        let report = analyze(&Dataset::sample(), &config(AlignmentPolicy::Truncate))
            .expect("sample should score");
        assert_scores(
            &report.score_values(),
            &[68.44444444444444, 8.0, 34.095238095238095, 72.85714285714286],
        );
        assert!(report
            .warnings
            .contains(&Warning::SeriesTruncated { from: 5, to: 4 }));
    }

    #[test]
    fn sample_under_renormalize_keeps_every_observation() {
        let report = analyze(&Dataset::sample(), &PipelineConfig::default())
            .expect("sample should score");
        assert_scores(
            &report.score_values(),
            &[68.44444444444444, 8.0, 34.095238095238095, 87.5, 26.19047619047619],
        );
        assert_eq!(report.scores[3].missing, vec![Parameter::Braking]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn sample_under_drop_observation_skips_braking_outlier() {
        let report = analyze(&Dataset::sample(), &config(AlignmentPolicy::DropObservation))
            .expect("sample should score");
        let observations = report
            .scores
            .iter()
            .map(|driver| driver.observation)
            .collect::<Vec<_>>();
        assert_eq!(observations, vec![0, 1, 2, 4]);
    }

    #[test]
    fn report_exposes_intermediate_stages() {
        let report = analyze(&Dataset::sample(), &PipelineConfig::default())
            .expect("sample should score");
        assert_eq!(report.parameters.len(), 6);
        let braking = report
            .parameter(Parameter::Braking)
            .expect("braking should be scored");
        assert_eq!(braking.outliers.len(), 1);
        assert_eq!(braking.outliers[0].index, 3);
        assert_eq!(braking.normalized[3], None);
        assert_eq!(braking.fence.upper, 2.4);
    }

    #[test]
    fn flags_weights_that_do_not_sum_to_one() {
        let mut dataset = Dataset::sample();
        dataset.weights = Weights::new(BTreeMap::from([
            (Parameter::Speed, 0.5),
            (Parameter::TurnSignal, 0.3),
        ]))
        .expect("weights should build");
        let report = analyze(&dataset, &PipelineConfig::default()).expect("sample should score");
        assert!(report
            .warnings
            .iter()
            .any(|warning| matches!(warning, Warning::WeightSum { sum } if (sum - 0.8).abs() < 1e-9)));
        assert!(report.warnings.contains(&Warning::UnweightedSeries {
            parameter: Parameter::Braking
        }));
        assert!(report
            .scores
            .iter()
            .all(|driver| driver.score <= 100.0 * 0.8 + 1e-9));
    }

    #[test]
    fn flags_degenerate_parameter() {
        let dataset = Dataset::new(
            BTreeMap::from([
                (Parameter::Speed, vec![60.0, 45.0, 50.0, 70.0]),
                (Parameter::LaneDiscipline, vec![1.0, 1.0, 1.0, 1.0]),
            ]),
            Weights::new(BTreeMap::from([
                (Parameter::Speed, 0.5),
                (Parameter::LaneDiscipline, 0.5),
            ]))
            .expect("weights should build"),
        );
        let report = analyze(&dataset, &PipelineConfig::default()).expect("dataset should score");
        assert_eq!(
            report.warnings,
            vec![Warning::DegenerateRange {
                parameter: Parameter::LaneDiscipline,
                fill: 50.0
            }]
        );
        assert_eq!(report.scores[1].score, 25.0);
    }

    #[test]
    fn missing_series_fails_with_parameter() {
        let mut dataset = Dataset::sample();
        dataset.series.remove(&Parameter::Tailgating);
        let err = analyze(&dataset, &PipelineConfig::default())
            .expect_err("missing series should fail");
        assert!(matches!(
            err,
            ScoreError::MissingSeries {
                parameter: Parameter::Tailgating
            }
        ));
    }

    #[test]
    fn empty_series_fails_fast() {
        let mut dataset = Dataset::sample();
        dataset.series.insert(Parameter::Acceleration, Vec::new());
        let err = analyze(&dataset, &config(AlignmentPolicy::Truncate))
            .expect_err("empty series should fail");
        assert!(matches!(
            err,
            ScoreError::EmptyInput {
                parameter: Parameter::Acceleration
            }
        ));
    }

    #[test]
    fn unequal_raw_lengths_fail_under_index_preserving_policy() {
        let mut dataset = Dataset::sample();
        dataset
            .series
            .insert(Parameter::TurnSignal, vec![10.0, 12.0, 11.0]);
        let err = analyze(&dataset, &PipelineConfig::default())
            .expect_err("mismatched lengths should fail");
        assert!(matches!(
            err,
            ScoreError::LengthMismatch {
                parameter: Parameter::TurnSignal,
                expected: 5,
                found: 3
            }
        ));

        let report = analyze(&dataset, &config(AlignmentPolicy::Truncate))
            .expect("truncate should accept mismatched lengths");
        assert_eq!(report.scores.len(), 3);
    }

    #[test]
    fn empty_weights_fail() {
        let mut dataset = Dataset::sample();
        dataset.weights = Weights::new(BTreeMap::new()).expect("empty weights should build");
        assert!(matches!(
            analyze(&dataset, &PipelineConfig::default()),
            Err(ScoreError::NoParameters)
        ));
    }
}
