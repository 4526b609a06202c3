use crate::analyze::normalize::DEFAULT_DEGENERATE_FILL;
use crate::analyze::outliers::TUKEY_MULTIPLIER;
use crate::error::{Result, ScoreError};
use crate::types::dataset::Dataset;
use crate::types::parameter::Parameter;
use crate::types::scoring::Weights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How filtered series are matched up by observation before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Compact each filtered series and zip positionally up to the shortest.
    Truncate,
    /// Keep observation identity; rescale weights over the parameters present.
    #[default]
    Renormalize,
    /// Keep observation identity; skip observations missing any weighted parameter.
    DropObservation,
}

impl AlignmentPolicy {
    pub fn preserves_indices(self) -> bool {
        !matches!(self, AlignmentPolicy::Truncate)
    }
}

impl fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlignmentPolicy::Truncate => "truncate",
            AlignmentPolicy::Renormalize => "renormalize",
            AlignmentPolicy::DropObservation => "drop_observation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub alignment: AlignmentPolicy,
    pub fence_multiplier: f64,
    pub degenerate_fill: f64,
    pub weight_tolerance: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::Renormalize,
            fence_multiplier: TUKEY_MULTIPLIER,
            degenerate_fill: DEFAULT_DEGENERATE_FILL,
            weight_tolerance: 0.001,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fence_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degenerate_fill: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<PipelineSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<BTreeMap<String, Vec<f64>>>,
}

impl ScoringConfig {
    pub fn from_dataset(dataset: &Dataset, pipeline: &PipelineConfig) -> Self {
        Self {
            pipeline: Some(PipelineSection {
                alignment: Some(pipeline.alignment),
                fence_multiplier: Some(pipeline.fence_multiplier),
                degenerate_fill: Some(pipeline.degenerate_fill),
                weight_tolerance: Some(pipeline.weight_tolerance),
            }),
            weights: Some(
                dataset
                    .weights
                    .iter()
                    .map(|(parameter, weight)| (parameter.to_string(), weight))
                    .collect(),
            ),
            series: Some(
                dataset
                    .series
                    .iter()
                    .map(|(parameter, values)| (parameter.to_string(), values.clone()))
                    .collect(),
            ),
        }
    }

    pub fn pipeline(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        match &self.pipeline {
            Some(pipeline) => PipelineConfig {
                alignment: pipeline.alignment.unwrap_or(defaults.alignment),
                fence_multiplier: pipeline
                    .fence_multiplier
                    .unwrap_or(defaults.fence_multiplier),
                degenerate_fill: pipeline.degenerate_fill.unwrap_or(defaults.degenerate_fill),
                weight_tolerance: pipeline
                    .weight_tolerance
                    .unwrap_or(defaults.weight_tolerance),
            },
            None => defaults,
        }
    }

    pub fn weights(&self) -> Result<Weights> {
        match &self.weights {
            Some(weights) => Weights::new(parse_keys("weights", weights)?),
            None => Ok(Weights::default()),
        }
    }

    /// Configured series, or the built-in sample series when none are given.
    pub fn dataset(&self) -> Result<Dataset> {
        let weights = self.weights()?;
        let series = match &self.series {
            Some(series) => parse_keys("series", series)?,
            None => Dataset::sample_series(),
        };
        Ok(Dataset::new(series, weights))
    }

    pub fn validate(&self) -> Result<()> {
        let pipeline = self.pipeline();
        if !pipeline.fence_multiplier.is_finite() || pipeline.fence_multiplier < 0.0 {
            return Err(ScoreError::ConfigParse(
                "pipeline.fence_multiplier must be finite and non-negative".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&pipeline.degenerate_fill) {
            return Err(ScoreError::ConfigParse(
                "pipeline.degenerate_fill must be between 0.0 and 100.0".to_string(),
            ));
        }
        if !pipeline.weight_tolerance.is_finite() || pipeline.weight_tolerance < 0.0 {
            return Err(ScoreError::ConfigParse(
                "pipeline.weight_tolerance must be finite and non-negative".to_string(),
            ));
        }

        let dataset = self.dataset()?;
        if dataset.weights.is_empty() {
            return Err(ScoreError::ConfigParse(
                "weights must name at least one parameter".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_keys<V: Clone>(
    table: &str,
    entries: &BTreeMap<String, V>,
) -> Result<BTreeMap<Parameter, V>> {
    let mut parsed = BTreeMap::new();
    let mut unknown = Vec::new();
    for (key, value) in entries {
        match key.parse::<Parameter>() {
            Ok(parameter) => {
                parsed.insert(parameter, value.clone());
            }
            Err(_) => unknown.push(key.clone()),
        }
    }
    if !unknown.is_empty() {
        return Err(ScoreError::ConfigParse(format!(
            "{table} contains unknown key(s): {}",
            unknown.join(", ")
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ScoringConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.pipeline(), PipelineConfig::default());
        assert_eq!(cfg.weights().expect("weights should resolve"), Weights::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[pipeline]
alignment = "drop_observation"
fence_multiplier = 3
degenerate_fill = 100.0

[weights]
speed = 0.5
cornering = 0.5

[series]
speed = [60, 45, 50.5]
cornering = [20, 15, 12]
"#;
        let cfg: ScoringConfig = toml::from_str(toml_str).expect("full config should parse");
        let pipeline = cfg.pipeline();
        assert_eq!(pipeline.alignment, AlignmentPolicy::DropObservation);
        assert_eq!(pipeline.fence_multiplier, 3.0);
        assert_eq!(pipeline.degenerate_fill, 100.0);
        assert_eq!(pipeline.weight_tolerance, 0.001);

        let dataset = cfg.dataset().expect("dataset should resolve");
        assert_eq!(dataset.weights.get(Parameter::Cornering), Some(0.5));
        assert_eq!(dataset.series[&Parameter::Speed], vec![60.0, 45.0, 50.5]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_series_fall_back_to_sample() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
speed = 1.0
"#,
        )
        .expect("config should parse");
        let dataset = cfg.dataset().expect("dataset should resolve");
        assert_eq!(dataset.series, Dataset::sample_series());
        assert_eq!(dataset.weights.len(), 1);
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
speed = 0.5
steering = 0.5
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weights contains unknown key(s): steering"));
    }

    #[test]
    fn validate_rejects_unknown_series_keys() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[series]
horn = [1, 2, 3]
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("series contains unknown key(s): horn"));
    }

    #[test]
    fn validate_rejects_negative_fence_multiplier() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[pipeline]
fence_multiplier = -1.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("pipeline.fence_multiplier"));
    }

    #[test]
    fn validate_rejects_fill_outside_scale() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[pipeline]
degenerate_fill = 120.0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("pipeline.degenerate_fill"));
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[weights]
braking = -0.2
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(matches!(err, ScoreError::InvalidWeight { .. }));
    }

    #[test]
    fn validate_rejects_empty_weights_table() {
        let cfg: ScoringConfig = toml::from_str("[weights]\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("at least one parameter"));
    }

    #[test]
    fn rejects_unknown_alignment_policy() {
        let result = toml::from_str::<ScoringConfig>(
            r#"
[pipeline]
alignment = "interpolate"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_dataset_round_trips_through_toml() {
        let pipeline = PipelineConfig::default();
        let rendered = toml::to_string(&ScoringConfig::from_dataset(&Dataset::sample(), &pipeline))
            .expect("sample should serialize");
        let parsed: ScoringConfig = toml::from_str(&rendered).expect("rendered should parse");
        assert_eq!(parsed.pipeline(), pipeline);
        assert_eq!(
            parsed.dataset().expect("dataset should resolve").series,
            Dataset::sample_series()
        );
    }
}
