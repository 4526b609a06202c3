use crate::analyze::normalize::normalize_marked;
use crate::analyze::outliers::filter_outliers;
use crate::error::{Result, ScoreError};
use crate::types::config::PipelineConfig;
use crate::types::parameter::Parameter;
use crate::types::report::ParameterScore;

/// Filters and normalizes one parameter's raw series.
pub fn score_parameter(
    parameter: Parameter,
    series: &[f64],
    config: &PipelineConfig,
) -> Result<ParameterScore> {
    if series.is_empty() {
        return Err(ScoreError::EmptyInput { parameter });
    }
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(ScoreError::NonFiniteValue { parameter, index });
    }

    let filtered = filter_outliers(series, config.fence_multiplier)
        .ok_or(ScoreError::EmptyInput { parameter })?;
    tracing::debug!(
        %parameter,
        lower = filtered.fence.lower,
        upper = filtered.fence.upper,
        outliers = filtered.outliers.len(),
        "outlier fence applied"
    );

    let (normalized, range) = normalize_marked(&filtered.retained, config.degenerate_fill);
    let range = range.ok_or(ScoreError::AllOutliersRemoved { parameter })?;

    Ok(ParameterScore {
        parameter,
        fence: filtered.fence,
        outliers: filtered.outliers,
        normalized,
        degenerate: range.is_degenerate(),
    })
}
