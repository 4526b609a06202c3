use crate::types::report::{Fence, Outlier};

pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Values kept by the fence, with removed positions left as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSeries {
    pub fence: Fence,
    pub retained: Vec<Option<f64>>,
    pub outliers: Vec<Outlier>,
}

/// Percentile with linear interpolation between order statistics.
/// `p` is a fraction in [0, 1]; returns `None` for an empty input.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let lo = sorted[idx];
    if frac == 0.0 {
        return Some(lo);
    }
    let hi = sorted[(idx + 1).min(sorted.len() - 1)];
    Some(lo * (1.0 - frac) + hi * frac)
}

pub fn tukey_fence(values: &[f64], multiplier: f64) -> Option<Fence> {
    let q1 = percentile(values, 0.25)?;
    let q3 = percentile(values, 0.75)?;
    let iqr = q3 - q1;
    // iqr may overflow to infinity; 0 * inf would poison both bounds.
    let reach = if multiplier == 0.0 { 0.0 } else { multiplier * iqr };
    Some(Fence {
        q1,
        q3,
        iqr,
        lower: q1 - reach,
        upper: q3 + reach,
    })
}

pub fn filter_outliers(values: &[f64], multiplier: f64) -> Option<FilteredSeries> {
    let fence = tukey_fence(values, multiplier)?;
    let mut retained = Vec::with_capacity(values.len());
    let mut outliers = Vec::new();
    for (index, &value) in values.iter().enumerate() {
        if fence.contains(value) {
            retained.push(Some(value));
        } else {
            retained.push(None);
            outliers.push(Outlier { index, value });
        }
    }
    Some(FilteredSeries {
        fence,
        retained,
        outliers,
    })
}

/// Drops values outside the standard 1.5 IQR fence, preserving order.
pub fn remove_outliers(values: &[f64]) -> Vec<f64> {
    filter_outliers(values, TUKEY_MULTIPLIER)
        .map(|filtered| filtered.retained.into_iter().flatten().collect())
        .unwrap_or_default()
}
