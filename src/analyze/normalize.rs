pub const SCALE_MAX: f64 = 100.0;
pub const DEFAULT_DEGENERATE_FILL: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |range, value| match range {
            None => Some(Range {
                min: value,
                max: value,
            }),
            Some(Range { min, max }) => Some(Range {
                min: min.min(value),
                max: max.max(value),
            }),
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Maps `value` onto [0, 100]; a degenerate range maps everything to `fill`.
    /// Works on halves so a span wider than `f64::MAX` stays finite.
    pub fn scale(&self, value: f64, fill: f64) -> f64 {
        if self.is_degenerate() {
            return fill;
        }
        let span = self.max / 2.0 - self.min / 2.0;
        ((value / 2.0 - self.min / 2.0) / span * SCALE_MAX).clamp(0.0, SCALE_MAX)
    }
}

/// Min-max normalization of `values` to [0, 100].
pub fn normalize(values: &[f64], fill: f64) -> Vec<f64> {
    match Range::of(values.iter().copied()) {
        Some(range) => values.iter().map(|&value| range.scale(value, fill)).collect(),
        None => Vec::new(),
    }
}

/// Normalizes the present entries and leaves `None` entries in place.
/// Returns the range of the present entries alongside.
pub fn normalize_marked(values: &[Option<f64>], fill: f64) -> (Vec<Option<f64>>, Option<Range>) {
    let range = Range::of(values.iter().flatten().copied());
    let normalized = match range {
        Some(range) => values
            .iter()
            .map(|value| value.map(|value| range.scale(value, fill)))
            .collect(),
        None => vec![None; values.len()],
    };
    (normalized, range)
}
