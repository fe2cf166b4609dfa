//! Min-max scaling of the clustering features.

use housing_ingest::HousingProperty;
use ndarray::Array2;

/// Number of features per entry: `TotalUnits` then `ActiveSubs`.
pub(crate) const FEATURES: usize = 2;

/// Per-feature minimum and range used to scale into `[0, 1]`.
///
/// A feature whose values are all equal has a range of zero and is left
/// unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FeatureScale {
    pub(crate) mins: [f64; FEATURES],
    pub(crate) ranges: [f64; FEATURES],
}

impl FeatureScale {
    /// Map a scaled point back to `(TotalUnits, ActiveSubs)`.
    pub(crate) fn denormalize(&self, scaled: [f64; FEATURES]) -> [f64; FEATURES] {
        let mut raw = scaled;
        for (col, value) in raw.iter_mut().enumerate() {
            if self.ranges[col] > 0.0 {
                *value = *value * self.ranges[col] + self.mins[col];
            }
        }
        raw
    }
}

/// Build the feature matrix and scale each column in place.
pub(crate) fn scaled_features(properties: &[HousingProperty]) -> (Array2<f64>, FeatureScale) {
    let mut data = Array2::<f64>::zeros((properties.len(), FEATURES));
    for (row, property) in properties.iter().enumerate() {
        data[[row, 0]] = f64::from(property.total_units);
        data[[row, 1]] = f64::from(property.active_subs);
    }

    let mut scale = FeatureScale {
        mins: [0.0; FEATURES],
        ranges: [0.0; FEATURES],
    };
    for col in 0..FEATURES {
        let mut column = data.column_mut(col);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        scale.mins[col] = min;
        scale.ranges[col] = range;
        if range > 0.0 {
            column.mapv_inplace(|value| (value - min) / range);
        }
    }
    (data, scale)
}
