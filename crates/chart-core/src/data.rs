// File: crates/chart-core/src/data.rs
// Summary: Raw data points (value or min/max form) and their normalization to ranges.

use serde::{Deserialize, Serialize};

use crate::theme::Rgba;

/// A data point as supplied by the caller.
///
/// JSON objects carrying both `min` and `max` read as [`DataPoint::Range`];
/// objects with a single `value` read as [`DataPoint::Value`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Range { label: String, min: f64, max: f64, color: Rgba },
    Value { label: String, value: f64, color: Rgba },
}

impl DataPoint {
    pub fn value(label: impl Into<String>, value: f64, color: Rgba) -> Self {
        Self::Value { label: label.into(), value, color }
    }

    pub fn range(label: impl Into<String>, min: f64, max: f64, color: Rgba) -> Self {
        Self::Range { label: label.into(), min, max, color }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Range { label, .. } | Self::Value { label, .. } => label,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

/// A data point expressed as the value interval its bar covers.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub color: Rgba,
}

impl From<DataPoint> for NormalizedPoint {
    fn from(p: DataPoint) -> Self {
        match p {
            DataPoint::Range { label, min, max, color } => Self { label, min, max, color },
            // Bars span from zero to the value, downward for negatives.
            DataPoint::Value { label, value, color } => Self {
                label,
                min: if value > 0.0 { 0.0 } else { value },
                max: if value <= 0.0 { 0.0 } else { value },
                color,
            },
        }
    }
}

impl From<NormalizedPoint> for DataPoint {
    fn from(p: NormalizedPoint) -> Self {
        DataPoint::Range { label: p.label, min: p.min, max: p.max, color: p.color }
    }
}

/// Convert every point to range form. Range points pass through unchanged.
pub fn normalize(data: &[DataPoint]) -> Vec<NormalizedPoint> {
    data.iter().cloned().map(NormalizedPoint::from).collect()
}

/// Index of the first point whose shape differs from the first point's, if any.
pub fn shape_mismatch(data: &[DataPoint]) -> Option<usize> {
    let first = data.first()?.is_range();
    data.iter().position(|p| p.is_range() != first)
}

/// Global `(min of mins, max of maxes)`; `None` when there are no points.
pub fn value_range(points: &[NormalizedPoint]) -> Option<(f64, f64)> {
    if points.is_empty() { return None; }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in points {
        lo = lo.min(p.min);
        hi = hi.max(p.max);
    }
    Some((lo, hi))
}
