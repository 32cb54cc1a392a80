// File: crates/chart-core/src/config.rs
// Summary: Chart configuration with defaults, builder helpers and fail-fast validation.

use serde::{Deserialize, Serialize};

use crate::data::{shape_mismatch, DataPoint};
use crate::error::{ChartError, Result};
use crate::theme::{ColorOverrides, Theme};
use crate::types::{FontSizes, Size};

/// Everything needed to build a chart. Only `title` and `data` are required
/// when deserializing; the rest falls back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub colors: ColorOverrides,
    #[serde(default)]
    pub font_sizes: FontSizes,
}

impl ChartConfig {
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            size: Size::default(),
            colors: ColorOverrides::default(),
            font_sizes: FontSizes::default(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_font_sizes(mut self, font_sizes: FontSizes) -> Self {
        self.font_sizes = font_sizes;
        self
    }

    /// Default palette with this config's overrides applied.
    pub fn theme(&self) -> Theme {
        Theme::light().with_overrides(&self.colors)
    }

    /// Reject anything that would produce degenerate or non-finite geometry.
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_valid() {
            return Err(ChartError::InvalidSize { width: self.size.width, height: self.size.height });
        }
        let fonts = self.font_sizes;
        if !(fonts.title.is_finite() && fonts.title > 0.0 && fonts.label.is_finite() && fonts.label > 0.0) {
            return Err(ChartError::InvalidFontSize { title: fonts.title, label: fonts.label });
        }
        if let Some(index) = shape_mismatch(&self.data) {
            return Err(ChartError::MixedDataShapes { index });
        }
        for p in &self.data {
            match p {
                DataPoint::Value { label, value, .. } => {
                    if !value.is_finite() {
                        return Err(ChartError::NonFiniteValue { label: label.clone() });
                    }
                }
                DataPoint::Range { label, min, max, .. } => {
                    if !min.is_finite() || !max.is_finite() {
                        return Err(ChartError::NonFiniteValue { label: label.clone() });
                    }
                    if min > max {
                        return Err(ChartError::InvertedRange { label: label.clone(), min: *min, max: *max });
                    }
                }
            }
        }
        Ok(())
    }
}
