// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 300.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 150.0;

/// Pixel size of a surface or of the plot area inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Space reserved around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Paddings {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Paddings {
    /// Total horizontal padding (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical padding (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

/// Font sizes (px) used by the chart's text passes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: f64,
    pub label: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 18.0, label: 12.0 }
    }
}
