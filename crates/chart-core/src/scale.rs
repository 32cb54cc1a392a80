// File: crates/chart-core/src/scale.rs
// Summary: Linear value (Y) scale shared by every bar of a chart.

/// Value Y coordinate (a data value).
pub type Value = f64;

/// Spans narrower than this are treated as degenerate.
const MIN_SPAN: f64 = 1e-12;

/// Vertical value scale mapping the global data range to [top, bottom] pixels.
/// Screen Y grows downward, so `vmax` lands on `top_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    /// Build a scale over `[vmin, vmax]`. A zero-width range is widened to
    /// `[vmin, vmin + 1]` so pixel math never divides by zero.
    pub fn new(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < MIN_SPAN {
            log::debug!("degenerate value range [{vmin}, {vmax}]; widening by 1");
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn span(&self) -> f64 { self.vmax - self.vmin }

    #[inline]
    pub fn height_px(&self) -> f64 { self.bottom_px - self.top_px }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        (self.vmax - y) / self.span() * self.height_px() + self.top_px
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        self.vmax - (py - self.top_px) / self.height_px() * self.span()
    }

    /// Pixel length of the value interval `[lo, hi]`.
    #[inline]
    pub fn length_px(&self, lo: Value, hi: Value) -> f64 {
        (hi - lo) / self.span() * self.height_px()
    }
}
