// File: crates/chart-core/src/canvas.rs
// Summary: Drawing-surface capability consumed by the chart (paint primitives + text metrics).
// Notes:
// - Every primitive receives the full paint state it needs. Implementations
//   must scope their backend state (save/restore) so nothing carries over
//   from one call to the next.

use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};
use crate::theme::Rgba;
use crate::types::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline sits on `y`.
    #[default]
    Baseline,
    /// Vertical middle of the text sits on `y`.
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Emphasis drawn around a filled rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    /// Blur radius in pixels.
    pub blur: f64,
}

/// Measurement interface so layout can compute text bounds without painting.
pub trait TextMeasure {
    /// Pixel width `text` occupies at `font_size`.
    fn measure_text(&self, text: &str, font_size: f64) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        (*self).measure_text(text, font_size)
    }
}

/// Fixed-size paintable surface.
pub trait Canvas2D: TextMeasure {
    fn size(&self) -> Size;

    /// Place the surface into its host container.
    fn attach(&mut self) -> Result<(), SurfaceError>;
    /// Remove the surface from its host container.
    fn detach(&mut self);

    fn clear(&mut self);
    fn fill_background(&mut self, color: Rgba);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba, glow: Option<Glow>);
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);

    /// On-screen rectangle of the surface in viewport coordinates.
    fn bounding_rect(&self) -> Rect;
}
