// File: crates/chart-render-skia/tests/common/mod.rs
// Purpose: Shared fixtures for the Skia backend tests.

#![allow(dead_code)]

use column_chart_core::{
    Canvas2D, ChartConfig, DataPoint, Glow, Point, Rect, Rgba, Size, SurfaceError, TextMeasure,
    TextStyle,
};
use column_chart_skia::SkiaCanvas;

pub fn two_bar_config() -> ChartConfig {
    ChartConfig::new(
        "Two bars",
        vec![
            DataPoint::value("A", 10.0, Rgba::rgb(0xe7, 0x4c, 0x3c)),
            DataPoint::value("B", 20.0, Rgba::rgb(0x2e, 0xcc, 0x71)),
        ],
    )
    .with_size(200.0, 120.0)
}

/// Skia canvas that skips text and measures with fixed metrics, so pixels do
/// not depend on installed fonts.
pub struct Textless(pub SkiaCanvas);

impl Textless {
    pub fn new(size: Size) -> Self {
        Self(SkiaCanvas::new(size).expect("raster surface"))
    }
}

impl TextMeasure for Textless {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.5
    }
}

impl Canvas2D for Textless {
    fn size(&self) -> Size { self.0.size() }
    fn attach(&mut self) -> Result<(), SurfaceError> { self.0.attach() }
    fn detach(&mut self) { self.0.detach() }
    fn clear(&mut self) { self.0.clear() }
    fn fill_background(&mut self, color: Rgba) { self.0.fill_background(color) }
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) { self.0.draw_line(from, to, color) }
    fn fill_rect(&mut self, rect: Rect, color: Rgba, glow: Option<Glow>) { self.0.fill_rect(rect, color, glow) }
    fn draw_text(&mut self, _text: &str, _at: Point, _style: &TextStyle) {}
    fn bounding_rect(&self) -> Rect { self.0.bounding_rect() }
}

/// RGBA of pixel `(x, y)` in a row-major RGBA8 buffer of `width` pixels.
pub fn pixel(buf: &[u8], width: i32, x: i32, y: i32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}
