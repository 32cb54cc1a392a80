// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing Canvas2D, with PNG and RGBA8 export.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use column_chart_core::{
    Canvas2D, ChartConfig, ColumnChart, Glow, Point, Rect, Rgba, Size, SurfaceError, TextMeasure,
    TextStyle,
};

pub mod text;

pub use text::TextShaper;

/// Stroke width of gridlines.
const LINE_WIDTH: f32 = 1.0;

pub fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

/// Raster surface the chart paints onto. `origin` is where the host placed
/// the surface inside its viewport.
pub struct SkiaCanvas {
    surface: skia::Surface,
    size: Size,
    origin: Point,
    text: TextShaper,
    attached: bool,
}

impl SkiaCanvas {
    pub fn new(size: Size) -> Result<Self, SurfaceError> {
        let (width, height) = (size.width.round() as i32, size.height.round() as i32);
        let create_failed = SurfaceError::CreateFailed { width, height };
        if width <= 0 || height <= 0 {
            return Err(create_failed);
        }
        let surface = skia::surfaces::raster_n32_premul((width, height)).ok_or(create_failed)?;
        log::debug!("created {width}x{height} raster surface");
        Ok(Self { surface, size, origin: Point::default(), text: TextShaper::new(), attached: false })
    }

    /// Place the surface at `origin` in viewport coordinates.
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: Point) { self.origin = origin; }

    pub fn is_attached(&self) -> bool { self.attached }

    pub fn pixel_width(&self) -> i32 { self.surface.width() }
    pub fn pixel_height(&self) -> i32 { self.surface.height() }

    /// Depth of the Skia save stack; 1 when no save is outstanding.
    pub fn save_count(&mut self) -> usize {
        self.surface.canvas().save_count()
    }

    /// Run `paint` between a save and a restore so no state outlives it.
    fn scoped(&mut self, paint: impl FnOnce(&skia::Canvas, &TextShaper)) {
        let Self { surface, text, .. } = self;
        let canvas = surface.canvas();
        let count = canvas.save();
        paint(canvas, text);
        canvas.restore_to_count(count);
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::EncodeFailed)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut buf = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut buf, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} surface pixels failed");
        }
        Ok(buf)
    }
}

impl TextMeasure for SkiaCanvas {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        self.text.measure_width(text, font_size as f32) as f64
    }
}

impl Canvas2D for SkiaCanvas {
    fn size(&self) -> Size { self.size }

    fn attach(&mut self) -> Result<(), SurfaceError> {
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) { self.attached = false; }

    fn clear(&mut self) {
        self.scoped(|canvas, _| {
            canvas.clear(skia::Color::TRANSPARENT);
        });
    }

    fn fill_background(&mut self, color: Rgba) {
        let bounds = skia::Rect::from_wh(self.size.width as f32, self.size.height as f32);
        self.scoped(|canvas, _| {
            let mut paint = skia::Paint::default();
            paint.set_color(to_color(color));
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_rect(bounds, &paint);
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.scoped(|canvas, _| {
            let mut paint = skia::Paint::default();
            paint.set_color(to_color(color));
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(LINE_WIDTH);
            canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, glow: Option<Glow>) {
        let r = to_rect(rect);
        self.scoped(|canvas, _| {
            if let Some(glow) = glow {
                let mut halo = skia::Paint::default();
                halo.set_anti_alias(true);
                halo.set_color(to_color(glow.color));
                // Blur radius to Gaussian sigma.
                let sigma = (glow.blur / 2.0).max(0.0) as f32;
                halo.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, sigma, None));
                canvas.draw_rect(r, &halo);
            }
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(to_color(color));
            canvas.draw_rect(r, &paint);
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let style = *style;
        self.scoped(|canvas, shaper| {
            shaper.draw(
                canvas,
                text,
                at.x as f32,
                at.y as f32,
                style.font_size as f32,
                to_color(style.color),
                style.align,
                style.baseline,
            );
        });
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_xywh(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }
}

/// Render `config` once on a fresh raster surface and return PNG bytes.
pub fn render_png(config: ChartConfig) -> Result<Vec<u8>> {
    let canvas = SkiaCanvas::new(config.size)?;
    let mut chart = ColumnChart::new(config, canvas).context("building chart")?;
    chart.draw();
    chart.canvas_mut().png_bytes()
}
