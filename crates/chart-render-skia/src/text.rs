// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and paints single-line labels with alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use column_chart_core::{TextAlign, TextBaseline};

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` so that `(x, y)` is its anchor under `align` and `baseline`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let p = self.layout(text, size, color);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Start => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::End => x - width,
        };
        // Paragraph paints from its top-left corner.
        let top = match baseline {
            TextBaseline::Baseline => y - p.alphabetic_baseline(),
            TextBaseline::Middle => y - p.height() / 2.0,
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
