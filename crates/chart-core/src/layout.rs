// File: crates/chart-core/src/layout.rs
// Summary: Chart layout: paddings, plot area, value-axis ticks and per-bar pixel geometry.
// Notes:
// - Top/bottom paddings depend only on the surface height, so the plot height,
//   the tick count and every tick label are known before the left padding.
//   The left padding is then sized from the measured labels; no iteration.

use crate::axis::{value_ticks, ValueTick};
use crate::canvas::TextMeasure;
use crate::data::{value_range, NormalizedPoint};
use crate::geometry::{Point, Rect};
use crate::grid::{linspace, value_line_intervals};
use crate::scale::ValueScale;
use crate::types::{FontSizes, Paddings, Size};

/// Title band, as a fraction of the surface height.
pub const TOP_PADDING_RATIO: f64 = 0.2;
/// Category label band, as a fraction of the surface height.
pub const BOTTOM_PADDING_RATIO: f64 = 0.07;
/// Outer side margin, as a fraction of the surface width.
pub const SIDE_PADDING_RATIO: f64 = 0.01;
/// Value label band width relative to the widest label.
pub const LABEL_BAND_RATIO: f64 = 1.2;
/// Total horizontal gap per bar, as a fraction of the plot width.
pub const BAR_GAP_RATIO: f64 = 0.02;
/// Category gridlines overshoot the plot area by this many pixels.
pub const GRID_OVERRUN: f64 = 5.0;
/// Height of the hairline drawn for a point whose min equals its max.
pub const MIN_BAR_HEIGHT: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub paddings: Paddings,
    /// Plot area: `size` minus `paddings`.
    pub chart_size: Size,
    /// Widest value-axis label, in pixels.
    pub label_width: f64,
    /// Shared value scale; `None` without data.
    pub scale: Option<ValueScale>,
    pub value_ticks: Vec<ValueTick>,
    pub point_count: usize,
}

/// Compute the layout of `points` on a surface of `size`.
pub fn compute_layout<M: TextMeasure + ?Sized>(
    size: Size,
    points: &[NormalizedPoint],
    fonts: &FontSizes,
    measure: &M,
) -> Layout {
    let top = size.height * TOP_PADDING_RATIO;
    let bottom = size.height * BOTTOM_PADDING_RATIO;
    let plot_height = size.height - top - bottom;

    let scale = value_range(points).map(|(lo, hi)| ValueScale::new(top, top + plot_height, lo, hi));
    let ticks = scale
        .map(|s| value_ticks(&s, value_line_intervals(plot_height)))
        .unwrap_or_default();
    let label_width = ticks
        .iter()
        .map(|t| measure.measure_text(&t.text, fonts.label))
        .fold(0.0, f64::max);

    let paddings = Paddings {
        top,
        bottom,
        left: size.width * SIDE_PADDING_RATIO + label_width * LABEL_BAND_RATIO,
        right: size.width * SIDE_PADDING_RATIO,
    };
    let chart_size = Size::new(size.width - paddings.hsum(), plot_height);
    if chart_size.width <= 0.0 {
        log::warn!(
            "value labels ({label_width:.1}px) leave no room for bars on a {}px wide surface",
            size.width
        );
    }
    log::trace!(
        "layout: paddings={paddings:?} plot={}x{} ticks={}",
        chart_size.width,
        chart_size.height,
        ticks.len()
    );

    Layout {
        size,
        paddings,
        chart_size,
        label_width,
        scale,
        value_ticks: ticks,
        point_count: points.len(),
    }
}

impl Layout {
    pub fn plot_rect(&self) -> Rect {
        Rect::from_xywh(self.paddings.left, self.paddings.top, self.chart_size.width, self.chart_size.height)
    }

    /// Horizontal room given to one category (bar plus its gap).
    pub fn slot_width(&self) -> f64 {
        if self.point_count == 0 { return 0.0; }
        self.chart_size.width / self.point_count as f64
    }

    pub fn bar_gap(&self) -> f64 {
        self.chart_size.width * BAR_GAP_RATIO
    }

    /// Geometry of the bar for `point` at `index`; `None` without data.
    pub fn bar_rect(&self, index: usize, point: &NormalizedPoint) -> Option<Rect> {
        let scale = self.scale.as_ref()?;
        let slot = self.slot_width();
        let gap = self.bar_gap();
        let x = slot * index as f64 + gap / 2.0 + self.paddings.left;
        if point.max == point.min {
            // Empty range: hairline on the side of the baseline matching its sign.
            let at = scale.to_px(point.min);
            let y = if point.min < 0.0 { at } else { at - MIN_BAR_HEIGHT };
            return Some(Rect::from_xywh(x, y, slot - gap, MIN_BAR_HEIGHT));
        }
        let y = scale.to_px(point.max);
        let height = scale.length_px(point.min, point.max);
        Some(Rect::from_xywh(x, y, slot - gap, height))
    }

    pub fn bars(&self, points: &[NormalizedPoint]) -> Vec<Rect> {
        points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| self.bar_rect(i, p))
            .collect()
    }

    /// One vertical line per category plus a trailing one; empty without data.
    pub fn category_lines(&self) -> Vec<(Point, Point)> {
        if self.point_count == 0 { return Vec::new(); }
        let top = self.paddings.top - GRID_OVERRUN;
        let bottom = self.chart_size.height + self.paddings.top + GRID_OVERRUN;
        let left = self.paddings.left;
        linspace(left, left + self.chart_size.width, self.point_count + 1)
            .into_iter()
            .map(|x| (Point::new(x, top), Point::new(x, bottom)))
            .collect()
    }

    pub fn value_line(&self, tick: &ValueTick) -> (Point, Point) {
        let left = self.paddings.left;
        (Point::new(left, tick.y), Point::new(left + self.chart_size.width, tick.y))
    }

    /// End-aligned anchor for a value label, just left of the plot area.
    pub fn value_label_anchor(&self, tick: &ValueTick) -> Point {
        Point::new(self.paddings.left - self.label_width * 0.1, tick.y)
    }

    /// Centered anchor for the label under category `index`.
    pub fn category_label_anchor(&self, index: usize) -> Point {
        let x = self.paddings.left + self.slot_width() * (index as f64 + 0.5);
        let y = self.paddings.top + self.chart_size.height + self.paddings.bottom / 2.0;
        Point::new(x, y)
    }

    /// Baseline anchor for the title, centered in the top band.
    pub fn title_anchor(&self, title_font_size: f64) -> Point {
        let band_margin = (self.paddings.top - title_font_size) / 2.0;
        Point::new(self.size.width / 2.0, title_font_size + band_margin)
    }
}
