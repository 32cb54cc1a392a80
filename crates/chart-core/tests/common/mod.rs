// File: crates/chart-core/tests/common/mod.rs
// Purpose: Test doubles: a canvas that records paint calls and a host that records subscriptions.

#![allow(dead_code)]

use column_chart_core::{
    Canvas2D, ChartConfig, DataPoint, Glow, Host, Point, Rect, Rgba, Size, SubscriptionId,
    SurfaceError, TextMeasure, TextStyle,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Background(Rgba),
    Line { from: Point, to: Point, color: Rgba },
    Rect { rect: Rect, color: Rgba, glow: Option<Glow> },
    Text { text: String, at: Point, style: TextStyle },
}

impl Op {
    pub fn kind(&self) -> &'static str {
        match self {
            Op::Clear => "clear",
            Op::Background(_) => "background",
            Op::Line { .. } => "line",
            Op::Rect { .. } => "rect",
            Op::Text { .. } => "text",
        }
    }
}

/// Canvas that records every primitive. Text is measured as half the font
/// size per character so widths are deterministic.
pub struct RecordingCanvas {
    pub size: Size,
    pub origin: Point,
    pub ops: Vec<Op>,
    pub attached: bool,
    pub reject_attach: bool,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            origin: Point::new(0.0, 0.0),
            ops: Vec::new(),
            attached: false,
            reject_attach: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.ops.iter().map(Op::kind).collect()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    pub fn rects(&self) -> Vec<(Rect, Option<Glow>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect { rect, glow, .. } => Some((*rect, *glow)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for RecordingCanvas {
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.5
    }
}

impl Canvas2D for RecordingCanvas {
    fn size(&self) -> Size { self.size }

    fn attach(&mut self) -> Result<(), SurfaceError> {
        if self.reject_attach {
            return Err(SurfaceError::AttachRejected("test host refuses".into()));
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) { self.attached = false; }

    fn clear(&mut self) { self.ops.push(Op::Clear); }

    fn fill_background(&mut self, color: Rgba) { self.ops.push(Op::Background(color)); }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.ops.push(Op::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, glow: Option<Glow>) {
        self.ops.push(Op::Rect { rect, color, glow });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(Op::Text { text: text.to_string(), at, style: *style });
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_xywh(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }
}

#[derive(Default)]
pub struct FakeHost {
    next_id: u64,
    pub active: Vec<SubscriptionId>,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
    pub frame_requests: usize,
    pub reject_subscribe: bool,
}

impl FakeHost {
    /// Host whose pointer subscription always fails.
    pub fn rejecting() -> Self {
        Self { reject_subscribe: true, ..Default::default() }
    }
}

impl Host for FakeHost {
    fn subscribe_pointer_moves(&mut self) -> Result<SubscriptionId, SurfaceError> {
        self.subscribe_calls += 1;
        if self.reject_subscribe {
            return Err(SurfaceError::SubscribeFailed("no event source".into()));
        }
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.active.push(id);
        Ok(id)
    }

    fn unsubscribe_pointer_moves(&mut self, id: SubscriptionId) {
        self.unsubscribe_calls += 1;
        self.active.retain(|s| *s != id);
    }

    fn request_frame(&mut self) { self.frame_requests += 1; }
}

pub const RED: Rgba = Rgba::rgb(0xff, 0, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 0xff, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 0xff);

/// The two-bar chart used across tests: A=10, B=20 on a 500x250 surface.
pub fn two_bar_config() -> ChartConfig {
    ChartConfig::new(
        "Two bars",
        vec![DataPoint::value("A", 10.0, RED), DataPoint::value("B", 20.0, GREEN)],
    )
    .with_size(500.0, 250.0)
}
