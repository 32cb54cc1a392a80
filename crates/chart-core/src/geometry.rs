// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and pointer hit testing.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate into the coordinate space whose origin sits at `origin`.
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn origin(&self) -> Point { Point::new(self.x, self.y) }

    /// Inclusive containment; edges and corners count as inside.
    pub fn contains(&self, p: Point) -> bool {
        is_over_rect(p.x, p.y, self.x, self.y, self.width, self.height)
    }
}

/// Inclusive-boundary test of a point against a rectangle. Both must be in
/// the same coordinate space; translating viewport coordinates is up to the caller.
#[inline]
pub fn is_over_rect(x: f64, y: f64, rect_x: f64, rect_y: f64, rect_width: f64, rect_height: f64) -> bool {
    let over_x = rect_x <= x && x <= rect_x + rect_width;
    let over_y = rect_y <= y && y <= rect_y + rect_height;
    over_x && over_y
}
