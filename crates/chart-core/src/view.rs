// File: crates/chart-core/src/view.rs
// Summary: Pointer tracking state owned by a mounted chart.

use crate::geometry::{Point, Rect};

/// Last known pointer position, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// No movement seen since mount.
    #[default]
    OffSurface,
    At(Point),
}

impl PointerState {
    /// Pointer position relative to `surface`'s top-left corner, if known.
    pub fn local_to(&self, surface: &Rect) -> Option<Point> {
        match self {
            Self::OffSurface => None,
            Self::At(p) => Some(p.relative_to(surface.origin())),
        }
    }
}
