// File: crates/chart-core/src/host.rs
// Summary: Host event-source capability: viewport pointer subscription and frame scheduling.

use crate::error::SurfaceError;
use crate::geometry::Point;

/// Pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Handle returned by [`Host::subscribe_pointer_moves`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The environment a chart is mounted into.
///
/// After subscribing, the host delivers viewport-wide pointer moves through
/// `ColumnChart::pointer_moved`. After `request_frame` it calls
/// `ColumnChart::frame` once, before its next repaint.
pub trait Host {
    fn subscribe_pointer_moves(&mut self) -> Result<SubscriptionId, SurfaceError>;
    fn unsubscribe_pointer_moves(&mut self, id: SubscriptionId);
    fn request_frame(&mut self);
}

/// Host without an event source, for offscreen rendering. The caller feeds
/// pointer events itself and runs `frame` when `take_frame_request` says so.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    next_id: u64,
    subscribed: Option<SubscriptionId>,
    frame_requested: bool,
}

impl HeadlessHost {
    pub fn new() -> Self { Self::default() }

    pub fn is_subscribed(&self) -> bool { self.subscribed.is_some() }

    /// Whether a frame was requested since the last call.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }
}

impl Host for HeadlessHost {
    fn subscribe_pointer_moves(&mut self) -> Result<SubscriptionId, SurfaceError> {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribed = Some(id);
        Ok(id)
    }

    fn unsubscribe_pointer_moves(&mut self, id: SubscriptionId) {
        if self.subscribed == Some(id) {
            self.subscribed = None;
        }
    }

    fn request_frame(&mut self) { self.frame_requested = true; }
}
