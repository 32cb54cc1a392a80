// File: crates/chart-core/src/chart.rs
// Summary: ColumnChart: mount/unmount lifecycle, throttled pointer tracking and the ordered draw pass.

use std::time::Instant;

use crate::canvas::{Canvas2D, Glow, TextAlign, TextBaseline, TextStyle};
use crate::config::ChartConfig;
use crate::data::{normalize, NormalizedPoint};
use crate::error::Result;
use crate::geometry::Point;
use crate::host::{Host, PointerEvent, SubscriptionId};
use crate::layout::{compute_layout, Layout};
use crate::theme::Theme;
use crate::throttle::Throttle;
use crate::types::FontSizes;
use crate::view::PointerState;

/// Blur radius of the glow drawn around the hovered bar.
pub const HOVER_GLOW_BLUR: f64 = 10.0;

struct Mounted {
    subscription: SubscriptionId,
    pointer: PointerState,
    throttle: Throttle,
    frame_pending: bool,
}

enum Lifecycle {
    Unmounted,
    Mounted(Mounted),
}

/// A vertical bar chart painting onto `C`.
///
/// The host drives a mounted chart: it forwards pointer moves to
/// [`ColumnChart::pointer_moved`] and, after a frame request, calls
/// [`ColumnChart::frame`] before its next repaint.
pub struct ColumnChart<C: Canvas2D> {
    title: String,
    points: Vec<NormalizedPoint>,
    theme: Theme,
    fonts: FontSizes,
    layout: Layout,
    canvas: C,
    lifecycle: Lifecycle,
    hovered: Option<usize>,
}

impl<C: Canvas2D> ColumnChart<C> {
    /// Validate `config`, normalize its data and lay it out on `canvas`.
    pub fn new(config: ChartConfig, canvas: C) -> Result<Self> {
        config.validate()?;
        if canvas.size() != config.size {
            log::warn!(
                "canvas is {:?} but chart is configured for {:?}; laying out for the config",
                canvas.size(),
                config.size
            );
        }
        let theme = config.theme();
        let points = normalize(&config.data);
        let layout = compute_layout(config.size, &points, &config.font_sizes, &canvas);
        Ok(Self {
            title: config.title,
            points,
            theme,
            fonts: config.font_sizes,
            layout,
            canvas,
            lifecycle: Lifecycle::Unmounted,
            hovered: None,
        })
    }

    /// Attach the surface, subscribe to pointer moves and paint once.
    /// Mounting an already mounted chart does nothing.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.is_mounted() {
            log::warn!("chart {:?} is already mounted; ignoring mount", self.title);
            return Ok(());
        }
        self.canvas.attach()?;
        let subscription = match host.subscribe_pointer_moves() {
            Ok(id) => id,
            Err(e) => {
                self.canvas.detach();
                return Err(e.into());
            }
        };
        self.lifecycle = Lifecycle::Mounted(Mounted {
            subscription,
            pointer: PointerState::OffSurface,
            throttle: Throttle::default(),
            frame_pending: false,
        });
        log::debug!("mounted chart {:?} (subscription {:?})", self.title, subscription);
        self.draw();
        Ok(())
    }

    /// Drop the pointer subscription and detach the surface. A frame requested
    /// before this call will not paint. Unmounting an unmounted chart does nothing.
    pub fn unmount<H: Host + ?Sized>(&mut self, host: &mut H) {
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Unmounted) {
            Lifecycle::Unmounted => {
                log::warn!("chart {:?} is not mounted; ignoring unmount", self.title);
            }
            Lifecycle::Mounted(m) => {
                host.unsubscribe_pointer_moves(m.subscription);
                self.canvas.detach();
                self.hovered = None;
                if m.frame_pending {
                    log::debug!("unmount cancels a pending frame");
                }
                log::debug!("unmounted chart {:?}", self.title);
            }
        }
    }

    /// Record a viewport pointer move. Returns `false` when the event was
    /// ignored (unmounted) or dropped by the throttle.
    pub fn pointer_moved<H: Host + ?Sized>(&mut self, host: &mut H, event: PointerEvent, now: Instant) -> bool {
        let Lifecycle::Mounted(m) = &mut self.lifecycle else {
            log::trace!("pointer move while unmounted; ignoring");
            return false;
        };
        if !m.throttle.try_accept(now) {
            log::trace!("pointer move throttled");
            return false;
        }
        m.pointer = PointerState::At(event.position());
        if !m.frame_pending {
            m.frame_pending = true;
            host.request_frame();
        }
        true
    }

    /// Display-refresh callback. Paints if mounted with a frame pending;
    /// returns whether it painted.
    pub fn frame(&mut self) -> bool {
        match &mut self.lifecycle {
            Lifecycle::Mounted(m) if m.frame_pending => m.frame_pending = false,
            Lifecycle::Mounted(_) => return false,
            Lifecycle::Unmounted => {
                log::trace!("frame after unmount; skipping paint");
                return false;
            }
        }
        self.draw();
        true
    }

    /// Full redraw: clear, background, title, value axis, category gridlines,
    /// bars, category labels.
    pub fn draw(&mut self) {
        self.layout = compute_layout(self.layout.size, &self.points, &self.fonts, &self.canvas);
        let pointer = self.local_pointer();

        self.canvas.clear();
        self.canvas.fill_background(self.theme.background);

        let title_style = TextStyle {
            font_size: self.fonts.title,
            color: self.theme.title,
            align: TextAlign::Center,
            baseline: TextBaseline::Baseline,
        };
        self.canvas.draw_text(&self.title, self.layout.title_anchor(self.fonts.title), &title_style);

        let label_style = TextStyle {
            font_size: self.fonts.label,
            color: self.theme.label,
            align: TextAlign::End,
            baseline: TextBaseline::Middle,
        };
        for tick in &self.layout.value_ticks {
            let (from, to) = self.layout.value_line(tick);
            self.canvas.draw_line(from, to, self.theme.axis);
            self.canvas.draw_text(&tick.text, self.layout.value_label_anchor(tick), &label_style);
        }

        for (from, to) in self.layout.category_lines() {
            self.canvas.draw_line(from, to, self.theme.axis);
        }

        self.hovered = None;
        for (i, p) in self.points.iter().enumerate() {
            let Some(rect) = self.layout.bar_rect(i, p) else { continue };
            let over = pointer.is_some_and(|pt| rect.contains(pt));
            let glow = if over {
                self.hovered.get_or_insert(i);
                Some(Glow { color: p.color, blur: HOVER_GLOW_BLUR })
            } else {
                None
            };
            self.canvas.fill_rect(rect, p.color, glow);
        }

        let category_style = TextStyle { align: TextAlign::Center, ..label_style };
        for (i, p) in self.points.iter().enumerate() {
            self.canvas.draw_text(&p.label, self.layout.category_label_anchor(i), &category_style);
        }
    }

    /// Pointer position in surface-local coordinates, if mounted and known.
    fn local_pointer(&self) -> Option<Point> {
        match &self.lifecycle {
            Lifecycle::Mounted(m) => m.pointer.local_to(&self.canvas.bounding_rect()),
            Lifecycle::Unmounted => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted(_))
    }

    /// Whether a frame has been requested and not yet painted.
    pub fn frame_pending(&self) -> bool {
        matches!(&self.lifecycle, Lifecycle::Mounted(m) if m.frame_pending)
    }

    pub fn pointer(&self) -> PointerState {
        match &self.lifecycle {
            Lifecycle::Mounted(m) => m.pointer,
            Lifecycle::Unmounted => PointerState::OffSurface,
        }
    }

    /// Index of the bar highlighted by the last draw.
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    pub fn title(&self) -> &str { &self.title }
    pub fn points(&self) -> &[NormalizedPoint] { &self.points }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn canvas(&self) -> &C { &self.canvas }
    pub fn canvas_mut(&mut self) -> &mut C { &mut self.canvas }
    pub fn into_canvas(self) -> C { self.canvas }
}
