// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that mounts a column chart into a winit window and blits it via softbuffer.
// Notes:
// - The chart surface sits at CHART_ORIGIN inside the window, so viewport
//   (cursor) and surface coordinates differ and hover exercises the translation.
// - Esc or closing the window unmounts the chart before exiting.

use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use column_chart_core::{
    ChartConfig, ColumnChart, DataPoint, Host, Point, PointerEvent, SubscriptionId, SurfaceError,
};
use column_chart_skia::SkiaCanvas;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

const CHART_ORIGIN: (u32, u32) = (60, 40);
const CHART_SIZE: (u32, u32) = (640, 400);
/// 0RGB fill around the chart surface.
const WINDOW_FILL: u32 = 0x00e8_e8ec;

const BUNDLED_TITLE: &str = "Predicted world population (millions) in 2050";
const BUNDLED_DATA: &str = include_str!("../../demo/data/predicted_world_population.json");

/// Host backed by a winit window: frame requests become redraw requests.
/// Cursor moves are forwarded by the event loop while subscribed.
struct WindowHost {
    window: Window,
    next_id: u64,
    subscription: Option<SubscriptionId>,
}

impl Host for WindowHost {
    fn subscribe_pointer_moves(&mut self) -> Result<SubscriptionId, SurfaceError> {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscription = Some(id);
        Ok(id)
    }

    fn unsubscribe_pointer_moves(&mut self, id: SubscriptionId) {
        if self.subscription == Some(id) {
            self.subscription = None;
        }
    }

    fn request_frame(&mut self) {
        self.window.request_redraw();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Arg: optional JSON data path; falls back to the bundled dataset.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ChartConfig::new(BUNDLED_TITLE, serde_json::from_str(BUNDLED_DATA)?),
    }
    .with_size(CHART_SIZE.0 as f64, CHART_SIZE.1 as f64);

    let canvas = SkiaCanvas::new(config.size)?
        .at(Point::new(CHART_ORIGIN.0 as f64, CHART_ORIGIN.1 as f64));
    let mut chart = ColumnChart::new(config, canvas).context("invalid chart config")?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Column Chart - Window Demo")
        .with_inner_size(PhysicalSize::new(CHART_SIZE.0 + 2 * CHART_ORIGIN.0, CHART_SIZE.1 + 2 * CHART_ORIGIN.1))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut host = WindowHost { window, next_id: 0, subscription: None };
    chart.mount(&mut host)?;
    host.window.request_redraw();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                    ..
                } => {
                    chart.unmount(&mut host);
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if host.subscription.is_some() {
                        chart.pointer_moved(&mut host, PointerEvent::new(position.x, position.y), Instant::now());
                    }
                }
                WindowEvent::Resized(_) => host.window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(_) => {
                chart.frame();
                let size = host.window.inner_size();
                if let Err(e) = present(&mut surface, size, chart.canvas_mut()) {
                    log::error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data: Vec<DataPoint> =
        serde_json::from_str(&json).with_context(|| format!("parsing data {}", path.display()))?;
    let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    Ok(ChartConfig::new(title, data))
}

/// Fill the window and copy the chart pixels in at `CHART_ORIGIN`.
fn present(surface: &mut softbuffer::Surface, size: PhysicalSize<u32>, canvas: &mut SkiaCanvas) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let rgba = canvas.rgba8()?;
    let (cw, ch) = (canvas.pixel_width() as usize, canvas.pixel_height() as usize);
    let (win_w, win_h) = (size.width as usize, size.height as usize);
    let (ox, oy) = (CHART_ORIGIN.0 as usize, CHART_ORIGIN.1 as usize);

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    frame.fill(WINDOW_FILL);
    for y in 0..ch.min(win_h.saturating_sub(oy)) {
        for x in 0..cw.min(win_w.saturating_sub(ox)) {
            let px = &rgba[(y * cw + x) * 4..][..4];
            // Composite over the window fill; softbuffer wants 0RGB.
            let a = px[3] as u32;
            let blend = |c: u8, bg: u32| (c as u32 * a + bg * (255 - a)) / 255;
            let r = blend(px[0], (WINDOW_FILL >> 16) & 0xff);
            let g = blend(px[1], (WINDOW_FILL >> 8) & 0xff);
            let b = blend(px[2], WINDOW_FILL & 0xff);
            frame[(oy + y) * win_w + ox + x] = (r << 16) | (g << 8) | b;
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
