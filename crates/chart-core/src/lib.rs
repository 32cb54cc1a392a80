// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the column chart engine and its collaborator traits.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod layout;
pub mod scale;
pub mod theme;
pub mod throttle;
pub mod types;
pub mod view;

pub use canvas::{Canvas2D, Glow, TextAlign, TextBaseline, TextMeasure, TextStyle};
pub use chart::ColumnChart;
pub use config::ChartConfig;
pub use data::{normalize, DataPoint, NormalizedPoint};
pub use error::{ChartError, Result, SurfaceError};
pub use geometry::{is_over_rect, Point, Rect};
pub use host::{HeadlessHost, Host, PointerEvent, SubscriptionId};
pub use layout::{compute_layout, Layout};
pub use theme::{ColorOverrides, Rgba, Theme};
pub use throttle::{Throttle, POINTER_THROTTLE};
pub use types::{FontSizes, Paddings, Size};
pub use view::PointerState;
