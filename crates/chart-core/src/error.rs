// File: crates/chart-core/src/error.rs
// Summary: Error types for chart construction and surface/host failures.

use thiserror::Error;

/// Failures reported by a drawing surface or the host that embeds it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("failed to create drawing surface ({width}x{height})")]
    CreateFailed { width: i32, height: i32 },
    #[error("host rejected surface attach: {0}")]
    AttachRejected(String),
    #[error("pointer subscription failed: {0}")]
    SubscribeFailed(String),
    #[error("failed to encode surface pixels")]
    EncodeFailed,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid chart size {width}x{height}: both dimensions must be finite and > 0")]
    InvalidSize { width: f64, height: f64 },
    #[error("invalid font sizes (title {title}, label {label}): both must be finite and > 0")]
    InvalidFontSize { title: f64, label: f64 },
    #[error("data point {label:?} has a non-finite value")]
    NonFiniteValue { label: String },
    #[error("data point {label:?} has min {min} above max {max}")]
    InvertedRange { label: String, min: f64, max: f64 },
    #[error("data point #{index} does not match the shape of the first point (value vs min/max)")]
    MixedDataShapes { index: usize },
    #[error("invalid color {0:?}: expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
