// File: crates/chart-core/src/axis.rs
// Summary: Value-axis ticks (gridline positions with their labels) and label formatting.

use crate::grid::linspace;
use crate::scale::ValueScale;

/// One horizontal gridline of the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    /// Surface-local Y of the gridline.
    pub y: f64,
    pub text: String,
}

/// `intervals + 1` ticks from the top of the scale (its max) down to the bottom (its min).
pub fn value_ticks(scale: &ValueScale, intervals: usize) -> Vec<ValueTick> {
    let steps = intervals.max(1) + 1;
    let ys = linspace(scale.top_px, scale.bottom_px, steps);
    let values = linspace(scale.vmax, scale.vmin, steps);
    ys.into_iter()
        .zip(values)
        .map(|(y, value)| ValueTick { value, y, text: format_value(value) })
        .collect()
}

/// Integral values print bare; others keep up to two decimals.
pub fn format_value(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let s = format!("{rounded:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
