// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`; both ends are exact.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = steps - 1;
    let step = (end - start) / last as f64;
    (0..steps).map(|i| if i == last { end } else { start + step * i as f64 }).collect()
}

/// Target pixel distance between two value-axis gridlines.
pub const VALUE_LINE_SPACING: f64 = 30.0;

/// Number of value-axis intervals that fit in `plot_height`, at least one.
pub fn value_line_intervals(plot_height: f64) -> usize {
    let n = (plot_height / VALUE_LINE_SPACING).floor();
    if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
}
