// File: crates/demo/src/main.rs
// Summary: Demo loads chart data from JSON (or the bundled population dataset) and renders it to PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use column_chart_core::{theme, ChartConfig, ColorOverrides, ColumnChart, DataPoint, HeadlessHost, PointerEvent};
use column_chart_skia::SkiaCanvas;

const BUNDLED_TITLE: &str = "Predicted world population (millions) in 2050";
const BUNDLED_DATA: &str = include_str!("../data/predicted_world_population.json");

#[derive(Parser, Debug)]
#[command(name = "column-chart-demo")]
#[command(about = "Render a column chart to PNG")]
struct Args {
    /// JSON array of data points ({label, value, color} or {label, min, max, color})
    #[arg(long, conflicts_with = "config")]
    data: Option<PathBuf>,

    /// Whole chart config as JSON ({title, data, size?, colors?, font_sizes?})
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chart title (overrides the config's)
    #[arg(long)]
    title: Option<String>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Color preset: light, dark, solarized-light, solarized-dark
    #[arg(long)]
    theme: Option<String>,

    /// Simulate the pointer at X,Y (surface pixels) to render the hover glow
    #[arg(long, value_parser = parse_point)]
    hover: Option<(f64, f64)>,

    /// Output PNG path
    #[arg(long, default_value = "target/out/column_chart.png")]
    out: PathBuf,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok((parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = build_config(&args)?;
    log::info!("rendering {:?}: {} points at {}x{}", cfg.title, cfg.data.len(), cfg.size.width, cfg.size.height);

    let canvas = SkiaCanvas::new(cfg.size)?;
    let mut chart = ColumnChart::new(cfg, canvas).context("invalid chart config")?;

    if let Some((x, y)) = args.hover {
        let mut host = HeadlessHost::new();
        chart.mount(&mut host)?;
        chart.pointer_moved(&mut host, PointerEvent::new(x, y), Instant::now());
        if host.take_frame_request() {
            chart.frame();
        }
        match chart.hovered() {
            Some(i) => println!("Hovering {:?}", chart.points()[i].label),
            None => println!("Pointer at ({x}, {y}) is not over a bar"),
        }
        chart.unmount(&mut host);
    } else {
        chart.draw();
    }

    chart.canvas_mut().write_png(&args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn build_config(args: &Args) -> Result<ChartConfig> {
    let mut cfg = match (&args.config, &args.data) {
        (Some(path), _) => serde_json::from_str::<ChartConfig>(&read(path)?)
            .with_context(|| format!("parsing chart config {}", path.display()))?,
        (None, Some(path)) => {
            let data = parse_data(&read(path)?).with_context(|| format!("parsing data {}", path.display()))?;
            let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            ChartConfig::new(title, data)
        }
        (None, None) => ChartConfig::new(BUNDLED_TITLE, parse_data(BUNDLED_DATA)?).with_size(600.0, 400.0),
    };

    if let Some(title) = &args.title {
        cfg.title = title.clone();
    }
    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or(cfg.size.width);
        let height = args.height.unwrap_or(cfg.size.height);
        cfg = cfg.with_size(width, height);
    }
    if let Some(name) = &args.theme {
        let preset = theme::find(name);
        if !preset.name.eq_ignore_ascii_case(name) {
            log::warn!("unknown theme {name:?}; using {}", preset.name);
        }
        // Explicit config colors still win over the preset.
        let colors = ColorOverrides::from(preset.with_overrides(&cfg.colors));
        cfg = cfg.with_colors(colors);
    }
    Ok(cfg)
}

fn parse_data(json: &str) -> Result<Vec<DataPoint>> {
    Ok(serde_json::from_str(json)?)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("column-chart-demo").chain(extra.iter().copied()))
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let cfg = build_config(&args(&[])).unwrap();
        assert_eq!(cfg.data.len(), 6);
        assert!(cfg.data.iter().all(|p| !p.is_range()));
        cfg.validate().unwrap();
    }

    #[test]
    fn flags_override_size_title_and_theme() {
        let cfg = build_config(&args(&["--title", "T", "--width", "800", "--theme", "dark"])).unwrap();
        assert_eq!(cfg.title, "T");
        assert_eq!((cfg.size.width, cfg.size.height), (800.0, 400.0));
        assert_eq!(cfg.theme().background, theme::Theme::dark().background);
    }

    #[test]
    fn hover_point_parses() {
        assert_eq!(parse_point("12.5, 40").unwrap(), (12.5, 40.0));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
