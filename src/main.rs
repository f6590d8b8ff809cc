mod config;
mod context;
mod diagram;
mod error;
mod geometry;
mod layers;
mod layout;
mod presets;
mod primitives;
mod projection;
mod render;
mod types;
mod viewport;

use crate::config::{DiagramConfig, Margin, Scale};
use crate::render::{write_json, SvgRenderer};
use crate::types::{Arrangement, DisplayType, MonitorSpec, ViewerSpec};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deskfov")]
#[command(about = "Field of view and footprint of multi-monitor desk setups", version)]
struct Args {
    /// Display type, either flat or curved
    #[arg(long = "type", default_value = "flat")]
    display_type: String,

    /// Number of monitors (1-3). Fractional values need --grouped
    #[arg(long, default_value_t = 3.0)]
    count: f64,

    /// Treat a curved setup as one continuous surface of `count` panel widths
    #[arg(long)]
    grouped: bool,

    /// Screen diagonal in inches
    #[arg(long, default_value_t = 32.0)]
    diagonal: f64,

    /// Aspect ratio as a preset label ("21:9"), any W:H pair, or a decimal ("2.333")
    #[arg(long, default_value = "16:9")]
    aspect: String,

    /// Bezel width in mm, added on every side of the screen
    #[arg(long, default_value_t = 5.0)]
    bezel: f64,

    /// Wing angle of the side monitors in degrees (flat only)
    #[arg(long, default_value_t = 60.0)]
    angle: f64,

    /// Curvature radius in mm, e.g. 1500 for 1500R (curved only)
    #[arg(long, default_value_t = 1500.0)]
    curvature: f64,

    /// Distance from the eyes to the center screen in mm
    #[arg(long, default_value_t = 750.0)]
    distance: f64,

    /// Radius of the drawn viewer marker in mm
    #[arg(long, default_value_t = 90.0)]
    viewer_size: f64,

    /// Millimetres per pixel of the diagram
    #[arg(long, default_value_t = 4.0, conflicts_with = "fit")]
    scale: f64,

    /// Pick the scale so the whole setup fits the diagram
    #[arg(long)]
    fit: bool,

    /// Diagram width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Diagram height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: Option<String>,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Print metrics and shapes as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Do not print the metrics summary
    #[arg(short, long)]
    quiet: bool,
}

fn parse_aspect_ratio(s: &str) -> Result<f64> {
    if let Some(ratio) = presets::aspect_ratio(s) {
        return Ok(ratio);
    }
    let ratio = if let Some((w, h)) = s.split_once(':') {
        let w: f64 = w.trim().parse().context("aspect width must be a number")?;
        let h: f64 = h.trim().parse().context("aspect height must be a number")?;
        w / h
    } else {
        s.parse().context("aspect must be W:H or a decimal ratio")?
    };
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(anyhow!(
            "invalid aspect ratio '{s}'. Presets: {}",
            presets::aspect_ratio_labels().join(" | ")
        ));
    }
    Ok(ratio)
}

fn parse_display_type(s: &str) -> Result<DisplayType> {
    DisplayType::from_str(&s.to_lowercase())
        .ok_or_else(|| anyhow!("invalid display type '{s}'. Use: flat | curved"))
}

fn build_config(args: &Args) -> Result<DiagramConfig> {
    let display_type = parse_display_type(&args.display_type)?;
    let arrangement = if args.grouped {
        Arrangement::Grouped
    } else {
        Arrangement::PerMonitor
    };

    let monitor = MonitorSpec {
        diagonal_in: presets::DIAGONAL_IN.check(args.diagonal)?,
        aspect_ratio: parse_aspect_ratio(&args.aspect)?,
        bezel_mm: presets::BEZEL_MM.check(args.bezel)?,
        count: presets::COUNT.check(args.count)?,
        display_type,
        arrangement,
        curvature_radius_mm: presets::CURVATURE_MM.check(args.curvature)?,
        wing_angle_deg: presets::WING_ANGLE_DEG.check(args.angle)?,
    };
    let viewer = ViewerSpec {
        distance_mm: presets::DISTANCE_MM.check(args.distance)?,
        marker_size_mm: args.viewer_size,
    };

    let cfg = DiagramConfig {
        monitor,
        viewer,
        width: args.width,
        height: args.height,
        margin: Margin::uniform(40),
        scale: if args.fit {
            Scale::Fit
        } else {
            Scale::Fixed(args.scale)
        },
    };
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = build_config(&args)?;
    let frame = diagram::compute(cfg)?;

    if let Some(out) = &args.out {
        SvgRenderer::new(args.css.clone())
            .to_file(&frame, out)
            .with_context(|| format!("writing {out}"))?;
        tracing::info!(path = %out, shapes = frame.shapes.len(), "wrote diagram");
    }

    if args.json {
        let stdout = std::io::stdout();
        write_json(&frame, stdout.lock()).context("writing JSON")?;
        println!();
    } else if !args.quiet {
        println!("{}", frame.metrics);
    }

    Ok(())
}

#[cfg(test)]
mod test_utils;
