use serde::Serialize;

use crate::config::{DiagramConfig, Scale};
use crate::layout::DerivedMetrics;
use crate::types::{Point, ViewerSpec};

/// Pixel space of the diagram. The viewer sits at `center`; the monitors lie
/// towards negative y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub scale_mm_per_px: f64,
    pub center: Point,
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64, scale_mm_per_px: f64) -> Self {
        let mut v = Self {
            scale_mm_per_px,
            center: Point::new(0.0, 0.0),
            width_px: 0.0,
            height_px: 0.0,
        };
        v.resize(width_px, height_px);
        v
    }

    /// New surface size; the center moves to the midpoint, the scale stays.
    pub fn resize(&mut self, width_px: f64, height_px: f64) {
        self.width_px = width_px;
        self.height_px = height_px;
        self.center = Point::new(width_px / 2.0, height_px / 2.0);
    }

    pub fn from_config(cfg: &DiagramConfig, metrics: &DerivedMetrics) -> Self {
        let width_px = cfg.width as f64;
        let height_px = cfg.height as f64;
        let scale = match cfg.scale {
            Scale::Fixed(mm_per_px) => mm_per_px,
            Scale::Fit => fit_scale(cfg, metrics, &cfg.viewer),
        };
        Self::new(width_px, height_px, scale)
    }
}

// Smallest mm-per-pixel that keeps the setup footprint and the viewer marker
// inside the margins around the viewer-centered origin.
fn fit_scale(cfg: &DiagramConfig, metrics: &DerivedMetrics, viewer: &ViewerSpec) -> f64 {
    let plot_w = cfg.width.saturating_sub(cfg.margin.left + cfg.margin.right).max(1) as f64;
    let plot_h = cfg.height.saturating_sub(cfg.margin.top + cfg.margin.bottom).max(1) as f64;

    let half_w = (metrics.setup_width_mm / 2.0).max(viewer.marker_size_mm);
    let up = viewer.distance_mm;
    let down = (metrics.setup_depth_mm - viewer.distance_mm).max(viewer.marker_size_mm);

    (half_w / (plot_w / 2.0)).max(up.max(down) / (plot_h / 2.0))
}
