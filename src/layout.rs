use std::fmt;

use serde::Serialize;

use crate::geometry::{
    angled_monitor_height, angled_monitor_width, arc_depth, arc_width, curved_horizontal_fov,
    curved_vertical_fov, flat_horizontal_fov, hexagon_inradius, screen_height, screen_width,
    to_degrees,
};
use crate::types::{DisplayType, MonitorSpec, ViewerSpec};

/// Bounding footprint of the whole arrangement seen from above, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub width_mm: f64,
    pub depth_mm: f64,
}

/// Physical dimensions and field of view derived from one input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub screen_width_mm: f64,
    pub screen_height_mm: f64,
    pub panel_width_mm: f64,
    pub panel_height_mm: f64,
    pub setup_width_mm: f64,
    pub setup_depth_mm: f64,
    pub horizontal_fov_rad: f64,
    pub vertical_fov_rad: f64,
    /// Radius of the reference arc drawn behind the setup.
    pub ideal_radius_mm: f64,
}

pub trait LayoutStrategy {
    fn footprint(&self, monitor: &MonitorSpec, panel_width_mm: f64) -> Footprint;

    fn horizontal_fov(
        &self,
        monitor: &MonitorSpec,
        panel_width_mm: f64,
        footprint: Footprint,
        viewer: &ViewerSpec,
    ) -> f64;

    fn ideal_radius(&self, monitor: &MonitorSpec, panel_width_mm: f64) -> f64;
}

pub struct FlatLayout;

impl LayoutStrategy for FlatLayout {
    fn footprint(&self, monitor: &MonitorSpec, panel_width_mm: f64) -> Footprint {
        let wing_w = angled_monitor_width(panel_width_mm, monitor.wing_angle_deg);
        let wing_d = angled_monitor_height(panel_width_mm, monitor.wing_angle_deg);
        match monitor.panel_count() {
            1 => Footprint {
                width_mm: panel_width_mm,
                depth_mm: 0.0,
            },
            // Two wings hinged at the center seam
            2 => Footprint {
                width_mm: 2.0 * wing_w,
                depth_mm: wing_d,
            },
            _ => Footprint {
                width_mm: panel_width_mm + 2.0 * wing_w,
                depth_mm: wing_d,
            },
        }
    }

    fn horizontal_fov(
        &self,
        _monitor: &MonitorSpec,
        _panel_width_mm: f64,
        footprint: Footprint,
        viewer: &ViewerSpec,
    ) -> f64 {
        flat_horizontal_fov(footprint.width_mm, footprint.depth_mm, viewer.distance_mm)
    }

    fn ideal_radius(&self, _monitor: &MonitorSpec, panel_width_mm: f64) -> f64 {
        hexagon_inradius(panel_width_mm)
    }
}

pub struct CurvedLayout;

impl CurvedLayout {
    /// Total arc length; fractional for grouped setups.
    pub fn arc_length(monitor: &MonitorSpec, panel_width_mm: f64) -> f64 {
        panel_width_mm * monitor.count
    }
}

impl LayoutStrategy for CurvedLayout {
    fn footprint(&self, monitor: &MonitorSpec, panel_width_mm: f64) -> Footprint {
        let length = Self::arc_length(monitor, panel_width_mm);
        Footprint {
            width_mm: arc_width(length, monitor.curvature_radius_mm),
            depth_mm: arc_depth(length, monitor.curvature_radius_mm),
        }
    }

    fn horizontal_fov(
        &self,
        monitor: &MonitorSpec,
        panel_width_mm: f64,
        _footprint: Footprint,
        viewer: &ViewerSpec,
    ) -> f64 {
        curved_horizontal_fov(
            Self::arc_length(monitor, panel_width_mm),
            viewer.distance_mm,
            monitor.curvature_radius_mm,
        )
    }

    fn ideal_radius(&self, monitor: &MonitorSpec, _panel_width_mm: f64) -> f64 {
        monitor.curvature_radius_mm
    }
}

pub fn strategy_for(display_type: DisplayType) -> &'static dyn LayoutStrategy {
    match display_type {
        DisplayType::Flat => &FlatLayout,
        DisplayType::Curved => &CurvedLayout,
    }
}

impl DerivedMetrics {
    pub fn compute(monitor: &MonitorSpec, viewer: &ViewerSpec) -> Self {
        let strategy = strategy_for(monitor.display_type);

        let screen_width_mm = screen_width(monitor.diagonal_in, monitor.aspect_ratio);
        let screen_height_mm = screen_height(monitor.diagonal_in, monitor.aspect_ratio);
        let panel_width_mm = screen_width_mm + 2.0 * monitor.bezel_mm;
        let panel_height_mm = screen_height_mm + 2.0 * monitor.bezel_mm;

        let footprint = strategy.footprint(monitor, panel_width_mm);

        Self {
            screen_width_mm,
            screen_height_mm,
            panel_width_mm,
            panel_height_mm,
            setup_width_mm: footprint.width_mm,
            setup_depth_mm: footprint.depth_mm,
            horizontal_fov_rad: strategy.horizontal_fov(monitor, panel_width_mm, footprint, viewer),
            vertical_fov_rad: curved_vertical_fov(panel_height_mm, viewer.distance_mm),
            ideal_radius_mm: strategy.ideal_radius(monitor, panel_width_mm),
        }
    }

    pub fn horizontal_fov_deg(&self) -> f64 {
        to_degrees(self.horizontal_fov_rad)
    }

    pub fn vertical_fov_deg(&self) -> f64 {
        to_degrees(self.vertical_fov_rad)
    }
}

impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Setup width (mm): {:.0}", self.setup_width_mm)?;
        writeln!(f, "Setup depth (mm): {:.0}", self.setup_depth_mm)?;
        writeln!(f, "Monitor width (mm): {:.0}", self.panel_width_mm)?;
        writeln!(f, "Monitor height (mm): {:.0}", self.panel_height_mm)?;
        writeln!(f, "hFOV (degrees): {:.0}°", self.horizontal_fov_deg())?;
        write!(f, "vFOV (degrees): {:.0}°", self.vertical_fov_deg())
    }
}
