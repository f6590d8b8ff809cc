use serde::Serialize;

/// Pixel-space (or millimetre-space offset) point. x grows right, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Flat,
    Curved,
}

impl DisplayType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(Self::Flat),
            "curved" => Some(Self::Curved),
            _ => None,
        }
    }
}

/// How the panels of a setup share their geometry.
///
/// `PerMonitor` places discrete panels side by side (1, 2 or 3 of them).
/// `Grouped` treats the setup as one continuous curved surface whose length
/// is `count` panel widths, so `count` may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arrangement {
    PerMonitor,
    Grouped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonitorSpec {
    pub diagonal_in: f64,
    /// Width over height, e.g. 16/9.
    pub aspect_ratio: f64,
    pub bezel_mm: f64,
    pub count: f64,
    pub display_type: DisplayType,
    pub arrangement: Arrangement,
    /// Radius of the physical arc (1500R = 1500 mm). Only used when curved.
    pub curvature_radius_mm: f64,
    /// Rotation of the side panels away from the center panel plane. Only
    /// used when flat with more than one panel.
    pub wing_angle_deg: f64,
}

impl MonitorSpec {
    /// Number of discrete panels to draw. Grouped setups are a single arc.
    pub fn panel_count(&self) -> usize {
        match self.arrangement {
            Arrangement::Grouped => 1,
            Arrangement::PerMonitor => self.count.round().clamp(1.0, 3.0) as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerSpec {
    /// Eye point to the center screen plane (flat) or arc apex (curved).
    pub distance_mm: f64,
    /// Radius of the drawn viewer marker; no geometric effect.
    pub marker_size_mm: f64,
}
