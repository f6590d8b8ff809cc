use crate::error::InputError;
use crate::geometry::screen_width;
use crate::types::{Arrangement, DisplayType, MonitorSpec, ViewerSpec};

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

/// How millimetres map onto diagram pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Fixed millimetres per pixel.
    Fixed(f64),
    /// Pick the scale so the setup and the viewer fit inside the margins.
    Fit,
}

/// One complete input snapshot for a layout pass.
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    pub monitor: MonitorSpec,
    pub viewer: ViewerSpec,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub scale: Scale,
}
impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorSpec {
                diagonal_in: 32.0,
                aspect_ratio: 16.0 / 9.0,
                bezel_mm: 5.0,
                count: 3.0,
                display_type: DisplayType::Flat,
                arrangement: Arrangement::PerMonitor,
                curvature_radius_mm: 1500.0,
                wing_angle_deg: 60.0,
            },
            viewer: ViewerSpec {
                distance_mm: 750.0,
                marker_size_mm: 90.0,
            },
            width: 800,
            height: 600,
            margin: Margin::uniform(40),
            scale: Scale::Fixed(4.0),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(())
}

impl DiagramConfig {
    /// Reject geometry the layout cannot describe. Slider ranges are the
    /// caller's concern; this only guards the invariants the math relies on.
    pub fn validate(&self) -> Result<(), InputError> {
        let m = &self.monitor;
        positive("diagonal", m.diagonal_in)?;
        positive("aspect ratio", m.aspect_ratio)?;
        positive("distance", self.viewer.distance_mm)?;
        positive("width", self.width as f64)?;
        positive("height", self.height as f64)?;
        if let Scale::Fixed(mm_per_px) = self.scale {
            positive("scale", mm_per_px)?;
        }

        if !m.bezel_mm.is_finite() || m.bezel_mm < 0.0 {
            return Err(InputError::OutOfRange {
                field: "bezel",
                value: m.bezel_mm,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if !self.viewer.marker_size_mm.is_finite() || self.viewer.marker_size_mm < 0.0 {
            return Err(InputError::OutOfRange {
                field: "viewer size",
                value: self.viewer.marker_size_mm,
                min: 0.0,
                max: f64::INFINITY,
            });
        }

        match m.arrangement {
            Arrangement::PerMonitor => {
                if ![1.0, 2.0, 3.0].contains(&m.count) {
                    return Err(InputError::PanelCount(m.count));
                }
            }
            Arrangement::Grouped => {
                if m.display_type == DisplayType::Flat {
                    return Err(InputError::GroupedFlat);
                }
                if !(1.0..=3.0).contains(&m.count) {
                    return Err(InputError::OutOfRange {
                        field: "count",
                        value: m.count,
                        min: 1.0,
                        max: 3.0,
                    });
                }
            }
        }

        match m.display_type {
            DisplayType::Curved => {
                positive("curvature", m.curvature_radius_mm)?;
                let panel_width_mm = screen_width(m.diagonal_in, m.aspect_ratio) + 2.0 * m.bezel_mm;
                if m.curvature_radius_mm <= panel_width_mm / 2.0 {
                    return Err(InputError::CurvatureTooTight {
                        radius_mm: m.curvature_radius_mm,
                        panel_width_mm,
                    });
                }
            }
            DisplayType::Flat => {
                if !(0.0..=90.0).contains(&m.wing_angle_deg) {
                    return Err(InputError::OutOfRange {
                        field: "angle",
                        value: m.wing_angle_deg,
                        min: 0.0,
                        max: 90.0,
                    });
                }
            }
        }

        Ok(())
    }
}
