use phf::phf_map;

use crate::error::InputError;

// Aspect ratios offered by the control panel, keyed by their label.
static ASPECT_RATIOS: phf::Map<&'static str, f64> = phf_map! {
    "5:4" => 5.0 / 4.0,
    "4:3" => 4.0 / 3.0,
    "16:10" => 16.0 / 10.0,
    "16:9" => 16.0 / 9.0,
    "21:10" => 21.0 / 10.0,
    "21:9" => 21.0 / 9.0,
    "32:10" => 32.0 / 10.0,
    "32:9" => 32.0 / 9.0,
};

/// Inclusive slider range for a numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn check(&self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite {
                field: self.field,
                value,
            });
        }
        if value < self.min || value > self.max {
            return Err(InputError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

pub const DIAGONAL_IN: Range = Range::new("diagonal", 24.0, 85.0);
pub const BEZEL_MM: Range = Range::new("bezel", 0.0, 20.0);
pub const WING_ANGLE_DEG: Range = Range::new("angle", 0.0, 90.0);
pub const CURVATURE_MM: Range = Range::new("curvature", 800.0, 1800.0);
pub const DISTANCE_MM: Range = Range::new("distance", 150.0, 1800.0);
pub const COUNT: Range = Range::new("count", 1.0, 3.0);

/// Preset aspect ratio by label, e.g. "21:9".
pub fn aspect_ratio(label: &str) -> Option<f64> {
    ASPECT_RATIOS.get(label).copied()
}

/// Labels of the preset aspect ratios, narrowest first.
pub fn aspect_ratio_labels() -> Vec<&'static str> {
    let mut labels: Vec<(&'static str, f64)> =
        ASPECT_RATIOS.entries().map(|(k, v)| (*k, *v)).collect();
    labels.sort_by(|a, b| a.1.total_cmp(&b.1));
    labels.into_iter().map(|(k, _)| k).collect()
}
