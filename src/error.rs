use thiserror::Error;

/// Inputs the layout pipeline refuses to compute on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("monitor count must be 1, 2 or 3 for separate panels, got {0}")]
    PanelCount(f64),

    #[error(
        "curvature radius {radius_mm} mm is too tight for a {panel_width_mm:.0} mm wide panel"
    )]
    CurvatureTooTight { radius_mm: f64, panel_width_mm: f64 },

    #[error("a grouped arrangement needs a curved display")]
    GroupedFlat,
}
