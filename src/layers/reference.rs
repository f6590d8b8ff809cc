use crate::context::DiagramContext;
use crate::layers::Layer;
use crate::primitives::{Shape, StyleCategory};
use crate::projection::{circle_center, mm_to_px};
use crate::types::Point;

/// Dotted ideal-curvature circle with a marker at its center, which is where
/// the viewer would ideally sit.
pub struct ReferenceLayer {
    crosshair_mm: f64,
}
impl ReferenceLayer {
    pub fn new() -> Self {
        Self { crosshair_mm: 50.0 }
    }
}

impl Layer for ReferenceLayer {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn build(&self, context: &DiagramContext) -> Vec<Shape> {
        let v = &context.viewport;
        let viewer = context.viewer();
        let ideal = context.metrics.ideal_radius_mm;

        let c = circle_center(ideal, viewer, v);
        let half = mm_to_px(self.crosshair_mm, v) / 2.0;

        vec![
            Shape::circle(c, mm_to_px(ideal, v), false, StyleCategory::Reference),
            Shape::circle(
                c,
                mm_to_px(viewer.marker_size_mm, v),
                false,
                StyleCategory::Reference,
            ),
            Shape::line(
                Point::new(c.x - half, c.y),
                Point::new(c.x + half, c.y),
                StyleCategory::Reference,
            ),
            Shape::line(
                Point::new(c.x, c.y - half),
                Point::new(c.x, c.y + half),
                StyleCategory::Reference,
            ),
        ]
    }
}
