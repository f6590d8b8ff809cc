use crate::context::DiagramContext;
use crate::geometry::{chord_length, sagitta};
use crate::layers::Layer;
use crate::layout::CurvedLayout;
use crate::primitives::{Shape, StyleCategory};
use crate::projection::{mm_to_px, to_pixels};
use crate::types::{DisplayType, Point};

pub struct ViewerLayer;
impl ViewerLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for ViewerLayer {
    fn name(&self) -> &'static str {
        "viewer"
    }

    fn build(&self, context: &DiagramContext) -> Vec<Shape> {
        let monitor = context.monitor();
        let viewer = context.viewer();
        let metrics = &context.metrics;
        let v = &context.viewport;

        // Half width and forward reach of the setup's outer edges
        let (half_w, reach) = match monitor.display_type {
            DisplayType::Flat => (
                metrics.setup_width_mm / 2.0,
                viewer.distance_mm - metrics.setup_depth_mm,
            ),
            DisplayType::Curved => {
                let length = CurvedLayout::arc_length(monitor, metrics.panel_width_mm);
                let r = monitor.curvature_radius_mm;
                (
                    chord_length(length, r) / 2.0,
                    viewer.distance_mm - sagitta(length, r),
                )
            }
        };

        let apex = v.center;
        let left = to_pixels(Point::new(-half_w, -reach), v);
        let right = to_pixels(Point::new(half_w, -reach), v);

        vec![
            Shape::line(apex, left, StyleCategory::FovGuide),
            Shape::line(apex, right, StyleCategory::FovGuide),
            Shape::circle(
                apex,
                mm_to_px(viewer.marker_size_mm, v),
                true,
                StyleCategory::ViewerMarker,
            ),
        ]
    }
}
