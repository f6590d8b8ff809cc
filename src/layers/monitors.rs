use std::f64::consts::TAU;

use crate::context::DiagramContext;
use crate::layers::Layer;
use crate::primitives::{Shape, StyleCategory};
use crate::projection::{
    arc_window, circle_center, flat_panel_edges, mm_to_px, panel_offsets, point_on_circle,
    screen_angle,
};
use crate::types::{DisplayType, Point};

/// Screens as thick lines (flat) or arcs (curved) with a dot on every edge.
pub struct MonitorsLayer {
    joint_radius_px: f64,
}
impl MonitorsLayer {
    pub fn new() -> Self {
        Self {
            joint_radius_px: 5.0,
        }
    }

    fn joint(&self, at: Point) -> Shape {
        Shape::circle(at, self.joint_radius_px, true, StyleCategory::Joint)
    }

    fn flat(&self, context: &DiagramContext) -> Vec<Shape> {
        let mut out = Vec::new();
        for offset in panel_offsets(context.monitor()) {
            let (left, right) = flat_panel_edges(
                context.monitor(),
                context.metrics.panel_width_mm,
                context.viewer(),
                &context.viewport,
                offset,
            );
            out.push(Shape::line(left, right, StyleCategory::Screen));
            out.push(self.joint(left));
            out.push(self.joint(right));
        }
        out
    }

    fn curved(&self, context: &DiagramContext) -> Vec<Shape> {
        let monitor = context.monitor();
        let v = &context.viewport;
        let center = circle_center(monitor.curvature_radius_mm, context.viewer(), v);
        let radius = mm_to_px(monitor.curvature_radius_mm, v);
        let angle = screen_angle(monitor, context.metrics.panel_width_mm);

        // A grouped surface that wraps the full circle has no ends
        if angle >= TAU {
            return vec![Shape::circle(center, radius, false, StyleCategory::Screen)];
        }

        let mut out = Vec::new();
        for offset in panel_offsets(monitor) {
            let (start, end) = arc_window(offset, angle);
            out.push(Shape::arc(center, radius, start, end, StyleCategory::Screen));
            out.push(self.joint(point_on_circle(center, radius, start)));
            out.push(self.joint(point_on_circle(center, radius, end)));
        }
        out
    }
}

impl Layer for MonitorsLayer {
    fn name(&self) -> &'static str {
        "monitors"
    }

    fn build(&self, context: &DiagramContext) -> Vec<Shape> {
        match context.monitor().display_type {
            DisplayType::Flat => self.flat(context),
            DisplayType::Curved => self.curved(context),
        }
    }
}
