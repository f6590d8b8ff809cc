use std::f64::consts::PI;

use crate::geometry::{angled_monitor_height, angled_monitor_width, arc_angle, normalize_angle};
use crate::types::{Arrangement, MonitorSpec, Point, ViewerSpec};
use crate::viewport::Viewport;

#[inline]
pub fn mm_to_px(mm: f64, viewport: &Viewport) -> f64 {
    mm / viewport.scale_mm_per_px
}

/// Map a millimetre offset from the viewer's eye point into pixel space.
/// x grows right and y grows towards the viewer, so the screens sit at
/// negative y.
#[inline]
pub fn to_pixels(offset_mm: Point, viewport: &Viewport) -> Point {
    Point {
        x: viewport.center.x + mm_to_px(offset_mm.x, viewport),
        y: viewport.center.y + mm_to_px(offset_mm.y, viewport),
    }
}

/// Panel positions in units of panel width, centered on the viewer's
/// forward axis: {0}, {-0.5, 0.5} or {-1, 0, 1}.
pub fn panel_offsets(monitor: &MonitorSpec) -> Vec<f64> {
    match monitor.arrangement {
        Arrangement::Grouped => vec![0.0],
        Arrangement::PerMonitor => {
            let n = monitor.panel_count();
            let mid = (n as f64 - 1.0) / 2.0;
            (0..n).map(|i| i as f64 - mid).collect()
        }
    }
}

/// Angular window `(start, end)` of a panel on the curvature circle, both in
/// [0, 2π). Offset 0 is straight ahead of the viewer (-π/2 in pixel space);
/// each offset step moves the window by one `screen_angle`.
pub fn arc_window(offset: f64, screen_angle: f64) -> (f64, f64) {
    let mid = -PI / 2.0 + screen_angle * offset;
    (
        normalize_angle(mid - screen_angle / 2.0),
        normalize_angle(mid + screen_angle / 2.0),
    )
}

/// Angle subtended by one drawn arc: a single panel, or the whole grouped
/// surface.
pub fn screen_angle(monitor: &MonitorSpec, panel_width_mm: f64) -> f64 {
    let length = match monitor.arrangement {
        Arrangement::PerMonitor => panel_width_mm,
        Arrangement::Grouped => panel_width_mm * monitor.count,
    };
    arc_angle(length, monitor.curvature_radius_mm)
}

/// Projected center of a circle of `radius_mm` whose nearest point lies at
/// the screen plane, `distance_mm` ahead of the viewer.
pub fn circle_center(radius_mm: f64, viewer: &ViewerSpec, viewport: &Viewport) -> Point {
    to_pixels(Point::new(0.0, radius_mm - viewer.distance_mm), viewport)
}

#[inline]
pub fn point_on_circle(center: Point, radius_px: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius_px * angle.cos(),
        y: center.y + radius_px * angle.sin(),
    }
}

/// Projected (left, right) edges of the flat panel at `offset`.
///
/// Offset 0 is the center panel, coplanar with the screen plane. Any other
/// offset is a wing hinged on its inner edge and swung towards the viewer by
/// the wing angle; for a pair the hinge is the center seam, for a triple it
/// is the center panel's edge.
pub fn flat_panel_edges(
    monitor: &MonitorSpec,
    panel_width_mm: f64,
    viewer: &ViewerSpec,
    viewport: &Viewport,
    offset: f64,
) -> (Point, Point) {
    let w = panel_width_mm;
    let plane_y = -viewer.distance_mm;

    if offset == 0.0 {
        return (
            to_pixels(Point::new(-w / 2.0, plane_y), viewport),
            to_pixels(Point::new(w / 2.0, plane_y), viewport),
        );
    }

    let side = offset.signum();
    let inner = Point::new(offset * w - side * w / 2.0, plane_y);
    let outer = Point::new(
        inner.x + side * angled_monitor_width(w, monitor.wing_angle_deg),
        plane_y + angled_monitor_height(w, monitor.wing_angle_deg),
    );

    let (inner, outer) = (to_pixels(inner, viewport), to_pixels(outer, viewport));
    if side < 0.0 {
        (outer, inner)
    } else {
        (inner, outer)
    }
}
