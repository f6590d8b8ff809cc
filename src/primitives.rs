use std::f64::consts::TAU;

use serde::Serialize;

use crate::types::Point;

/// Drawing category of a primitive. The renderer owns the concrete colors
/// and stroke patterns; the category keeps them consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    /// Solid thick stroke for monitor screens.
    Screen,
    /// Filled dot on a screen edge.
    Joint,
    /// Dashed FOV wedge.
    FovGuide,
    /// Solid, filled viewer position.
    ViewerMarker,
    /// Dotted ideal-curvature reference.
    Reference,
}

impl StyleCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Joint => "joint",
            Self::FovGuide => "fov-guide",
            Self::ViewerMarker => "viewer",
            Self::Reference => "reference",
        }
    }
}

/// Shape in pixel space. Arc angles are in [0, 2π) and sweep clockwise on
/// screen (y down) from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
    },
}

/// Angle swept from `start` to `end`, going the way the angles increase.
pub fn sweep(start: f64, end: f64) -> f64 {
    (end - start).rem_euclid(TAU)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    #[serde(flatten)]
    pub primitive: Primitive,
    pub style: StyleCategory,
}

impl Shape {
    pub fn line(from: Point, to: Point, style: StyleCategory) -> Self {
        Self {
            primitive: Primitive::Line { from, to },
            style,
        }
    }

    pub fn circle(center: Point, radius: f64, filled: bool, style: StyleCategory) -> Self {
        Self {
            primitive: Primitive::Circle {
                center,
                radius,
                filled,
            },
            style,
        }
    }

    pub fn arc(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        style: StyleCategory,
    ) -> Self {
        Self {
            primitive: Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;
    use std::f64::consts::PI;

    #[test]
    fn sweep_handles_wrap_through_zero() {
        assert!(approx(sweep(1.0, 2.0), 1.0, 1e-12));
        assert!(approx(sweep(1.5 * PI, 0.5 * PI), PI, 1e-12));
        assert!(approx(sweep(6.0, 0.2), 0.2 + TAU - 6.0, 1e-12));
    }

    #[test]
    fn shapes_serialize_with_kind_and_style() {
        let s = Shape::circle(Point::new(1.0, 2.0), 3.0, true, StyleCategory::ViewerMarker);
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(v["kind"], "circle");
        assert_eq!(v["style"], "viewer-marker");
        assert_eq!(v["filled"], true);
        assert_eq!(v["center"]["x"], 1.0);
    }

    #[test]
    fn css_classes_are_distinct() {
        let all = [
            StyleCategory::Screen,
            StyleCategory::Joint,
            StyleCategory::FovGuide,
            StyleCategory::ViewerMarker,
            StyleCategory::Reference,
        ];
        let classes: std::collections::HashSet<_> = all.iter().map(|s| s.css_class()).collect();
        assert_eq!(classes.len(), all.len());
    }
}
