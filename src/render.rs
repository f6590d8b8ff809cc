use std::f64::consts::PI;
use std::fs;
use std::io::Write;

use svg::node::element::{Circle, Group, Line, Path, Rectangle, Style};
use svg::Document;

use crate::diagram::Frame;
use crate::primitives::{sweep, Primitive, Shape};
use crate::projection::point_on_circle;
use crate::types::Point;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/diagram.css"));

pub struct SvgRenderer {
    css_path: Option<String>,
}

impl SvgRenderer {
    pub fn new(css_path: Option<String>) -> Self {
        Self { css_path }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => tracing::warn!(%path, error = %e, "css override unreadable, using embedded"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    pub fn draw_document(&self, frame: &Frame) -> Document {
        let w = frame.viewport.width_px;
        let h = frame.viewport.height_px;

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("viewBox", format!("0 0 {w} {h}"))
            .set("class", "diagram");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        doc = doc.add(
            Rectangle::new()
                .set("class", "background")
                .set("width", w)
                .set("height", h),
        );

        // Shapes in order; later ones overlay earlier ones
        let mut g = Group::new().set("class", "shapes");
        for shape in &frame.shapes {
            g = add_shape(g, shape);
        }
        doc.add(g)
    }

    pub fn to_file(&self, frame: &Frame, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document(frame);
        svg::save(path, &doc)
    }
}

fn class_for(shape: &Shape) -> String {
    match shape.primitive {
        Primitive::Circle { filled: true, .. } => format!("{} filled", shape.style.css_class()),
        _ => shape.style.css_class().to_owned(),
    }
}

fn add_shape(g: Group, shape: &Shape) -> Group {
    let class = class_for(shape);
    match shape.primitive {
        Primitive::Line { from, to } => g.add(
            Line::new()
                .set("class", class)
                .set("x1", from.x)
                .set("y1", from.y)
                .set("x2", to.x)
                .set("y2", to.y),
        ),
        Primitive::Circle { center, radius, .. } => g.add(
            Circle::new()
                .set("class", class)
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius),
        ),
        Primitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => g.add(
            Path::new()
                .set("class", class)
                .set("fill", "none")
                .set("d", arc_path(center, radius, start_angle, end_angle)),
        ),
    }
}

// SVG arcs take endpoints, not angles. Increasing angle is clockwise on
// screen, which is sweep-flag 1.
fn arc_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = point_on_circle(center, radius, start);
    let to = point_on_circle(center, radius, end);
    let large = u8::from(sweep(start, end) > PI);
    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3}",
        from.x, from.y, radius, radius, large, to.x, to.y
    )
}

/// Metrics and shapes as pretty JSON, for renderers outside this crate.
pub fn write_json<W: Write>(frame: &Frame, writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::compute;
    use crate::test_utils::make_config;
    use crate::types::DisplayType;

    #[test]
    fn arc_path_uses_large_flag_past_half_turn() {
        let c = Point::new(0.0, 0.0);
        let small = arc_path(c, 10.0, 0.0, 1.0);
        assert!(small.contains(" 0 0 1 "), "{small}");
        let large = arc_path(c, 10.0, 0.0, 4.0);
        assert!(large.contains(" 0 1 1 "), "{large}");
        assert!(large.starts_with("M 10.000 0.000 A 10.000 10.000"));
    }

    #[test]
    fn document_contains_every_shape() {
        let frame = compute(make_config(|cfg| cfg.monitor.display_type = DisplayType::Curved)).unwrap();
        let text = SvgRenderer::new(None).draw_document(&frame).to_string();
        assert_eq!(text.matches("<path").count(), 3);
        assert_eq!(text.matches("<line").count(), 4);
        // viewer + 2 reference + 6 joints
        assert_eq!(text.matches("<circle").count(), 9);
        assert!(text.contains("class=\"screen\""));
        assert!(text.contains("class=\"viewer filled\""));
        assert!(text.contains("<style"));
    }

    #[test]
    fn missing_css_override_falls_back_to_embedded() {
        let r = SvgRenderer::new(Some("/nonexistent/diagram.css".to_string()));
        assert_eq!(r.load_css_text(), DEFAULT_CSS);
    }

    #[test]
    fn json_lists_metrics_and_shapes() {
        let frame = compute(make_config(|_| {})).unwrap();
        let mut buf = Vec::new();
        write_json(&frame, &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["shapes"].as_array().unwrap().len(), frame.shapes.len());
        assert_eq!(v["shapes"][0]["kind"], "line");
        assert_eq!(v["shapes"][0]["style"], "fov-guide");
        assert!(v["metrics"]["setup_width_mm"].as_f64().unwrap() > 0.0);
    }
}
