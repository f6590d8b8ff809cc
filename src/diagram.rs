use serde::Serialize;

use crate::config::DiagramConfig;
use crate::context::DiagramContext;
use crate::error::InputError;
use crate::layers::{Layer, MonitorsLayer, ReferenceLayer, ViewerLayer};
use crate::layout::DerivedMetrics;
use crate::primitives::Shape;
use crate::viewport::Viewport;

/// Output of one layout pass: the numbers and the shapes to draw, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub metrics: DerivedMetrics,
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
}

/// Validate the snapshot and run the full pass. Pure: the same config
/// always yields the same frame.
pub fn compute(cfg: DiagramConfig) -> Result<Frame, InputError> {
    cfg.validate()?;
    let context = DiagramContext::new(cfg);

    // Layer stack, back to front
    let layers: Vec<Box<dyn Layer>> = vec![
        Box::new(ViewerLayer::new()),
        Box::new(ReferenceLayer::new()),
        Box::new(MonitorsLayer::new()),
    ];

    let mut shapes = Vec::new();
    for layer in layers {
        let built = layer.build(&context);
        tracing::trace!(layer = layer.name(), shapes = built.len(), "built layer");
        shapes.extend(built);
    }

    let m = &context.metrics;
    tracing::debug!(
        setup_width_mm = m.setup_width_mm,
        setup_depth_mm = m.setup_depth_mm,
        hfov_deg = m.horizontal_fov_deg(),
        vfov_deg = m.vertical_fov_deg(),
        scale = context.viewport.scale_mm_per_px,
        shapes = shapes.len(),
        "computed layout"
    );

    Ok(Frame {
        metrics: context.metrics,
        viewport: context.viewport,
        shapes,
    })
}
