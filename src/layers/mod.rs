use crate::context::DiagramContext;
use crate::primitives::Shape;

pub trait Layer {
    /// Produce this layer's primitives, in draw order.
    fn build(&self, context: &DiagramContext) -> Vec<Shape>;

    /// Name used in logs and as the SVG group class.
    fn name(&self) -> &'static str;
}

pub mod monitors;
pub mod reference;
pub mod viewer;

pub use monitors::MonitorsLayer;
pub use reference::ReferenceLayer;
pub use viewer::ViewerLayer;
