use crate::config::DiagramConfig;
use crate::context::DiagramContext;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_config(patch: impl FnOnce(&mut DiagramConfig)) -> DiagramConfig {
    let mut cfg = DiagramConfig::default();
    patch(&mut cfg);
    cfg
}

pub fn make_context(patch: impl FnOnce(&mut DiagramConfig)) -> DiagramContext {
    DiagramContext::new(make_config(patch))
}
