use crate::config::DiagramConfig;
use crate::layout::DerivedMetrics;
use crate::types::{MonitorSpec, ViewerSpec};
use crate::viewport::Viewport;

/// Everything a layer needs for one pass. Built fresh from a config.
pub struct DiagramContext {
    pub cfg: DiagramConfig,
    pub metrics: DerivedMetrics,
    pub viewport: Viewport,
}

impl DiagramContext {
    pub fn new(cfg: DiagramConfig) -> Self {
        let metrics = DerivedMetrics::compute(&cfg.monitor, &cfg.viewer);
        let viewport = Viewport::from_config(&cfg, &metrics);
        Self {
            cfg,
            metrics,
            viewport,
        }
    }

    pub fn monitor(&self) -> &MonitorSpec {
        &self.cfg.monitor
    }

    pub fn viewer(&self) -> &ViewerSpec {
        &self.cfg.viewer
    }
}
