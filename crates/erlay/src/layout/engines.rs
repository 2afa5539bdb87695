//! Layout engine factory module
//!
//! This module selects and configures the [`LayoutStrategy`] implementation
//! named by a [`StrategyKind`]. Engines are built on first use and cached, so
//! repeated layouts with the same builder reuse them.

mod force;
mod hierarchical;

use std::collections::HashMap;

use crate::{
    config::{AppConfig, CanvasConfig, ForceConfig, HierarchicalConfig, OverlapConfig},
    layout::{LayoutStrategy, StrategyKind},
};

pub use force::ForceDirected;
pub use hierarchical::Engine as Hierarchical;

/// Builder for creating and configuring layout engines.
pub struct EngineBuilder {
    // Cache for reusing engines with the same configuration
    engines: HashMap<StrategyKind, Box<dyn LayoutStrategy>>,

    // Configuration options
    force: ForceConfig,
    overlap: OverlapConfig,
    hierarchical: HierarchicalConfig,
    canvas: CanvasConfig,
}

impl EngineBuilder {
    /// Create a new engine builder with default engine cache and configuration
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            force: ForceConfig::default(),
            overlap: OverlapConfig::default(),
            hierarchical: HierarchicalConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }

    /// Create an engine builder configured from every relevant section of `config`
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_force(config.layout().force().clone())
            .with_overlap(config.layout().overlap().clone())
            .with_hierarchical(config.layout().hierarchical().clone())
            .with_canvas(config.canvas().clone())
    }

    /// Set the force simulation parameters
    pub fn with_force(mut self, force: ForceConfig) -> Self {
        self.force = force;
        self
    }

    /// Set the overlap resolver parameters
    pub fn with_overlap(mut self, overlap: OverlapConfig) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the hierarchical spacing
    pub fn with_hierarchical(mut self, hierarchical: HierarchicalConfig) -> Self {
        self.hierarchical = hierarchical;
        self
    }

    /// Set the canvas margin and minimum size
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Get an engine of the specified kind with configured options
    pub fn engine(&mut self, kind: StrategyKind) -> &dyn LayoutStrategy {
        let engine = self.engines.entry(kind).or_insert_with(|| {
            let engine: Box<dyn LayoutStrategy> = match kind {
                StrategyKind::Force => {
                    let mut e = ForceDirected::new();
                    e.set_force(self.force.clone())
                        .set_overlap(self.overlap.clone())
                        .set_canvas(self.canvas.clone());
                    Box::new(e)
                }
                StrategyKind::Hierarchical => {
                    let mut e = Hierarchical::new();
                    e.set_level_pitch(self.hierarchical.level_pitch())
                        .set_node_spacing(self.hierarchical.node_spacing())
                        .set_canvas(self.canvas.clone());
                    Box::new(e)
                }
            };
            engine
        });
        // Dereference to avoid returning reference to temporary
        &**engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
