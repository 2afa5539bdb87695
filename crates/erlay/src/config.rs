//! Configuration types for erlay layouts.
//!
//! This module provides configuration structures that control how nodes are
//! placed and how the canvas is sized. All types implement
//! [`serde::Deserialize`] so they can be loaded from external sources, and
//! every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`LayoutConfig`] - Selects the [`StrategyKind`] and tunes each strategy.
//! - [`ForceConfig`] - Force simulation constants.
//! - [`OverlapConfig`] - Minimum gap and pass budget of the overlap resolver.
//! - [`HierarchicalConfig`] - Spacing of the levelled strategy.
//! - [`CanvasConfig`] - Margin and minimum canvas size.
//! - [`FlowConfig`] - Row-wrapping placement of nodes added without coordinates.
//!
//! # Example
//!
//! ```
//! # use erlay::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().force().iterations(), 200);
//! assert_eq!(config.canvas().margin(), 50);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use erlay_core::geometry::CanvasExtent;

use crate::{error::LayoutError, layout::StrategyKind};

/// Top-level configuration combining layout, canvas and flow settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout strategy section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Canvas sizing section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Flow placement section.
    #[serde(default)]
    flow: FlowConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, canvas: CanvasConfig, flow: FlowConfig) -> Self {
        Self {
            layout,
            canvas,
            flow,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the flow placement configuration.
    pub fn flow(&self) -> &FlowConfig {
        &self.flow
    }

    /// Replaces the layout section (builder style).
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the canvas section (builder style).
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replaces the flow section (builder style).
    pub fn with_flow(mut self, flow: FlowConfig) -> Self {
        self.flow = flow;
        self
    }

    /// Checks every section for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.layout.force.validate()?;

        if self.canvas.min_width == 0 || self.canvas.min_height == 0 {
            return Err(LayoutError::invalid_config(format!(
                "canvas minimum must be positive, got {}x{}",
                self.canvas.min_width, self.canvas.min_height
            )));
        }

        if self.flow.wrap_width <= self.canvas.margin.saturating_mul(2) {
            return Err(LayoutError::invalid_config(format!(
                "flow.wrap_width ({}) must exceed twice the canvas margin ({})",
                self.flow.wrap_width, self.canvas.margin
            )));
        }

        Ok(())
    }
}

/// Strategy selection and per-strategy tuning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// [`StrategyKind`] used when the caller does not pick one.
    strategy: StrategyKind,

    /// Force-directed strategy constants.
    force: ForceConfig,

    /// Overlap resolver settings.
    overlap: OverlapConfig,

    /// Hierarchical strategy spacing.
    hierarchical: HierarchicalConfig,
}

impl LayoutConfig {
    /// Returns the configured [`StrategyKind`].
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Returns the force simulation configuration.
    pub fn force(&self) -> &ForceConfig {
        &self.force
    }

    /// Returns the overlap resolver configuration.
    pub fn overlap(&self) -> &OverlapConfig {
        &self.overlap
    }

    /// Returns the hierarchical strategy configuration.
    pub fn hierarchical(&self) -> &HierarchicalConfig {
        &self.hierarchical
    }

    /// Selects the strategy (builder style).
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the force section (builder style).
    pub fn with_force(mut self, force: ForceConfig) -> Self {
        self.force = force;
        self
    }

    /// Replaces the overlap section (builder style).
    pub fn with_overlap(mut self, overlap: OverlapConfig) -> Self {
        self.overlap = overlap;
        self
    }

    /// Replaces the hierarchical section (builder style).
    pub fn with_hierarchical(mut self, hierarchical: HierarchicalConfig) -> Self {
        self.hierarchical = hierarchical;
        self
    }
}

/// Constants of the force simulation.
///
/// The defaults are empirically tuned for table-sized boxes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Number of simulation steps.
    iterations: usize,

    /// Multiplier applied to the larger average node dimension to obtain
    /// the ideal inter-node distance.
    ideal_length_factor: f64,

    /// Scale of the pairwise repulsion `ideal² / distance`.
    repulsion_strength: f64,

    /// Scale of the edge attraction `distance² / ideal`.
    attraction_strength: f64,

    /// Factor applied to the temperature after every step.
    cooling_rate: f64,

    /// Floor of the temperature.
    min_temperature: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            ideal_length_factor: 1.8,
            repulsion_strength: 0.5,
            attraction_strength: 1.5,
            cooling_rate: 0.95,
            min_temperature: 1.0,
        }
    }
}

impl ForceConfig {
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn ideal_length_factor(&self) -> f64 {
        self.ideal_length_factor
    }

    pub fn repulsion_strength(&self) -> f64 {
        self.repulsion_strength
    }

    pub fn attraction_strength(&self) -> f64 {
        self.attraction_strength
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    /// Sets the number of simulation steps (builder style).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the ideal length multiplier (builder style).
    pub fn with_ideal_length_factor(mut self, factor: f64) -> Self {
        self.ideal_length_factor = factor;
        self
    }

    /// Sets the cooling rate (builder style).
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !(self.ideal_length_factor.is_finite() && self.ideal_length_factor > 0.0) {
            return Err(LayoutError::invalid_config(format!(
                "force.ideal_length_factor must be positive, got {}",
                self.ideal_length_factor
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(LayoutError::invalid_config(format!(
                "force.cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(LayoutError::invalid_config(format!(
                "force.min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        for (name, value) in [
            ("repulsion_strength", self.repulsion_strength),
            ("attraction_strength", self.attraction_strength),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::invalid_config(format!(
                    "force.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Settings of the overlap resolver.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    /// Minimum free space between two boxes, in pixels.
    min_gap: u32,

    /// Upper bound on resolver passes.
    max_passes: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_gap: 30,
            max_passes: 100,
        }
    }
}

impl OverlapConfig {
    pub fn min_gap(&self) -> u32 {
        self.min_gap
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Sets the minimum gap (builder style).
    pub fn with_min_gap(mut self, gap: u32) -> Self {
        self.min_gap = gap;
        self
    }

    /// Sets the pass budget (builder style).
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }
}

/// Spacing of the hierarchical strategy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HierarchicalConfig {
    /// Horizontal distance between the left edges of consecutive levels.
    level_pitch: u32,

    /// Free space left between a node and the partner placed next to it,
    /// and between consecutive rows.
    node_spacing: u32,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            level_pitch: 350,
            node_spacing: 50,
        }
    }
}

impl HierarchicalConfig {
    pub fn level_pitch(&self) -> u32 {
        self.level_pitch
    }

    pub fn node_spacing(&self) -> u32 {
        self.node_spacing
    }

    /// Sets the level pitch (builder style).
    pub fn with_level_pitch(mut self, pitch: u32) -> Self {
        self.level_pitch = pitch;
        self
    }

    /// Sets the node spacing (builder style).
    pub fn with_node_spacing(mut self, spacing: u32) -> Self {
        self.node_spacing = spacing;
        self
    }
}

/// Margin and minimum size of the canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Empty border kept around the placed nodes.
    margin: u32,

    /// Smallest canvas width ever reported.
    min_width: u32,

    /// Smallest canvas height ever reported.
    min_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            margin: 50,
            min_width: 800,
            min_height: 600,
        }
    }
}

impl CanvasConfig {
    /// Creates a canvas configuration from explicit values.
    pub fn new(margin: u32, min_width: u32, min_height: u32) -> Self {
        Self {
            margin,
            min_width,
            min_height,
        }
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Returns the minimum canvas as a [`CanvasExtent`].
    pub fn minimum(&self) -> CanvasExtent {
        CanvasExtent::new(self.min_width, self.min_height)
    }
}

/// Row-wrapping placement used for nodes added without coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Width at which a row wraps (the right margin is subtracted).
    wrap_width: u32,

    /// Minimum vertical advance between rows.
    row_height: u32,

    /// Horizontal space between neighbours in a row.
    spacing: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            wrap_width: 1200,
            row_height: 200,
            spacing: 50,
        }
    }
}

impl FlowConfig {
    /// Creates a flow configuration from explicit values.
    pub fn new(wrap_width: u32, row_height: u32, spacing: u32) -> Self {
        Self {
            wrap_width,
            row_height,
            spacing,
        }
    }

    pub fn wrap_width(&self) -> u32 {
        self.wrap_width
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout().strategy(), StrategyKind::Force);
        assert_eq!(config.layout().force().iterations(), 200);
        assert_eq!(config.layout().force().ideal_length_factor(), 1.8);
        assert_eq!(config.layout().force().cooling_rate(), 0.95);
        assert_eq!(config.layout().overlap().min_gap(), 30);
        assert_eq!(config.layout().overlap().max_passes(), 100);
        assert_eq!(config.layout().hierarchical().level_pitch(), 350);
        assert_eq!(config.canvas().minimum(), CanvasExtent::new(800, 600));
        assert_eq!(config.flow().wrap_width(), 1200);
    }

    #[test]
    fn test_builders() {
        let layout = LayoutConfig::default()
            .with_strategy(StrategyKind::Hierarchical)
            .with_force(ForceConfig::default().with_iterations(10))
            .with_overlap(OverlapConfig::default().with_min_gap(12));
        let config = AppConfig::default()
            .with_layout(layout)
            .with_canvas(CanvasConfig::new(20, 400, 300));

        assert_eq!(config.layout().strategy(), StrategyKind::Hierarchical);
        assert_eq!(config.layout().force().iterations(), 10);
        assert_eq!(config.layout().overlap().min_gap(), 12);
        assert_eq!(config.canvas().margin(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_cooling_rate() {
        for rate in [0.0, -0.5, 1.5, f64::NAN] {
            let layout =
                LayoutConfig::default().with_force(ForceConfig::default().with_cooling_rate(rate));
            let config = AppConfig::default().with_layout(layout);
            assert!(
                matches!(config.validate(), Err(LayoutError::InvalidConfig(_))),
                "cooling rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_ideal_length() {
        let layout = LayoutConfig::default()
            .with_force(ForceConfig::default().with_ideal_length_factor(0.0));
        let config = AppConfig::default().with_layout(layout);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_minimum() {
        let config = AppConfig::default().with_canvas(CanvasConfig::new(50, 0, 600));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_narrow_flow() {
        let config = AppConfig::default().with_flow(FlowConfig::new(100, 200, 50));
        assert!(config.validate().is_err());
    }
}
