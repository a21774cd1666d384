//! Analysis configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! flatten_tolerance = 0.01
//! full_turn_tolerance = 0.001
//! bulge_epsilon = 1e-10
//! parallel_threshold = 4096
//! default_layer = "0"
//! collect_notifications = true
//! ```

use crate::entities::ellipse::DEFAULT_FULL_TURN_TOLERANCE;
use crate::entities::lwpolyline::DEFAULT_BULGE_EPSILON;
use crate::error::{MetricsError, Result};
use crate::flattening::DEFAULT_FLATTEN_TOLERANCE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunables for length resolution and aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Maximum chord deviation when flattening splines and partial ellipses
    pub flatten_tolerance: f64,
    /// A parameter range counts as a full ellipse when `|end - start| >= 2π - this`
    pub full_turn_tolerance: f64,
    /// Bulges below this are straight segments; chords below this contribute nothing
    pub bulge_epsilon: f64,
    /// Entity count at or above which [`MetricsAnalyzer`](crate::analysis::MetricsAnalyzer)
    /// folds in parallel
    pub parallel_threshold: usize,
    /// Layer recorded for entities whose layer name is empty
    pub default_layer: String,
    /// Record non-fatal diagnostics alongside the metrics
    pub collect_notifications: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
            full_turn_tolerance: DEFAULT_FULL_TURN_TOLERANCE,
            bulge_epsilon: DEFAULT_BULGE_EPSILON,
            parallel_threshold: 4096,
            default_layer: "0".to_string(),
            collect_notifications: true,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let config: AnalysisConfig =
            toml::from_str(content).map_err(|err| MetricsError::Config {
                origin: origin.to_string(),
                message: err.to_string(),
            })?;
        config.validate().map_err(|message| MetricsError::Config {
            origin: origin.to_string(),
            message,
        })?;
        Ok(config)
    }

    /// Check that every tolerance is finite and positive
    pub fn validate(&self) -> std::result::Result<(), String> {
        let positive = [
            ("flatten_tolerance", self.flatten_tolerance),
            ("full_turn_tolerance", self.full_turn_tolerance),
            ("bulge_epsilon", self.bulge_epsilon),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be finite and positive, got {value}"));
            }
        }
        Ok(())
    }

    /// Layer name to count an entity under
    pub fn layer_or_default<'a>(&'a self, layer: &'a str) -> &'a str {
        if layer.is_empty() {
            &self.default_layer
        } else {
            layer
        }
    }
}
