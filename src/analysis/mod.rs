//! Manufacturing metrics for laser cutting.
//!
//! For every entity the [`EntityGeometryResolver`] yields a cutting length
//! and the [`ClosedContourClassifier`] decides whether it needs a pierce.
//! The [`MetricsAggregator`] folds those into a [`DxfMetrics`], sequentially
//! or on the rayon pool, and [`extents::finalize`] sizes the material sheet.
//! [`MetricsAnalyzer`] runs the whole pipeline over a [`Drawing`].

pub mod aggregator;
pub mod contour;
pub mod extents;
pub mod length;
pub mod metrics;
pub mod summary;

pub use aggregator::MetricsAggregator;
pub use contour::ClosedContourClassifier;
pub use extents::MaterialExtents;
pub use length::{EntityGeometryResolver, Measurement, Resolution, UnsupportedReason};
pub use metrics::{DxfMetrics, EntityMetrics, NameMap};
pub use summary::{KindSummary, LayerSummary, PricingFactors};

use crate::config::AnalysisConfig;
use crate::document::Drawing;
use crate::notification::NotificationCollection;
use serde::Serialize;
use tracing::info;

/// Result of analysing one drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub metrics: DxfMetrics,
    pub notifications: NotificationCollection,
}

impl Analysis {
    /// Quote inputs derived from the metrics
    pub fn pricing_factors(&self) -> PricingFactors {
        PricingFactors::from_metrics(&self.metrics)
    }
}

/// Runs fold and extents reduction over a drawing.
#[derive(Debug, Clone, Default)]
pub struct MetricsAnalyzer {
    config: AnalysisConfig,
}

impl MetricsAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Measure every entity of `drawing`.
    ///
    /// Drawings with at least `parallel_threshold` entities are folded in
    /// parallel.
    pub fn analyze(&self, drawing: &Drawing) -> Analysis {
        let aggregator = MetricsAggregator::new(&self.config);
        let entities = drawing.entities();
        let parallel = entities.len() >= self.config.parallel_threshold;

        let (mut metrics, notifications) = if parallel {
            aggregator.fold_parallel(&drawing.filename, entities)
        } else {
            aggregator.fold(&drawing.filename, entities)
        };
        metrics.apply_extents(extents::finalize(drawing.extents()));

        info!(
            filename = %metrics.filename,
            entities = entities.len(),
            measured = metrics.total_entities,
            cutting_length = metrics.total_cutting_length,
            piercings = metrics.piercing_count,
            width = metrics.material_width,
            height = metrics.material_height,
            parallel,
            "Drawing analyzed"
        );

        Analysis {
            metrics,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::*;
    use crate::types::Vector2;

    #[test]
    fn test_analyze_empty_drawing() {
        let analysis = MetricsAnalyzer::default().analyze(&Drawing::new("empty.dxf"));
        let m = &analysis.metrics;
        assert_eq!(m.total_entities, 0);
        assert_eq!(m.total_cutting_length, 0.0);
        assert_eq!(m.piercing_count, 0);
        assert_eq!(m.bounding_box.min, Vector2::ZERO);
        assert_eq!(m.bounding_box.max, Vector2::ZERO);
        assert_eq!(m.material_width, 0.0);
        assert_eq!(m.material_height, 0.0);
        assert!(analysis.notifications.is_empty());
    }

    #[test]
    fn test_analyze_applies_extents() {
        let mut drawing = Drawing::new("plate.dxf");
        drawing.add_entity(Line::from_coords(0.0, 0.0, 0.0, 120.0, 0.0, 0.0));
        drawing.add_entity(Circle::from_coords(60.0, 40.0, 0.0, 20.0));

        let analysis = MetricsAnalyzer::default().analyze(&drawing);
        let m = &analysis.metrics;
        assert_eq!(m.filename, "plate.dxf");
        assert_eq!(m.material_width, 120.0);
        assert_eq!(m.material_height, 60.0);
        assert_eq!(m.piercing_count, 1);
    }

    #[test]
    fn test_parallel_threshold() {
        let config = AnalysisConfig {
            parallel_threshold: 1,
            ..AnalysisConfig::default()
        };
        let mut drawing = Drawing::new("plate.dxf");
        for i in 0..10 {
            drawing.add_entity(Circle::from_coords(i as f64 * 10.0, 0.0, 0.0, 2.0));
        }
        let par = MetricsAnalyzer::new(config).analyze(&drawing);
        let seq = MetricsAnalyzer::default().analyze(&drawing);
        assert_eq!(par.metrics.total_entities, seq.metrics.total_entities);
        assert_eq!(par.metrics.piercing_count, 10);
        assert_eq!(par.metrics.bounding_box, seq.metrics.bounding_box);
    }
}
