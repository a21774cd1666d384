//! Closed-contour classification (one laser pierce per closed contour)

use crate::config::AnalysisConfig;
use crate::entities::ellipse::DEFAULT_FULL_TURN_TOLERANCE;
use crate::entities::EntityType;

/// Decides whether an entity forms a closed contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedContourClassifier {
    full_turn_tolerance: f64,
}

impl ClosedContourClassifier {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            full_turn_tolerance: config.full_turn_tolerance,
        }
    }

    /// Circles always close, ellipses when they span a full turn, polylines
    /// when flagged closed. Lines, arcs, splines and points never do.
    pub fn is_closed(&self, entity: &EntityType) -> bool {
        match entity {
            EntityType::Circle(_) => true,
            EntityType::Ellipse(ellipse) => ellipse.is_full(self.full_turn_tolerance),
            EntityType::LwPolyline(poly) => poly.is_closed,
            EntityType::Polyline(poly) => poly.is_closed(),
            EntityType::Line(_)
            | EntityType::Arc(_)
            | EntityType::Spline(_)
            | EntityType::Point(_)
            | EntityType::Unsupported(_) => false,
        }
    }
}

impl Default for ClosedContourClassifier {
    fn default() -> Self {
        Self {
            full_turn_tolerance: DEFAULT_FULL_TURN_TOLERANCE,
        }
    }
}
