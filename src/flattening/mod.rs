//! Curve flattening: approximating curved entities by point sequences.
//!
//! A flattened curve is an ordered list of points whose connecting chords
//! stay within `tolerance` of the true curve (checked at chord midpoints).
//! Summing the chord lengths gives an approximate arc length that
//! converges from below as the tolerance shrinks.

mod adaptive;
pub mod nurbs;

pub use adaptive::subdivide;
pub use nurbs::{clamped_uniform_knots, NurbsCurve};

use crate::error::FlattenError;
use crate::types::{path_length, Vector3};

/// Default maximum chord deviation, in drawing units
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.01;

/// Entities that can be approximated by a polyline.
pub trait Flatten {
    /// Ordered points along the curve, start to end.
    fn flatten(&self, tolerance: f64) -> Result<Vec<Vector3>, FlattenError>;

    /// Length of the flattened approximation
    fn flattened_length(&self, tolerance: f64) -> Result<f64, FlattenError> {
        self.flatten(tolerance).map(|points| path_length(&points))
    }
}

/// Reject tolerances no subdivision could satisfy
pub(crate) fn check_tolerance(tolerance: f64) -> Result<(), FlattenError> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(FlattenError::InvalidTolerance(tolerance))
    }
}
