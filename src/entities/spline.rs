//! Spline entity (NURBS curve)

use super::{impl_common_entity, EntityCommon};
use crate::error::FlattenError;
use crate::flattening::{Flatten, NurbsCurve};
use crate::types::{BoundingBox3D, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Spline flags (DXF group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: u16 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A spline entity (NURBS curve)
#[derive(Debug, Clone)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Degree of the spline (typically 3 for cubic)
    pub degree: i32,
    /// Spline flags
    pub flags: SplineFlags,
    /// Knot values
    pub knots: Vec<f64>,
    /// Control points
    pub control_points: Vec<Vector3>,
    /// Weights (for rational splines)
    pub weights: Vec<f64>,
    /// Fit points (if available)
    pub fit_points: Vec<Vector3>,
}

impl Spline {
    /// Create a new spline
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            degree: 3,
            flags: SplineFlags::empty(),
            knots: Vec::new(),
            control_points: Vec::new(),
            weights: Vec::new(),
            fit_points: Vec::new(),
        }
    }

    /// Create a spline from control points
    pub fn from_control_points(degree: i32, control_points: Vec<Vector3>) -> Self {
        Spline {
            degree,
            control_points,
            ..Self::new()
        }
    }

    /// Create a spline from fit points
    pub fn from_fit_points(fit_points: Vec<Vector3>) -> Self {
        Spline {
            fit_points,
            ..Self::new()
        }
    }

    /// Get the number of control points
    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl Flatten for Spline {
    /// Flatten the control-point definition; without control points the
    /// fit points are taken as the polyline itself.
    fn flatten(&self, tolerance: f64) -> Result<Vec<Vector3>, FlattenError> {
        if !self.control_points.is_empty() {
            let curve =
                NurbsCurve::new(self.degree, &self.control_points, &self.knots, &self.weights)?;
            return curve.flatten(tolerance);
        }
        if self.fit_points.len() < 2 {
            return Err(FlattenError::EmptyCurve);
        }
        if !self.fit_points.iter().all(Vector3::is_finite) {
            return Err(FlattenError::NonFinite {
                field: "fit_points",
            });
        }
        Ok(self.fit_points.clone())
    }
}

impl_common_entity!(Spline, "SPLINE", |spline| {
    if spline.control_points.is_empty() {
        BoundingBox3D::from_points(&spline.fit_points)
    } else {
        BoundingBox3D::from_points(&spline.control_points)
    }
});
