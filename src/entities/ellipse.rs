//! Ellipse entity

use super::{impl_common_entity, EntityCommon};
use crate::error::FlattenError;
use crate::flattening::{subdivide, Flatten};
use crate::types::{BoundingBox3D, Vector3};
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// Slack on `2π` when deciding whether a parameter range is a full turn
pub const DEFAULT_FULL_TURN_TOLERANCE: f64 = 0.001;

/// An ellipse entity
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the ellipse
    pub center: Vector3,
    /// Major axis endpoint (relative to center)
    pub major_axis: Vector3,
    /// Ratio of minor axis to major axis
    pub minor_axis_ratio: f64,
    /// Start parameter in radians (0 = major axis endpoint)
    pub start_parameter: f64,
    /// End parameter in radians (2π = full ellipse)
    pub end_parameter: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Ellipse {
    /// Create a new ellipse at the origin
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis: Vector3::UNIT_X,
            minor_axis_ratio: 0.5,
            start_parameter: 0.0,
            end_parameter: TAU,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new full ellipse with center, major axis, and ratio
    pub fn from_center_axes(center: Vector3, major_axis: Vector3, minor_axis_ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis,
            minor_axis_ratio,
            ..Self::new()
        }
    }

    /// Builder-style parameter range
    pub fn with_parameters(mut self, start_parameter: f64, end_parameter: f64) -> Self {
        self.start_parameter = start_parameter;
        self.end_parameter = end_parameter;
        self
    }

    /// Get the major axis length (semi-major axis `a`)
    pub fn major_axis_length(&self) -> f64 {
        self.major_axis.length()
    }

    /// Get the minor axis length (semi-minor axis `b`)
    pub fn minor_axis_length(&self) -> f64 {
        self.major_axis_length() * self.minor_axis_ratio
    }

    /// Minor axis vector, perpendicular to the major axis in the ellipse plane
    pub fn minor_axis(&self) -> Vector3 {
        self.normal.cross(&self.major_axis).normalize() * self.minor_axis_length()
    }

    /// Check if the parameter range covers a full turn within `tolerance`
    pub fn is_full(&self, tolerance: f64) -> bool {
        (self.end_parameter - self.start_parameter).abs() >= TAU - tolerance
    }

    /// Circumference by Ramanujan's second approximation
    pub fn ramanujan_circumference(&self) -> f64 {
        let a = self.major_axis_length();
        let b = self.minor_axis_length();
        if a + b == 0.0 {
            return 0.0;
        }
        let h = ((a - b) * (a - b)) / ((a + b) * (a + b));
        PI * (a + b) * (1.0 + (3.0 * h) / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// Point at parameter `t`
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.center + self.major_axis * t.cos() + self.minor_axis() * t.sin()
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl Flatten for Ellipse {
    /// Flatten counter-clockwise from start to end parameter; an end below
    /// the start wraps forward by one turn.
    fn flatten(&self, tolerance: f64) -> Result<Vec<Vector3>, FlattenError> {
        let start = self.start_parameter;
        let mut end = self.end_parameter;
        if end < start {
            end += TAU;
        }
        let segments = ((end - start) / FRAC_PI_4).ceil().max(1.0) as usize;
        subdivide(
            |t| self.point_at(t),
            start,
            end,
            segments,
            tolerance,
        )
    }
}

impl_common_entity!(Ellipse, "ELLIPSE", |ellipse| {
    let radius = ellipse
        .major_axis_length()
        .max(ellipse.minor_axis_length());
    Some(BoundingBox3D::new(
        Vector3::new(ellipse.center.x - radius, ellipse.center.y - radius, ellipse.center.z),
        Vector3::new(ellipse.center.x + radius, ellipse.center.y + radius, ellipse.center.z),
    ))
});
