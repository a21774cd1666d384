//! Arc entity

use super::{impl_common_entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};
use std::f64::consts::TAU;

/// An arc entity (portion of a circle)
///
/// Angles are stored in degrees, as they appear in DXF group codes 50/51,
/// and run counter-clockwise from start to end.
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the arc
    pub center: Vector3,
    /// Radius of the arc
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: 90.0,
        }
    }

    /// Create a new arc with center, radius, and angles in degrees
    pub fn from_center_radius_angles(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }

    /// Create a new arc from coordinates, radius, and angles in degrees
    pub fn from_coords(
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc::from_center_radius_angles(Vector3::new(x, y, z), radius, start_angle, end_angle)
    }

    /// Get the sweep angle in radians, wrapped forward into `[0, 2π)`
    pub fn sweep_angle(&self) -> f64 {
        let mut sweep = self.end_angle.to_radians() - self.start_angle.to_radians();
        if sweep < 0.0 {
            sweep += TAU;
        }
        sweep
    }

    /// Get the arc length
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

// Full circle bounds; exact arc extents are not needed for stock sizing.
impl_common_entity!(Arc, "ARC", |arc| Some(BoundingBox3D::new(
    Vector3::new(arc.center.x - arc.radius, arc.center.y - arc.radius, arc.center.z),
    Vector3::new(arc.center.x + arc.radius, arc.center.y + arc.radius, arc.center.z),
)));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use std::f64::consts::PI;

    #[test]
    fn test_arc_creation() {
        let arc = Arc::new();
        assert_eq!(arc.center, Vector3::ZERO);
        assert_eq!(arc.radius, 1.0);
        assert_eq!(arc.entity_type(), "ARC");
    }

    #[test]
    fn test_arc_sweep_angle() {
        let arc = Arc::from_coords(0.0, 0.0, 0.0, 5.0, 0.0, 180.0);
        assert!((arc.sweep_angle() - PI).abs() < 1e-10);
    }

    #[test]
    fn test_arc_length() {
        let arc = Arc::from_coords(0.0, 0.0, 0.0, 5.0, 0.0, 180.0);
        assert!((arc.arc_length() - 5.0 * PI).abs() < 1e-10);
    }

    #[test]
    fn test_arc_wraps_through_zero() {
        let arc = Arc::from_coords(0.0, 0.0, 0.0, 5.0, 350.0, 10.0);
        assert!((arc.sweep_angle() - 20f64.to_radians()).abs() < 1e-10);
        assert!((arc.arc_length() - 1.7453292519943295).abs() < 1e-10);
    }

    #[test]
    fn test_arc_equal_angles_is_empty() {
        let arc = Arc::from_coords(0.0, 0.0, 0.0, 5.0, 45.0, 45.0);
        assert_eq!(arc.arc_length(), 0.0);
    }
}
