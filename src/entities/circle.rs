//! Circle entity

use super::{impl_common_entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// A circle entity
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the circle
    pub center: Vector3,
    /// Radius of the circle
    pub radius: f64,
}

impl Circle {
    /// Create a new circle at the origin with radius 1
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
        }
    }

    /// Create a new circle with center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }

    /// Create a new circle from coordinates and radius
    pub fn from_coords(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Circle::from_center_radius(Vector3::new(x, y, z), radius)
    }

    /// Get the circumference of the circle
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl_common_entity!(Circle, "CIRCLE", |circle| Some(BoundingBox3D::new(
    Vector3::new(
        circle.center.x - circle.radius,
        circle.center.y - circle.radius,
        circle.center.z,
    ),
    Vector3::new(
        circle.center.x + circle.radius,
        circle.center.y + circle.radius,
        circle.center.z,
    ),
)));
