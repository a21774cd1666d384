//! Point entity

use super::{impl_common_entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// A point entity in 3D space
#[derive(Debug, Clone)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Point {
            common: EntityCommon::new(),
            location: Vector3::ZERO,
        }
    }

    /// Create a new point at a specific location
    pub fn at(location: Vector3) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }

    /// Create a new point with coordinates
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Point::at(Vector3::new(x, y, z))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl_common_entity!(Point, "POINT", |point| Some(BoundingBox3D::from_point(
    point.location
)));
