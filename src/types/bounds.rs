//! Bounding box types for geometric entities

use super::{Vector2, Vector3};
use serde::Serialize;
use std::fmt;

/// 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        BoundingBox2D::from_point(Vector2::ZERO)
    }
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// Create a bounding box from a single point
    pub fn from_point(point: Vector2) -> Self {
        BoundingBox2D {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox2D::from_point(*first);
        for point in rest {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Merge with another bounding box
    pub fn merge(&self, other: &BoundingBox2D) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox2D[{} -> {}]", self.min, self.max)
    }
}

/// 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    /// Minimum point (lower-left-back corner)
    pub min: Vector3,
    /// Maximum point (upper-right-front corner)
    pub max: Vector3,
}

impl BoundingBox3D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox3D { min, max }
    }

    /// Create a bounding box from a single point
    pub fn from_point(point: Vector3) -> Self {
        BoundingBox3D {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox3D::from_point(*first);
        for point in rest {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// True when every coordinate is finite and `min <= max` on each axis
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }

    /// Project onto the XY plane
    pub fn to_2d(&self) -> BoundingBox2D {
        BoundingBox2D::new(self.min.xy(), self.max.xy())
    }
}

impl fmt::Display for BoundingBox3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3D[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox2d_from_points() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 5.0),
            Vector2::new(-5.0, 3.0),
        ];
        let bbox = BoundingBox2D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Vector2::new(-5.0, 0.0));
        assert_eq!(bbox.max, Vector2::new(10.0, 5.0));
        assert!(BoundingBox2D::from_points(&[]).is_none());
    }

    #[test]
    fn test_bbox2d_dimensions() {
        let bbox = BoundingBox2D::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 5.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 5.0);
        assert!(bbox.contains(Vector2::new(5.0, 2.5)));
        assert!(!bbox.contains(Vector2::new(15.0, 2.5)));
    }

    #[test]
    fn test_bbox2d_merge() {
        let a = BoundingBox2D::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        let b = BoundingBox2D::new(Vector2::new(-2.0, 0.5), Vector2::new(0.5, 3.0));
        let m = a.merge(&b);
        assert_eq!(m.min, Vector2::new(-2.0, 0.0));
        assert_eq!(m.max, Vector2::new(1.0, 3.0));
    }

    #[test]
    fn test_bbox3d_projection() {
        let points = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 5.0, 3.0),
            Vector3::new(-5.0, 3.0, -2.0),
        ];
        let bbox = BoundingBox3D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Vector3::new(-5.0, 0.0, -2.0));
        assert!(bbox.is_valid());
        let flat = bbox.to_2d();
        assert_eq!(flat.min, Vector2::new(-5.0, 0.0));
        assert_eq!(flat.max, Vector2::new(10.0, 5.0));
    }

    #[test]
    fn test_bbox3d_validity() {
        let inverted = BoundingBox3D::new(Vector3::new(5.0, 5.0, 0.0), Vector3::new(-5.0, -5.0, 0.0));
        assert!(!inverted.is_valid());
        let nan = BoundingBox3D::new(Vector3::new(f64::NAN, 0.0, 0.0), Vector3::ZERO);
        assert!(!nan.is_valid());
        assert!(BoundingBox3D::from_point(Vector3::ZERO).is_valid());
    }
}
