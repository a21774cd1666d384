//! Material size from raw drawing extents

use crate::types::BoundingBox2D;
use serde::Serialize;

/// Stock rectangle required to cut a drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialExtents {
    pub bounding_box: BoundingBox2D,
    pub width: f64,
    pub height: f64,
}

/// Reduce raw extents to a material rectangle.
///
/// No extents (nothing contributed geometry) gives a zero box at the origin.
pub fn finalize(raw_extents: Option<BoundingBox2D>) -> MaterialExtents {
    let bounding_box = raw_extents.unwrap_or_default();
    MaterialExtents {
        bounding_box,
        width: bounding_box.width(),
        height: bounding_box.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector2;

    #[test]
    fn test_absent_extents() {
        let extents = finalize(None);
        assert_eq!(extents.bounding_box.min, Vector2::ZERO);
        assert_eq!(extents.bounding_box.max, Vector2::ZERO);
        assert_eq!(extents.width, 0.0);
        assert_eq!(extents.height, 0.0);
    }

    #[test]
    fn test_width_and_height() {
        let raw = BoundingBox2D::new(Vector2::new(-5.0, 2.0), Vector2::new(15.0, 12.5));
        let extents = finalize(Some(raw));
        assert_eq!(extents.bounding_box, raw);
        assert_eq!(extents.width, 20.0);
        assert_eq!(extents.height, 10.5);
    }

    #[test]
    fn test_single_point_extents() {
        let extents = finalize(Some(BoundingBox2D::from_point(Vector2::new(3.0, 4.0))));
        assert_eq!(extents.width, 0.0);
        assert_eq!(extents.height, 0.0);
        assert_eq!(extents.bounding_box.min, Vector2::new(3.0, 4.0));
    }
}
