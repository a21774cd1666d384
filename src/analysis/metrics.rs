//! The metrics aggregate and its merge operation.
//!
//! `DxfMetrics` only ever grows: entities are added, partial aggregates are
//! merged, and the final extents are applied once. Merging sums every
//! counter and unions the two maps with summed values, which makes it
//! associative and (up to float rounding and map order) commutative.

use super::extents::MaterialExtents;
use crate::types::BoundingBox2D;
use indexmap::IndexMap;
use serde::Serialize;

/// Map keyed by entity kind or layer name
pub type NameMap<V> = IndexMap<String, V, ahash::RandomState>;

/// Count and summed length of one entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EntityMetrics {
    pub count: u64,
    pub total_length: f64,
}

impl EntityMetrics {
    /// Count one entity with its length
    pub fn add(&mut self, length: f64) {
        self.count += 1;
        self.total_length += length;
    }

    /// Combine with another tally of the same kind
    pub fn merge(&mut self, other: &EntityMetrics) {
        self.count += other.count;
        self.total_length += other.total_length;
    }

    /// Mean length per entity, 0 when empty
    pub fn average_length(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_length / self.count as f64
        }
    }
}

/// Manufacturing metrics for one drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DxfMetrics {
    pub filename: String,
    pub total_entities: u64,
    pub total_cutting_length: f64,
    /// Closed contours, one laser pierce each
    pub piercing_count: u64,
    pub entity_breakdown: NameMap<EntityMetrics>,
    pub bounding_box: BoundingBox2D,
    pub material_width: f64,
    pub material_height: f64,
    pub layers: NameMap<u64>,
}

impl DxfMetrics {
    /// Empty aggregate
    pub fn new(filename: impl Into<String>) -> Self {
        DxfMetrics {
            filename: filename.into(),
            total_entities: 0,
            total_cutting_length: 0.0,
            piercing_count: 0,
            entity_breakdown: NameMap::default(),
            bounding_box: BoundingBox2D::default(),
            material_width: 0.0,
            material_height: 0.0,
            layers: NameMap::default(),
        }
    }

    /// Count one measured entity of `kind` on `layer`
    pub fn add_entity(&mut self, kind: &str, length: f64, layer: &str) {
        self.total_entities += 1;
        self.total_cutting_length += length;

        self.entity_breakdown
            .entry(kind.to_string())
            .or_default()
            .add(length);
        *self.layers.entry(layer.to_string()).or_insert(0) += 1;
    }

    /// Count one closed contour
    pub fn add_piercing(&mut self) {
        self.piercing_count += 1;
    }

    /// Fold `other` into `self`. The left filename and extents are kept.
    pub fn merge(mut self, other: DxfMetrics) -> DxfMetrics {
        self.total_entities += other.total_entities;
        self.total_cutting_length += other.total_cutting_length;
        self.piercing_count += other.piercing_count;

        for (kind, metrics) in &other.entity_breakdown {
            self.entity_breakdown
                .entry(kind.clone())
                .or_default()
                .merge(metrics);
        }
        for (layer, count) in other.layers {
            *self.layers.entry(layer).or_insert(0) += count;
        }
        self
    }

    /// Record the material rectangle
    pub fn apply_extents(&mut self, extents: MaterialExtents) {
        self.bounding_box = extents.bounding_box;
        self.material_width = extents.width;
        self.material_height = extents.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector2;

    #[test]
    fn test_new_is_empty() {
        let m = DxfMetrics::new("part.dxf");
        assert_eq!(m.filename, "part.dxf");
        assert_eq!(m.total_entities, 0);
        assert_eq!(m.total_cutting_length, 0.0);
        assert_eq!(m.piercing_count, 0);
        assert!(m.entity_breakdown.is_empty());
        assert!(m.layers.is_empty());
        assert_eq!(m.bounding_box.min, Vector2::ZERO);
        assert_eq!(m.bounding_box.max, Vector2::ZERO);
    }

    #[test]
    fn test_add_entity() {
        let mut m = DxfMetrics::new("part.dxf");
        m.add_entity("LINE", 5.0, "0");
        m.add_entity("LINE", 3.0, "CUT");
        m.add_entity("CIRCLE", 10.0, "CUT");

        assert_eq!(m.total_entities, 3);
        assert_eq!(m.total_cutting_length, 18.0);
        assert_eq!(m.entity_breakdown["LINE"].count, 2);
        assert_eq!(m.entity_breakdown["LINE"].total_length, 8.0);
        assert_eq!(m.entity_breakdown["LINE"].average_length(), 4.0);
        assert_eq!(m.layers["CUT"], 2);
        assert_eq!(m.layers["0"], 1);
    }

    #[test]
    fn test_merge_sums_and_unions() {
        let mut a = DxfMetrics::new("a.dxf");
        a.add_entity("LINE", 1.0, "0");
        a.add_piercing();
        let mut b = DxfMetrics::new("b.dxf");
        b.add_entity("LINE", 2.0, "CUT");
        b.add_entity("ARC", 4.0, "CUT");

        let merged = a.merge(b);
        assert_eq!(merged.filename, "a.dxf");
        assert_eq!(merged.total_entities, 3);
        assert_eq!(merged.total_cutting_length, 7.0);
        assert_eq!(merged.piercing_count, 1);
        assert_eq!(merged.entity_breakdown["LINE"].count, 2);
        assert_eq!(merged.entity_breakdown["ARC"].total_length, 4.0);
        assert_eq!(merged.layers["CUT"], 2);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut a = DxfMetrics::new("a.dxf");
        a.add_entity("CIRCLE", 6.0, "0");
        let merged = a.clone().merge(DxfMetrics::new("a.dxf"));
        assert_eq!(merged, a);
    }

    #[test]
    fn test_empty_kind_average() {
        assert_eq!(EntityMetrics::default().average_length(), 0.0);
    }
}
