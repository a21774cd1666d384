//! Placeholder for entity kinds without a cutting length.
//!
//! Text, dimensions, hatches, block inserts, leaders and any kind the
//! analysis does not measure are carried as an `UnsupportedEntity` that keeps
//! only the DXF type name and the common properties. They are excluded from
//! every metric.

use crate::entities::{Entity, EntityCommon};
use crate::types::BoundingBox3D;

/// An entity whose type has no defined cutting length.
#[derive(Debug, Clone)]
pub struct UnsupportedEntity {
    /// Common entity data
    pub common: EntityCommon,
    /// The DXF type name as it appeared in the file (e.g. `"MTEXT"`)
    pub dxf_name: String,
}

impl UnsupportedEntity {
    /// Create a new unsupported entity with the given DXF type name.
    pub fn new(dxf_name: impl Into<String>) -> Self {
        Self {
            common: EntityCommon::new(),
            dxf_name: dxf_name.into(),
        }
    }
}

impl Entity for UnsupportedEntity {
    fn layer(&self) -> &str { &self.common.layer }
    fn set_layer(&mut self, layer: String) { self.common.layer = layer; }
    fn bounding_box(&self) -> Option<BoundingBox3D> { None }
    fn entity_type(&self) -> &str { &self.dxf_name }
}
