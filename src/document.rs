//! Drawing structure: the ordered entity sequence handed to the analysis

use crate::entities::EntityType;
use crate::types::{BoundingBox2D, BoundingBox3D};

/// A parsed drawing
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Name reported in the metrics
    pub filename: String,

    /// Entities in file order
    entities: Vec<EntityType>,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new(filename: impl Into<String>) -> Self {
        Drawing {
            filename: filename.into(),
            entities: Vec::new(),
        }
    }

    /// Create a drawing from an existing entity sequence
    pub fn from_entities(filename: impl Into<String>, entities: Vec<EntityType>) -> Self {
        Drawing {
            filename: filename.into(),
            entities,
        }
    }

    /// Add an entity to the drawing
    pub fn add_entity(&mut self, entity: impl Into<EntityType>) {
        self.entities.push(entity.into());
    }

    /// Get all entities in order
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Raw XY extents: the union of every entity's fast bounding box.
    ///
    /// Unsupported entities contribute nothing, and neither do boxes that are
    /// non-finite or inverted (negative radius). `None` when no entity has
    /// usable geometry.
    pub fn extents(&self) -> Option<BoundingBox2D> {
        self.entities
            .iter()
            .filter_map(|entity| entity.as_entity().bounding_box())
            .filter(BoundingBox3D::is_valid)
            .map(|bbox| bbox.to_2d())
            .reduce(|acc, bbox| acc.merge(&bbox))
    }
}

impl Extend<EntityType> for Drawing {
    fn extend<I: IntoIterator<Item = EntityType>>(&mut self, iter: I) {
        self.entities.extend(iter);
    }
}
