//! Drawing entity types and traits

use crate::types::BoundingBox3D;

/// Implements [`Entity`] for a struct with a `common: EntityCommon` field.
macro_rules! impl_common_entity {
    ($ty:ty, $name:literal, |$this:ident| $bbox:expr) => {
        impl $crate::entities::Entity for $ty {
            fn layer(&self) -> &str {
                &self.common.layer
            }

            fn set_layer(&mut self, layer: String) {
                self.common.layer = layer;
            }

            fn bounding_box(&self) -> Option<$crate::types::BoundingBox3D> {
                let $this = self;
                $bbox
            }

            fn entity_type(&self) -> &str {
                $name
            }
        }
    };
}
pub(crate) use impl_common_entity;

pub mod point;
pub mod line;
pub mod circle;
pub mod arc;
pub mod ellipse;
pub mod polyline;
pub mod lwpolyline;
pub mod spline;
pub mod unsupported;

pub use point::Point;
pub use line::Line;
pub use circle::Circle;
pub use arc::Arc;
pub use ellipse::Ellipse;
pub use polyline::{Polyline, PolylineFlags, PolylineVertex};
pub use lwpolyline::{LwPolyline, LwVertex};
pub use spline::{Spline, SplineFlags};
pub use unsupported::UnsupportedEntity;

/// Base trait for all drawing entities
pub trait Entity {
    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String);

    /// Fast axis-aligned bounds of the defining geometry.
    ///
    /// Curved entities report a conservative box (full circle, control
    /// polygon). `None` for entities without measurable geometry.
    fn bounding_box(&self) -> Option<BoundingBox3D>;

    /// Get the entity type name (DXF type name, e.g. `"LINE"`)
    fn entity_type(&self) -> &str;
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Layer name, empty when the source did not assign one
    pub layer: String,
}

impl EntityCommon {
    /// Create new common entity data on layer `"0"`
    pub fn new() -> Self {
        EntityCommon {
            layer: "0".to_string(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity kinds the analysis distinguishes.
///
/// Every kind without a cutting length lands in `Unsupported`, so adding a
/// measurable kind means adding a variant and handling it in every match.
#[derive(Debug, Clone)]
pub enum EntityType {
    /// Point entity
    Point(Point),
    /// Line entity
    Line(Line),
    /// Circle entity
    Circle(Circle),
    /// Arc entity
    Arc(Arc),
    /// Ellipse entity (full or partial)
    Ellipse(Ellipse),
    /// Lightweight polyline entity (2D, with bulges)
    LwPolyline(LwPolyline),
    /// Heavy polyline entity (vertex sequence)
    Polyline(Polyline),
    /// Spline entity
    Spline(Spline),
    /// Text, dimension, hatch, insert and every other kind
    Unsupported(UnsupportedEntity),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Unsupported(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Unsupported(e) => e,
        }
    }

    /// Shorthand for an unsupported entity of the given DXF type name
    pub fn unsupported(dxf_name: impl Into<String>) -> Self {
        EntityType::Unsupported(UnsupportedEntity::new(dxf_name))
    }

    /// DXF type name of the wrapped entity
    pub fn entity_type(&self) -> &str {
        self.as_entity().entity_type()
    }

    /// Layer name of the wrapped entity
    pub fn layer(&self) -> &str {
        self.as_entity().layer()
    }

    /// Builder-style layer assignment
    pub fn on_layer(mut self, layer: impl Into<String>) -> Self {
        self.as_entity_mut().set_layer(layer.into());
        self
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for EntityType {
                fn from(entity: $variant) -> Self {
                    EntityType::$variant(entity)
                }
            }
        )*
    };
}

impl_from_entity!(Point, Line, Circle, Arc, Ellipse, LwPolyline, Polyline, Spline);

impl From<UnsupportedEntity> for EntityType {
    fn from(entity: UnsupportedEntity) -> Self {
        EntityType::Unsupported(entity)
    }
}
