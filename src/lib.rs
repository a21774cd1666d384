//! # dxf-cutting-metrics
//!
//! Manufacturing metrics for laser-cut price estimation from parsed DXF
//! entities.
//!
//! Given the entities of a drawing, the library computes the total cutting
//! path length, the number of closed contours (one laser pierce each),
//! per-kind and per-layer breakdowns, and the stock rectangle the part needs.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_cutting_metrics::{Circle, Drawing, Line, MetricsAnalyzer};
//!
//! let mut drawing = Drawing::new("bracket.dxf");
//! drawing.add_entity(Line::from_coords(0.0, 0.0, 0.0, 100.0, 0.0, 0.0));
//! drawing.add_entity(Circle::from_coords(50.0, 25.0, 0.0, 10.0));
//!
//! let analysis = MetricsAnalyzer::default().analyze(&drawing);
//! assert_eq!(analysis.metrics.total_entities, 2);
//! assert_eq!(analysis.metrics.piercing_count, 1);
//! ```
//!
//! ## Architecture
//!
//! - `EntityType` - Exhaustive sum of the measurable entity kinds plus `Unsupported`
//! - `EntityGeometryResolver` - Per-kind cutting length
//! - `ClosedContourClassifier` - Which entities need a pierce
//! - `MetricsAggregator` - Sequential or parallel fold into `DxfMetrics`
//! - `MetricsAnalyzer` - Fold plus material extents for a whole `Drawing`
//!
//! Parsing DXF files is left to the caller; this crate starts from typed
//! entities.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod config;
pub mod document;
pub mod entities;
pub mod error;
pub mod flattening;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{FlattenError, GeometryError, MetricsError, Result};
pub use types::{BoundingBox2D, BoundingBox3D, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    Arc, Circle, Ellipse, Entity, EntityType, Line, LwPolyline, Point, Polyline, Spline,
    UnsupportedEntity,
};

// Re-export analysis
pub use analysis::{
    Analysis, ClosedContourClassifier, DxfMetrics, EntityGeometryResolver, EntityMetrics,
    MetricsAggregator, MetricsAnalyzer, PricingFactors, Resolution,
};

pub use config::AnalysisConfig;
pub use document::Drawing;
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
