//! Core geometric value types

pub mod bounds;
pub mod vector;

pub use bounds::{BoundingBox2D, BoundingBox3D};
pub use vector::{path_length, Vector2, Vector3};
