//! Heavy polyline entity (POLYLINE with VERTEX sub-entities)

use super::{impl_common_entity, EntityCommon};
use crate::types::{path_length, BoundingBox3D, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (DXF group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// A vertex of a heavy polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineVertex {
    /// Location of the vertex
    pub location: Vector3,
    /// Bulge of the following segment, as read from the VERTEX record.
    /// Kept for completeness; lengths treat every segment as straight.
    pub bulge: f64,
}

impl PolylineVertex {
    /// Create a new vertex
    pub fn new(location: Vector3) -> Self {
        PolylineVertex {
            location,
            bulge: 0.0,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        PolylineVertex::new(Vector3::new(x, y, z))
    }

    /// Builder-style bulge assignment
    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }
}

/// A heavy polyline: a 2D or 3D vertex sequence
#[derive(Debug, Clone)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags
    pub flags: PolylineFlags,
    /// Vertices
    pub vertices: Vec<PolylineVertex>,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::empty(),
            vertices: Vec::new(),
        }
    }

    /// Create a polyline through the given points
    pub fn from_points(points: Vec<Vector3>) -> Self {
        Polyline {
            vertices: points.into_iter().map(PolylineVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, vertex: PolylineVertex) {
        self.vertices.push(vertex);
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.flags.set(PolylineFlags::CLOSED, closed);
    }

    /// Sum of straight 3D segment lengths, including last→first when closed.
    /// Vertex bulges are not consulted.
    pub fn length(&self) -> f64 {
        let points: Vec<Vector3> = self.vertices.iter().map(|v| v.location).collect();
        let mut total = path_length(&points);
        if self.is_closed() && points.len() > 1 {
            total += points[points.len() - 1].distance(&points[0]);
        }
        total
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl_common_entity!(Polyline, "POLYLINE", |poly| {
    let points: Vec<Vector3> = poly.vertices.iter().map(|v| v.location).collect();
    BoundingBox3D::from_points(&points)
});
