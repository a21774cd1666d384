//! Lightweight polyline entity (2D polyline with bulges)

use super::{impl_common_entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector2, Vector3};

/// Threshold below which a bulge is a straight segment and a chord is empty
pub const DEFAULT_BULGE_EPSILON: f64 = 1e-10;

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge of the segment starting at this vertex.
    /// 0 = straight line, positive = counterclockwise arc, negative = clockwise arc,
    /// bulge = tan(angle/4) where angle is the included angle
    pub bulge: f64,
}

impl LwVertex {
    /// Create a new straight vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        LwVertex::new(Vector2::new(x, y))
    }

    /// Create a vertex with a bulge
    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex { location, bulge }
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
    /// Is the polyline closed?
    pub is_closed: bool,
    /// Elevation (Z coordinate)
    pub elevation: f64,
}

impl LwPolyline {
    /// Create a new empty lightweight polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            is_closed: false,
            elevation: 0.0,
        }
    }

    /// Create a polyline from a list of 2D points
    pub fn from_points(points: Vec<Vector2>) -> Self {
        LwPolyline {
            vertices: points.into_iter().map(LwVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Add a point to the polyline
    pub fn add_point(&mut self, point: Vector2) {
        self.vertices.push(LwVertex::new(point));
    }

    /// Add a point with bulge
    pub fn add_point_with_bulge(&mut self, point: Vector2, bulge: f64) {
        self.vertices.push(LwVertex::with_bulge(point, bulge));
    }

    /// Close the polyline
    pub fn close(&mut self) {
        self.is_closed = true;
    }

    /// Consecutive vertex pairs, plus the last→first pair when closed.
    ///
    /// The bulge of each segment is carried by its first vertex.
    pub fn segments(&self) -> impl Iterator<Item = (&LwVertex, &LwVertex)> + '_ {
        let open = self.vertices.iter().zip(self.vertices.iter().skip(1));
        let closing = match (self.is_closed, self.vertices.first(), self.vertices.last()) {
            (true, Some(first), Some(last)) if self.vertices.len() > 1 => Some((last, first)),
            _ => None,
        };
        open.chain(closing)
    }

    /// Path length honoring bulges, with the default epsilon
    pub fn length(&self) -> f64 {
        self.length_with_epsilon(DEFAULT_BULGE_EPSILON)
    }

    /// Path length honoring bulges.
    ///
    /// `epsilon` is both the straight-segment bulge threshold and the minimum
    /// chord for an arc segment to contribute.
    pub fn length_with_epsilon(&self, epsilon: f64) -> f64 {
        self.segments()
            .map(|(a, b)| {
                let chord = a.location.distance(&b.location);
                bulge_segment_length(chord, a.bulge, epsilon)
            })
            .sum()
    }
}

/// Length of one polyline segment with the given chord and bulge.
///
/// Straight when `|bulge| < epsilon`. Otherwise the arc through the chord with
/// included angle `4·atan(|bulge|)`; a chord below `epsilon` contributes
/// nothing. A vanishing `sin(θ/2)` is tested against the fixed
/// [`DEFAULT_BULGE_EPSILON`], not `epsilon`.
pub fn bulge_segment_length(chord: f64, bulge: f64, epsilon: f64) -> f64 {
    if bulge.abs() < epsilon {
        return chord;
    }
    if chord < epsilon {
        return 0.0;
    }

    let theta = 4.0 * bulge.abs().atan();
    let half_sin = (theta / 2.0).sin();
    if half_sin.abs() < DEFAULT_BULGE_EPSILON {
        return 0.0;
    }
    let radius = chord / (2.0 * half_sin);
    radius * theta
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl_common_entity!(LwPolyline, "LWPOLYLINE", |poly| {
    let points: Vec<Vector3> = poly
        .vertices
        .iter()
        .map(|v| Vector3::new(v.location.x, v.location.y, poly.elevation))
        .collect();
    BoundingBox3D::from_points(&points)
});
