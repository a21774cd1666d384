//! Cutting length of a single entity.
//!
//! Resolution is total: every entity yields either a length or a reason it
//! has none. Malformed fields are caught here and reported as
//! [`UnsupportedReason::Malformed`]; a curve that cannot be flattened has
//! length `0.0` and carries the [`FlattenError`] alongside.

use crate::config::AnalysisConfig;
use crate::entities::ellipse::DEFAULT_FULL_TURN_TOLERANCE;
use crate::entities::lwpolyline::DEFAULT_BULGE_EPSILON;
use crate::entities::*;
use crate::error::{FlattenError, GeometryError};
use crate::flattening::{Flatten, DEFAULT_FLATTEN_TOLERANCE};
use crate::types::{Vector2, Vector3};

/// Outcome of resolving one entity
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Cutting length in drawing units, never negative
    Length(f64),
    /// Entity contributes to no counter
    Unsupported(UnsupportedReason),
}

impl Resolution {
    /// The length, if any
    pub fn length(&self) -> Option<f64> {
        match self {
            Resolution::Length(len) => Some(*len),
            Resolution::Unsupported(_) => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Resolution::Unsupported(_))
    }
}

/// Why an entity has no length
#[derive(Debug, Clone, PartialEq)]
pub enum UnsupportedReason {
    /// Kind without a cutting path (text, dimension, hatch, ...)
    Kind(String),
    /// A required field holds an unusable value
    Malformed(GeometryError),
}

/// Resolution plus the flattening failure that forced a zero length, if any
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub resolution: Resolution,
    pub flatten_error: Option<FlattenError>,
}

impl Measurement {
    fn resolved(resolution: Resolution) -> Self {
        Measurement {
            resolution,
            flatten_error: None,
        }
    }
}

/// Computes per-kind cutting lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityGeometryResolver {
    flatten_tolerance: f64,
    full_turn_tolerance: f64,
    bulge_epsilon: f64,
}

impl Default for EntityGeometryResolver {
    fn default() -> Self {
        Self {
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
            full_turn_tolerance: DEFAULT_FULL_TURN_TOLERANCE,
            bulge_epsilon: DEFAULT_BULGE_EPSILON,
        }
    }
}

impl EntityGeometryResolver {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            flatten_tolerance: config.flatten_tolerance,
            full_turn_tolerance: config.full_turn_tolerance,
            bulge_epsilon: config.bulge_epsilon,
        }
    }

    /// Length of `entity`, or why it has none
    pub fn resolve(&self, entity: &EntityType) -> Resolution {
        self.measure(entity).resolution
    }

    /// Like [`resolve`](Self::resolve), keeping flattening diagnostics
    pub fn measure(&self, entity: &EntityType) -> Measurement {
        let computed = match entity {
            EntityType::Point(_) => Ok(Ok(0.0)),
            EntityType::Line(line) => self.line_length(line).map(Ok),
            EntityType::Circle(circle) => self.circle_length(circle).map(Ok),
            EntityType::Arc(arc) => self.arc_length(arc).map(Ok),
            EntityType::LwPolyline(poly) => self.lwpolyline_length(poly).map(Ok),
            EntityType::Polyline(poly) => self.polyline_length(poly).map(Ok),
            EntityType::Spline(spline) => Ok(spline.flattened_length(self.flatten_tolerance)),
            EntityType::Ellipse(ellipse) => self.ellipse_length(ellipse),
            EntityType::Unsupported(unsupported) => {
                return Measurement::resolved(Resolution::Unsupported(UnsupportedReason::Kind(
                    unsupported.dxf_name.clone(),
                )));
            }
        };

        match computed {
            Ok(Ok(length)) => Measurement::resolved(Resolution::Length(length)),
            Ok(Err(err)) => Measurement {
                resolution: Resolution::Length(0.0),
                flatten_error: Some(err),
            },
            Err(err) => Measurement::resolved(Resolution::Unsupported(
                UnsupportedReason::Malformed(err),
            )),
        }
    }

    fn line_length(&self, line: &Line) -> Result<f64, GeometryError> {
        finite_point(&line.start, "start")?;
        finite_point(&line.end, "end")?;
        Ok(line.length())
    }

    fn circle_length(&self, circle: &Circle) -> Result<f64, GeometryError> {
        finite_point(&circle.center, "center")?;
        radius(circle.radius)?;
        Ok(circle.circumference())
    }

    fn arc_length(&self, arc: &Arc) -> Result<f64, GeometryError> {
        radius(arc.radius)?;
        finite(arc.start_angle, "start_angle")?;
        finite(arc.end_angle, "end_angle")?;
        Ok(arc.arc_length())
    }

    fn lwpolyline_length(&self, poly: &LwPolyline) -> Result<f64, GeometryError> {
        for vertex in &poly.vertices {
            finite_point2(&vertex.location, "vertices")?;
            finite(vertex.bulge, "bulge")?;
        }
        Ok(poly.length_with_epsilon(self.bulge_epsilon))
    }

    fn polyline_length(&self, poly: &Polyline) -> Result<f64, GeometryError> {
        for vertex in &poly.vertices {
            finite_point(&vertex.location, "vertices")?;
        }
        Ok(poly.length())
    }

    /// Full turns use the closed form, partial arcs are flattened
    fn ellipse_length(
        &self,
        ellipse: &Ellipse,
    ) -> Result<Result<f64, FlattenError>, GeometryError> {
        finite_point(&ellipse.center, "center")?;
        finite_point(&ellipse.major_axis, "major_axis")?;
        finite(ellipse.minor_axis_ratio, "minor_axis_ratio")?;
        if ellipse.minor_axis_ratio < 0.0 {
            return Err(GeometryError::NegativeRatio(ellipse.minor_axis_ratio));
        }
        finite(ellipse.start_parameter, "start_parameter")?;
        finite(ellipse.end_parameter, "end_parameter")?;

        if ellipse.is_full(self.full_turn_tolerance) {
            Ok(Ok(ellipse.ramanujan_circumference()))
        } else {
            Ok(ellipse.flattened_length(self.flatten_tolerance))
        }
    }
}

fn finite(value: f64, field: &'static str) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field })
    }
}

fn finite_point(point: &Vector3, field: &'static str) -> Result<(), GeometryError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { field })
    }
}

fn finite_point2(point: &Vector2, field: &'static str) -> Result<(), GeometryError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { field })
    }
}

fn radius(value: f64) -> Result<f64, GeometryError> {
    let value = finite(value, "radius")?;
    if value < 0.0 {
        Err(GeometryError::NegativeRadius(value))
    } else {
        Ok(value)
    }
}
