//! Error types for dxf-cutting-metrics

use std::io;
use thiserror::Error;

/// Main error type for crate operations
#[derive(Debug, Error)]
pub enum MetricsError {
    /// IO error occurred while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed or failed validation
    #[error("Config error in {origin}: {message}")]
    Config { origin: String, message: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// A required geometry field holds a value no length can be derived from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// NaN or infinite coordinate / scalar
    #[error("non-finite value in field `{field}`")]
    NonFinite { field: &'static str },

    /// Radius below zero
    #[error("negative radius {0}")]
    NegativeRadius(f64),

    /// Minor/major ratio below zero
    #[error("negative axis ratio {0}")]
    NegativeRatio(f64),
}

/// Failure while approximating a curve by a point sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlattenError {
    /// Neither control points nor enough fit points
    #[error("curve has no usable geometry")]
    EmptyCurve,

    /// Degree below one
    #[error("invalid spline degree {0}")]
    InvalidDegree(i32),

    /// Not enough control points for the degree
    #[error("{count} control points cannot define a degree {degree} spline")]
    TooFewControlPoints { count: usize, degree: usize },

    /// Knot vector length does not match `control points + degree + 1`
    #[error("knot count mismatch: expected {expected}, got {actual}")]
    KnotCount { expected: usize, actual: usize },

    /// Weight count does not match the control point count
    #[error("weight count mismatch: expected {expected}, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    /// Knot vector decreases somewhere
    #[error("knot vector is not non-decreasing")]
    DecreasingKnots,

    /// Parameter domain has zero or non-finite extent
    #[error("degenerate parameter domain [{start}, {end}]")]
    DegenerateDomain { start: f64, end: f64 },

    /// Tolerance must be finite and positive
    #[error("invalid flattening tolerance {0}")]
    InvalidTolerance(f64),

    /// Input contains a non-finite value
    #[error("non-finite value in field `{field}`")]
    NonFinite { field: &'static str },
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, MetricsError>;

impl From<String> for MetricsError {
    fn from(s: String) -> Self {
        MetricsError::Custom(s)
    }
}

impl From<&str> for MetricsError {
    fn from(s: &str) -> Self {
        MetricsError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::NegativeRadius(-2.0);
        assert_eq!(err.to_string(), "negative radius -2");
    }

    #[test]
    fn test_knot_count_error() {
        let err = FlattenError::KnotCount {
            expected: 8,
            actual: 6,
        };
        assert!(err.to_string().contains("expected 8"));
        assert!(err.to_string().contains("got 6"));
    }

    #[test]
    fn test_config_error_display() {
        let err = MetricsError::Config {
            origin: "<inline>".to_string(),
            message: "bad tolerance".to_string(),
        };
        assert_eq!(err.to_string(), "Config error in <inline>: bad tolerance");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: MetricsError = io_err.into();
        assert!(matches!(err, MetricsError::Io(_)));
    }
}
