//! NURBS curve evaluation (de Boor's algorithm in homogeneous coordinates)

use super::subdivide;
use crate::error::FlattenError;
use crate::types::Vector3;
use std::borrow::Cow;

/// Initial subdivisions per non-empty knot span
const SEGMENTS_PER_SPAN: usize = 4;

/// A validated non-uniform rational B-spline.
#[derive(Debug, Clone)]
pub struct NurbsCurve<'a> {
    degree: usize,
    control_points: &'a [Vector3],
    knots: Cow<'a, [f64]>,
    weights: Option<&'a [f64]>,
}

impl<'a> NurbsCurve<'a> {
    /// Validate spline data.
    ///
    /// An empty knot vector is replaced by a clamped uniform one and empty
    /// weights mean a non-rational curve.
    pub fn new(
        degree: i32,
        control_points: &'a [Vector3],
        knots: &'a [f64],
        weights: &'a [f64],
    ) -> Result<Self, FlattenError> {
        if degree < 1 {
            return Err(FlattenError::InvalidDegree(degree));
        }
        let degree = degree as usize;
        let count = control_points.len();
        if count == 0 {
            return Err(FlattenError::EmptyCurve);
        }
        if count < degree + 1 {
            return Err(FlattenError::TooFewControlPoints { count, degree });
        }
        if !control_points.iter().all(Vector3::is_finite) {
            return Err(FlattenError::NonFinite {
                field: "control_points",
            });
        }

        let knots: Cow<'a, [f64]> = if knots.is_empty() {
            Cow::Owned(clamped_uniform_knots(count, degree))
        } else {
            let expected = count + degree + 1;
            if knots.len() != expected {
                return Err(FlattenError::KnotCount {
                    expected,
                    actual: knots.len(),
                });
            }
            if !knots.iter().all(|k| k.is_finite()) {
                return Err(FlattenError::NonFinite { field: "knots" });
            }
            if knots.windows(2).any(|w| w[1] < w[0]) {
                return Err(FlattenError::DecreasingKnots);
            }
            Cow::Borrowed(knots)
        };

        let weights = if weights.is_empty() {
            None
        } else if weights.len() != count {
            return Err(FlattenError::WeightCount {
                expected: count,
                actual: weights.len(),
            });
        } else if !weights.iter().all(|w| w.is_finite()) {
            return Err(FlattenError::NonFinite { field: "weights" });
        } else {
            Some(weights)
        };

        let curve = NurbsCurve {
            degree,
            control_points,
            knots,
            weights,
        };
        let (start, end) = curve.domain();
        if end <= start {
            return Err(FlattenError::DegenerateDomain { start, end });
        }
        Ok(curve)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Valid parameter range `[u_p, u_{n+1}]`
    pub fn domain(&self) -> (f64, f64) {
        let n = self.control_points.len() - 1;
        (self.knots[self.degree], self.knots[n + 1])
    }

    /// Knot span index `k` with `u_k <= t < u_{k+1}`, clamped to the domain
    fn find_span(&self, t: f64) -> usize {
        let n = self.control_points.len() - 1;
        if t >= self.knots[n + 1] {
            // Last non-empty span
            return (self.degree..=n)
                .rev()
                .find(|&i| self.knots[i] < self.knots[i + 1])
                .unwrap_or(n);
        }
        (self.degree..=n)
            .find(|&i| t < self.knots[i + 1])
            .unwrap_or(n)
    }

    fn weight(&self, i: usize) -> f64 {
        self.weights.map_or(1.0, |w| w[i])
    }

    /// Evaluate the curve at parameter `t`
    pub fn point_at(&self, t: f64) -> Vector3 {
        let p = self.degree;
        let k = self.find_span(t);

        let mut d: Vec<[f64; 4]> = (0..=p)
            .map(|j| {
                let i = j + k - p;
                let w = self.weight(i);
                let cp = self.control_points[i];
                [cp.x * w, cp.y * w, cp.z * w, w]
            })
            .collect();

        for r in 1..=p {
            for j in (r..=p).rev() {
                let left = self.knots[j + k - p];
                let right = self.knots[j + 1 + k - r];
                let denom = right - left;
                let alpha = if denom.abs() < f64::EPSILON {
                    0.0
                } else {
                    (t - left) / denom
                };
                for c in 0..4 {
                    d[j][c] = (1.0 - alpha) * d[j - 1][c] + alpha * d[j][c];
                }
            }
        }

        let h = d[p];
        Vector3::new(h[0] / h[3], h[1] / h[3], h[2] / h[3])
    }

    /// Number of knot spans with non-zero width inside the domain
    fn span_count(&self) -> usize {
        let n = self.control_points.len() - 1;
        (self.degree..=n)
            .filter(|&i| self.knots[i] < self.knots[i + 1])
            .count()
    }

    /// Adaptive flattening over the whole domain
    pub fn flatten(&self, tolerance: f64) -> Result<Vec<Vector3>, FlattenError> {
        let (start, end) = self.domain();
        let segments = self.span_count().max(1) * SEGMENTS_PER_SPAN;
        subdivide(|t| self.point_at(t), start, end, segments, tolerance)
    }
}

/// Clamped uniform knot vector for `count` control points of the given degree:
/// `degree + 1` zeros, evenly spaced interior knots, `degree + 1` copies of the end.
pub fn clamped_uniform_knots(count: usize, degree: usize) -> Vec<f64> {
    let interior = count.saturating_sub(degree + 1);
    let end = (interior + 1) as f64;
    let mut knots = Vec::with_capacity(count + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree + 1));
    knots.extend((1..=interior).map(|i| i as f64));
    knots.extend(std::iter::repeat(end).take(degree + 1));
    knots
}
