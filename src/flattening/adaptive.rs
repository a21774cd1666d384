//! Adaptive parameter-space subdivision

use super::check_tolerance;
use crate::error::FlattenError;
use crate::types::Vector3;

/// Recursion limit per initial segment; 2^16 chords is far below any
/// tolerance that matters for cutting lengths.
const MAX_DEPTH: u32 = 16;

/// Flatten the parametric curve `eval` over `[start, end]`.
///
/// The domain is first split into `segments` equal parts, then each part is
/// halved until the curve midpoint lies within `tolerance` of the chord
/// midpoint.
pub fn subdivide<F>(
    eval: F,
    start: f64,
    end: f64,
    segments: usize,
    tolerance: f64,
) -> Result<Vec<Vector3>, FlattenError>
where
    F: Fn(f64) -> Vector3,
{
    check_tolerance(tolerance)?;
    if !(start.is_finite() && end.is_finite()) || end <= start {
        return Err(FlattenError::DegenerateDomain { start, end });
    }

    let segments = segments.max(1);
    let step = (end - start) / segments as f64;

    let first = checked(eval(start))?;
    let mut points = vec![first];
    let mut t0 = start;
    let mut p0 = first;
    for i in 0..segments {
        let t1 = if i + 1 == segments { end } else { start + step * (i + 1) as f64 };
        let p1 = checked(eval(t1))?;
        refine(&eval, (t0, p0), (t1, p1), tolerance, 0, &mut points)?;
        t0 = t1;
        p0 = p1;
    }
    Ok(points)
}

fn refine<F>(
    eval: &F,
    (t0, p0): (f64, Vector3),
    (t1, p1): (f64, Vector3),
    tolerance: f64,
    depth: u32,
    out: &mut Vec<Vector3>,
) -> Result<(), FlattenError>
where
    F: Fn(f64) -> Vector3,
{
    let tm = (t0 + t1) / 2.0;
    let pm = checked(eval(tm))?;
    if depth >= MAX_DEPTH || pm.distance(&p0.midpoint(&p1)) <= tolerance {
        out.push(p1);
        return Ok(());
    }
    refine(eval, (t0, p0), (tm, pm), tolerance, depth + 1, out)?;
    refine(eval, (tm, pm), (t1, p1), tolerance, depth + 1, out)
}

fn checked(point: Vector3) -> Result<Vector3, FlattenError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(FlattenError::NonFinite {
            field: "curve point",
        })
    }
}
