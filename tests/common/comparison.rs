//! Float comparison helpers.

#![allow(dead_code)]

use dxf_cutting_metrics::analysis::DxfMetrics;

// ===========================================================================
// Scalar assertions
// ===========================================================================

/// Check approximate equality of two f64 values within `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Assert two f64 values are approximately equal.
pub fn assert_f64_eq(a: f64, b: f64, tol: f64) {
    assert!(
        approx_eq(a, b, tol),
        "f64 mismatch: {a} vs {b} (delta={}, tol={tol})",
        (a - b).abs()
    );
}

// ===========================================================================
// Aggregate comparison
// ===========================================================================

/// Collect every difference between two aggregates beyond `tol`.
///
/// Map entries are compared by key, so insertion order does not matter.
pub fn diff_metrics(a: &DxfMetrics, b: &DxfMetrics, tol: f64) -> Vec<String> {
    let mut diffs = Vec::new();
    if a.total_entities != b.total_entities {
        diffs.push(format!(
            "total_entities: {} vs {}",
            a.total_entities, b.total_entities
        ));
    }
    if a.piercing_count != b.piercing_count {
        diffs.push(format!(
            "piercing_count: {} vs {}",
            a.piercing_count, b.piercing_count
        ));
    }
    if !approx_eq(a.total_cutting_length, b.total_cutting_length, tol) {
        diffs.push(format!(
            "total_cutting_length: {} vs {}",
            a.total_cutting_length, b.total_cutting_length
        ));
    }

    if a.entity_breakdown.len() != b.entity_breakdown.len() {
        diffs.push(format!(
            "entity_breakdown kinds: {} vs {}",
            a.entity_breakdown.len(),
            b.entity_breakdown.len()
        ));
    }
    for (kind, ma) in &a.entity_breakdown {
        match b.entity_breakdown.get(kind) {
            None => diffs.push(format!("entity_breakdown[{kind}] missing")),
            Some(mb) => {
                if ma.count != mb.count {
                    diffs.push(format!("entity_breakdown[{kind}].count: {} vs {}", ma.count, mb.count));
                }
                if !approx_eq(ma.total_length, mb.total_length, tol) {
                    diffs.push(format!(
                        "entity_breakdown[{kind}].total_length: {} vs {}",
                        ma.total_length, mb.total_length
                    ));
                }
            }
        }
    }

    if a.layers.len() != b.layers.len() {
        diffs.push(format!("layers: {} vs {}", a.layers.len(), b.layers.len()));
    }
    for (layer, count) in &a.layers {
        if b.layers.get(layer) != Some(count) {
            diffs.push(format!("layers[{layer}]: {count} vs {:?}", b.layers.get(layer)));
        }
    }
    diffs
}

/// Assert two aggregates agree up to float summation order.
pub fn assert_metrics_eq(a: &DxfMetrics, b: &DxfMetrics, tol: f64) {
    let diffs = diff_metrics(a, b, tol);
    assert!(diffs.is_empty(), "metrics differ:\n  {}", diffs.join("\n  "));
}
