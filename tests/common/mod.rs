//! Shared test utilities for dxf-cutting-metrics integration tests.
//!
//! Drawing builders and float assertions that all test crates import via
//! `mod common;`.

#![allow(dead_code)]

pub mod builders;
pub mod comparison;

use dxf_cutting_metrics::analysis::DxfMetrics;

/// Sum of `entity_breakdown` counts
pub fn breakdown_count(metrics: &DxfMetrics) -> u64 {
    metrics.entity_breakdown.values().map(|m| m.count).sum()
}

/// Sum of `entity_breakdown` lengths
pub fn breakdown_length(metrics: &DxfMetrics) -> f64 {
    metrics.entity_breakdown.values().map(|m| m.total_length).sum()
}

/// Sum of per-layer counts
pub fn layer_count(metrics: &DxfMetrics) -> u64 {
    metrics.layers.values().sum()
}

/// Assert the aggregate invariants every finished fold must satisfy.
pub fn assert_invariants(metrics: &DxfMetrics) {
    assert_eq!(metrics.total_entities, breakdown_count(metrics));
    assert_eq!(metrics.total_entities, layer_count(metrics));
    comparison::assert_f64_eq(
        metrics.total_cutting_length,
        breakdown_length(metrics),
        1e-6 * (1.0 + metrics.total_cutting_length.abs()),
    );
    assert!(metrics.piercing_count <= metrics.total_entities);
    assert_eq!(
        metrics.material_width,
        metrics.bounding_box.max.x - metrics.bounding_box.min.x
    );
    assert_eq!(
        metrics.material_height,
        metrics.bounding_box.max.y - metrics.bounding_box.min.y
    );
}
