//! Derived numbers for a price quote.

use super::metrics::DxfMetrics;
use serde::Serialize;

/// Square millimetres per square metre
const MM2_PER_M2: f64 = 1e6;

/// Per-kind row of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSummary {
    pub kind: String,
    pub count: u64,
    pub total_length: f64,
    pub average_length: f64,
}

/// Per-layer row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub count: u64,
}

/// Quote inputs derived from a finished [`DxfMetrics`].
///
/// Drawing units are taken to be millimetres. Rows are ordered by count,
/// highest first; ties keep first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingFactors {
    pub total_cutting_length: f64,
    pub piercing_count: u64,
    pub material_width: f64,
    pub material_height: f64,
    pub material_area_m2: f64,
    pub entity_breakdown: Vec<KindSummary>,
    pub layers: Vec<LayerSummary>,
    pub layer_count: usize,
}

impl PricingFactors {
    pub fn from_metrics(metrics: &DxfMetrics) -> Self {
        let mut entity_breakdown: Vec<KindSummary> = metrics
            .entity_breakdown
            .iter()
            .map(|(kind, m)| KindSummary {
                kind: kind.clone(),
                count: m.count,
                total_length: m.total_length,
                average_length: m.average_length(),
            })
            .collect();
        entity_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        let mut layers: Vec<LayerSummary> = metrics
            .layers
            .iter()
            .map(|(name, count)| LayerSummary {
                name: name.clone(),
                count: *count,
            })
            .collect();
        layers.sort_by(|a, b| b.count.cmp(&a.count));

        PricingFactors {
            total_cutting_length: metrics.total_cutting_length,
            piercing_count: metrics.piercing_count,
            material_width: metrics.material_width,
            material_height: metrics.material_height,
            material_area_m2: metrics.material_width * metrics.material_height / MM2_PER_M2,
            layer_count: layers.len(),
            entity_breakdown,
            layers,
        }
    }
}

impl From<&DxfMetrics> for PricingFactors {
    fn from(metrics: &DxfMetrics) -> Self {
        PricingFactors::from_metrics(metrics)
    }
}
