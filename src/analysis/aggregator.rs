//! Folding an entity sequence into one [`DxfMetrics`].

use super::contour::ClosedContourClassifier;
use super::length::{EntityGeometryResolver, Resolution, UnsupportedReason};
use super::metrics::DxfMetrics;
use crate::config::AnalysisConfig;
use crate::entities::EntityType;
use crate::notification::{NotificationCollection, NotificationType};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Accumulates entity lengths, piercings and breakdowns.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    resolver: EntityGeometryResolver,
    classifier: ClosedContourClassifier,
    config: AnalysisConfig,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl MetricsAggregator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            resolver: EntityGeometryResolver::new(config),
            classifier: ClosedContourClassifier::new(config),
            config: config.clone(),
        }
    }

    pub fn resolver(&self) -> &EntityGeometryResolver {
        &self.resolver
    }

    pub fn classifier(&self) -> &ClosedContourClassifier {
        &self.classifier
    }

    /// Fold entities in order, counting each under its own layer
    pub fn fold(
        &self,
        filename: &str,
        entities: &[EntityType],
    ) -> (DxfMetrics, NotificationCollection) {
        self.fold_with_layers(filename, entities, EntityType::layer)
    }

    /// Fold entities in order with a caller-supplied layer accessor.
    ///
    /// An empty layer name counts under the configured default layer.
    pub fn fold_with_layers<F>(
        &self,
        filename: &str,
        entities: &[EntityType],
        layer_of: F,
    ) -> (DxfMetrics, NotificationCollection)
    where
        F: Fn(&EntityType) -> &str,
    {
        let mut metrics = DxfMetrics::new(filename);
        let mut notifications = NotificationCollection::new();
        for (index, entity) in entities.iter().enumerate() {
            self.accumulate(
                index,
                entity,
                layer_of(entity),
                &mut metrics,
                &mut notifications,
            );
        }
        debug!(
            filename,
            total_entities = metrics.total_entities,
            piercings = metrics.piercing_count,
            "Sequential fold complete"
        );
        (metrics, notifications)
    }

    /// Fold partitions on the rayon pool and merge the partial aggregates.
    ///
    /// Counters and maps equal those of [`fold`](Self::fold); float totals
    /// may differ in the last bits. Notifications keep input order.
    pub fn fold_parallel(
        &self,
        filename: &str,
        entities: &[EntityType],
    ) -> (DxfMetrics, NotificationCollection) {
        self.fold_parallel_with_layers(filename, entities, EntityType::layer)
    }

    /// Parallel counterpart of [`fold_with_layers`](Self::fold_with_layers)
    pub fn fold_parallel_with_layers<F>(
        &self,
        filename: &str,
        entities: &[EntityType],
        layer_of: F,
    ) -> (DxfMetrics, NotificationCollection)
    where
        F: Fn(&EntityType) -> &str + Sync,
    {
        let empty = || (DxfMetrics::new(filename), NotificationCollection::new());
        let (metrics, notifications) = entities
            .par_iter()
            .enumerate()
            .fold(empty, |(mut metrics, mut notifications), (index, entity)| {
                self.accumulate(
                    index,
                    entity,
                    layer_of(entity),
                    &mut metrics,
                    &mut notifications,
                );
                (metrics, notifications)
            })
            .reduce(empty, |(left, mut left_notes), (right, right_notes)| {
                left_notes.extend(right_notes);
                (left.merge(right), left_notes)
            });
        debug!(
            filename,
            total_entities = metrics.total_entities,
            piercings = metrics.piercing_count,
            "Parallel fold complete"
        );
        (metrics, notifications)
    }

    fn accumulate(
        &self,
        index: usize,
        entity: &EntityType,
        layer: &str,
        metrics: &mut DxfMetrics,
        notifications: &mut NotificationCollection,
    ) {
        let kind = entity.entity_type();
        let measurement = self.resolver.measure(entity);

        if let Some(err) = &measurement.flatten_error {
            warn!(index, kind, error = %err, "Flattening failed, length taken as zero");
            self.notify(
                notifications,
                NotificationType::FlatteningFailed,
                format!("#{index} {kind}: {err}"),
            );
        }

        let length = match measurement.resolution {
            Resolution::Length(length) => length,
            Resolution::Unsupported(UnsupportedReason::Kind(kind)) => {
                debug!(index, kind = %kind, "Skipping unsupported entity");
                self.notify(
                    notifications,
                    NotificationType::UnsupportedEntity,
                    format!("#{index} {kind}"),
                );
                return;
            }
            Resolution::Unsupported(UnsupportedReason::Malformed(err)) => {
                warn!(index, kind, error = %err, "Skipping malformed entity");
                self.notify(
                    notifications,
                    NotificationType::MalformedGeometry,
                    format!("#{index} {kind}: {err}"),
                );
                return;
            }
        };

        // Zero-length entities (points, degenerate curves) are never counted,
        // not even as piercings.
        if length <= 0.0 {
            debug!(index, kind, "Zero-length entity not counted");
            return;
        }

        metrics.add_entity(kind, length, self.config.layer_or_default(layer));
        if self.classifier.is_closed(entity) {
            metrics.add_piercing();
        }
    }

    fn notify(
        &self,
        notifications: &mut NotificationCollection,
        notification_type: NotificationType,
        message: String,
    ) {
        if self.config.collect_notifications {
            notifications.notify(notification_type, message);
        }
    }
}
