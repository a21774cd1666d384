//! Analysis notification / diagnostic system.
//!
//! Non-fatal issues encountered while measuring a drawing are collected as
//! `Notification` items rather than being silently dropped or aborting the
//! fold. Each one names the entity index and kind it concerns.
//!
//! After an analysis run the caller can inspect
//! [`Analysis::notifications`](crate::analysis::Analysis) to see what was
//! encountered.

use serde::Serialize;
use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NotificationType {
    /// Entity kind has no cutting length (text, dimension, hatch, ...).
    UnsupportedEntity,
    /// A required geometry field held an unusable value.
    MalformedGeometry,
    /// A curve could not be flattened; its length was taken as zero.
    FlatteningFailed,
    /// Any other non-fatal condition.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEntity => write!(f, "UnsupportedEntity"),
            Self::MalformedGeometry => write!(f, "MalformedGeometry"),
            Self::FlatteningFailed => write!(f, "FlatteningFailed"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced during analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Append every notification of `other`, keeping its order.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
