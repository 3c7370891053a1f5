use crate::domain::recommendation::{
    ports::Notifier,
    value_objects::{Notification, NotificationKind},
};

/// Writes notifications to the log. Used when no interactive display exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(emitted_at = %notification.emitted_at, "{}", notification.text)
            }
            NotificationKind::Failure => {
                tracing::warn!(emitted_at = %notification.emitted_at, "{}", notification.text)
            }
        }
    }
}
