use tokio::sync::mpsc;

use crate::domain::recommendation::{ports::Notifier, value_objects::Notification};

/// Forwards notifications to whoever owns the receiving end, typically the
/// front end's display loop.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::debug!("notification receiver dropped, discarding notification");
        }
    }
}
