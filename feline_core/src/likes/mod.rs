//! Like counter and the notification seam it reports through.

use feline_catalog::NotificationText;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A transient acknowledgment for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Receives notifications. Nothing flows back to the caller.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        info!(title = %notification.title, message = %notification.message, "notification");
    }
}

/// Collects notifications in order.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Forwards notifications to a listener; a gone listener is ignored.
impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&mut self, notification: Notification) {
        if self.send(notification).is_err() {
            debug!("notification listener gone, dropping notification");
        }
    }
}

/// Monotonic like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LikeCounter {
    count: u64,
}

impl Notification {
    /// Create a notification.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&NotificationText> for Notification {
    fn from(text: &NotificationText) -> Self {
        Self::new(text.title.clone(), text.message.clone())
    }
}

impl LikeCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current like count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Increment and emit one notification. No debounce.
    pub fn like(&mut self, text: &NotificationText, notifier: &mut dyn Notifier) -> u64 {
        self.count = self.count.saturating_add(1);
        debug!(count = self.count, "liked");
        notifier.notify(Notification::from(text));
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_likes_n_notifications() {
        let text = NotificationText::default();
        let mut counter = LikeCounter::new();
        let mut sent: Vec<Notification> = Vec::new();

        for n in 1..=25 {
            assert_eq!(counter.like(&text, &mut sent), n);
        }

        assert_eq!(counter.count(), 25);
        assert_eq!(sent.len(), 25);
        assert!(sent.iter().all(|n| n.title == "Thanks for the love!"));
    }

    #[test]
    fn test_channel_notifier() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        let mut counter = LikeCounter::new();
        let text = NotificationText {
            title: "Purr".into(),
            message: "Again".into(),
        };

        counter.like(&text, &mut tx);
        assert_eq!(rx.try_recv().unwrap(), Notification::new("Purr", "Again"));

        drop(rx);
        counter.like(&text, &mut tx);
        assert_eq!(counter.count(), 2);
    }
}
