//! One-shot event broadcast.
//!
//! State is a continuous signal: late subscribers get the latest snapshot.
//! Notifications such as "show a toast" are not state; each one should be
//! seen by the subscribers that exist when it fires and by nobody else.
//! [`EventChannel`] is that second kind of signal.

use tokio::sync::broadcast;

/// Default number of events buffered per subscriber
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Cloneable, non-replaying broadcast of one-shot events
///
/// Events emitted while nobody is subscribed are dropped. A subscriber only
/// receives events emitted after it subscribed.
///
/// # Example
///
/// ```ignore
/// let channel = EventChannel::new(8);
/// let mut rx = channel.subscribe();
///
/// channel.emit(Notice::Saved);
/// assert_eq!(rx.recv().await?, Notice::Saved);
/// ```
#[derive(Debug, Clone)]
pub struct EventChannel<T> {
    sender: broadcast::Sender<T>,
}

impl<T> EventChannel<T>
where
    T: Clone + Send + 'static,
{
    /// Create a channel buffering up to `capacity` events per subscriber
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Emit an event to every current subscriber
    ///
    /// Returns how many subscribers it reached.
    pub fn emit(&self, event: T) -> usize {
        if let Ok(reached) = self.sender.send(event) {
            tracing::trace!(subscribers = reached, "Event emitted");
            metrics::counter!("events.emitted").increment(1);
            reached
        } else {
            tracing::debug!("Event dropped: no subscribers");
            metrics::counter!("events.dropped").increment(1);
            0
        }
    }

    /// Subscribe to events emitted from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> Default for EventChannel<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
