/**
 * Collaboration Broadcaster
 *
 * Fans each published collaboration event out to every open stream.
 *
 * # Subscribers
 *
 * Every stream owns one unbounded `tokio::sync::mpsc` channel. The sending
 * halves live in a map keyed by a per-broadcaster counter, guarded by a
 * `parking_lot::Mutex`. Subscribe, unsubscribe and publish each hold the
 * lock for a short, non-suspending critical section, so any interleaving of
 * the three is serializable.
 *
 * # Lifecycle
 *
 * [`CollabBroadcaster::subscribe`] returns a [`Subscription`] guard. Dropping
 * the guard removes its channel from the set, which covers client
 * disconnects, handler errors, task cancellation and server shutdown alike.
 *
 * # Delivery
 *
 * Best effort. A publish serializes the event once and tries every channel;
 * a channel whose receiver is gone is dropped from the set and the failure
 * never reaches the publisher. Per subscriber, events arrive in publish
 * order. Queues are unbounded: a stalled reader grows its queue until it
 * disconnects.
 */

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::shared::CollabEvent;

type SubscriberId = u64;

#[derive(Debug, Default)]
struct Subscribers {
    channels: Mutex<HashMap<SubscriberId, mpsc::UnboundedSender<String>>>,
    next_id: AtomicU64,
}

/// Process-wide set of collaboration subscribers
///
/// Cloning is cheap; all clones share the same subscriber set. Construct
/// one at startup and hand it to handlers through router state.
///
/// # Example
///
/// ```rust
/// use translation_hub::backend::realtime::CollabBroadcaster;
/// use translation_hub::shared::CollabEvent;
///
/// # async fn example() {
/// let broadcaster = CollabBroadcaster::new();
/// let mut subscription = broadcaster.subscribe();
///
/// broadcaster.publish(&CollabEvent::new("c1", "alice", "hi")).unwrap();
/// let message = subscription.recv().await.unwrap();
/// assert!(message.contains("alice"));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollabBroadcaster {
    inner: Arc<Subscribers>,
}

impl CollabBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    ///
    /// The returned subscription sees every event published after this call
    /// and nothing published before it.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let active = {
            let mut channels = self.inner.channels.lock();
            channels.insert(id, tx);
            channels.len()
        };
        tracing::info!("[Collab] Subscriber {} joined ({} active)", id, active);

        Subscription {
            id,
            receiver: rx,
            broadcaster: self.clone(),
        }
    }

    /// Remove a subscriber. Removing an unknown or already removed id is a
    /// no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        let removed = self.inner.channels.lock().remove(&id).is_some();
        if removed {
            tracing::info!("[Collab] Subscriber {} left", id);
        }
    }

    /// Send `event` to every current subscriber
    ///
    /// Returns the number of subscribers the message was queued for. The
    /// only error is failing to serialize the event.
    pub fn publish(&self, event: &CollabEvent) -> Result<usize, serde_json::Error> {
        let message = serde_json::to_string(event)?;
        Ok(self.publish_raw(message))
    }

    fn publish_raw(&self, message: String) -> usize {
        let mut channels = self.inner.channels.lock();
        let before = channels.len();
        channels.retain(|id, tx| {
            let delivered = tx.send(message.clone()).is_ok();
            if !delivered {
                tracing::debug!("[Collab] Dropping broken subscriber {}", id);
            }
            delivered
        });
        let delivered = channels.len();

        tracing::debug!(
            "[Collab] Event queued for {} subscribers ({} dropped)",
            delivered,
            before - delivered
        );
        delivered
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner.channels.lock().len()
    }

    /// Drop every subscriber channel so that open streams end
    ///
    /// Used during shutdown. Subscriptions taken afterwards work normally.
    pub fn close(&self) {
        let closed = {
            let mut channels = self.inner.channels.lock();
            let count = channels.len();
            channels.clear();
            count
        };
        tracing::info!("[Collab] Closed {} subscriber streams", closed);
    }
}

/// Receiving end of one collaboration stream
///
/// Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    receiver: mpsc::UnboundedReceiver<String>,
    broadcaster: CollabBroadcaster,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next serialized event
    ///
    /// Returns `None` once the broadcaster has dropped this subscriber's
    /// channel (after [`CollabBroadcaster::close`]).
    pub async fn recv(&mut self) -> Option<String> {
        self.receiver.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.broadcaster.unsubscribe(self.id);
    }
}
