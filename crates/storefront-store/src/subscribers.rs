//! # Subscribers
//!
//! Change notification for views that mirror the cart.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  view mounts   ──► store.subscribe(cb)  ──► Subscription { id }        │
//! │  cart mutates  ──► notify()             ──► cb() for every entry       │
//! │  view unmounts ──► subscription.unsubscribe()  (idempotent)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callbacks are invoked in registration order, synchronously, after the
//! registry lock is released. A callback may read the store; a callback that
//! mutates the store triggers another round of notification, and it is up to
//! the caller not to loop forever.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::trace;

/// A registered change callback.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// The set of registered callbacks.
#[derive(Default)]
pub struct SubscriberRegistry {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Callback)>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        SubscriberRegistry::default()
    }

    /// Registers `callback`. Every call creates an independent registration,
    /// even for the same closure.
    pub fn subscribe(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));

        trace!(subscription_id = id, "Subscriber registered");
        Subscription {
            id,
            registry: Arc::downgrade(self),
        }
    }

    /// Invokes every registered callback once.
    pub fn notify(&self) {
        // Clone out so callbacks can subscribe/unsubscribe without deadlocking
        let callbacks: Vec<Callback> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        trace!(count = callbacks.len(), "Notifying subscribers");
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping it does NOT unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    registry: Weak<SubscriberRegistry>,
}

impl Subscription {
    /// Deregisters exactly this registration.
    ///
    /// Safe to call more than once, and after the store is gone.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.remove(self.id) {
                trace!(subscription_id = self.id, "Subscriber removed");
            }
        }
    }
}
