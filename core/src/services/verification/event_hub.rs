//! In-process listener registry
//!
//! Bridge implementations embed an `EventHub` and forward native events into
//! it with [`EventHub::emit`].

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{EventEmitter, EventHandler, ListenerId};

struct Listener {
    event: String,
    handler: Arc<dyn Fn(Value) + Send + Sync>,
}

/// Thread-safe [`EventEmitter`] delivering events to handlers in registration order
#[derive(Default)]
pub struct EventHub {
    listeners: Mutex<BTreeMap<ListenerId, Listener>>,
    next_id: AtomicU64,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a payload to every handler of `event`, returning how many ran
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        // Handlers run outside the lock so they may touch the hub themselves
        let handlers: Vec<_> = self
            .lock()
            .values()
            .filter(|listener| listener.event == event)
            .map(|listener| Arc::clone(&listener.handler))
            .collect();

        for handler in &handlers {
            handler(payload.clone());
        }

        tracing::trace!(event = event, delivered = handlers.len(), "Native event emitted");
        handlers.len()
    }

    /// Total number of registered handlers across all events
    pub fn total_listeners(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<ListenerId, Listener>> {
        self.listeners.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventEmitter for EventHub {
    fn add_listener(&self, event: &str, handler: EventHandler) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(
            id,
            Listener {
                event: event.to_string(),
                handler: Arc::from(handler),
            },
        );
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.lock().remove(&id);
    }

    fn listener_count(&self, event: &str) -> usize {
        self.lock().values().filter(|l| l.event == event).count()
    }
}
