//! The event registry: event names to handler instances.

use crate::handlers::ParallelHandler;
use bindwire_core::{EventHandler, EventLookup};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// A name→handler map. The handler instance is the registry's value and
/// owns the event's action list; at most one handler is associated with an
/// event name at any time.
#[derive(Default)]
pub struct EventRegistry {
    events: Mutex<HashMap<String, Arc<dyn EventHandler>>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a handler is registered under `name`.
    pub fn has_event(&self, name: &str) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// The handler registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<dyn EventHandler>> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Register a handler under `name`, unconditionally replacing any prior
    /// handler. The action list attached to the old instance becomes
    /// unreachable — there is no merge.
    pub fn register(&self, name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let name = name.into();
        let old = self
            .events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), handler);
        if let Some(old) = old {
            let dropped = old.action_count();
            if dropped > 0 {
                tracing::warn!(
                    event = %name,
                    dropped,
                    "event handler replaced; previously registered actions are no longer reachable"
                );
            }
        }
    }

    /// Return the handler under `name`, creating and registering a default
    /// parallel handler first if the event does not exist. Idempotent: an
    /// existing handler and its action list are left untouched.
    pub fn ensure(&self, name: &str) -> Arc<dyn EventHandler> {
        Arc::clone(
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(name.to_owned())
                .or_insert_with(|| Arc::new(ParallelHandler::new())),
        )
    }

    /// Names of all registered events.
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Total number of actions registered across all events.
    pub fn action_count(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|handler| handler.action_count())
            .sum()
    }

    /// Remove every registered event.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventLookup for EventRegistry {
    fn handler(&self, name: &str) -> Option<Arc<dyn EventHandler>> {
        self.get(name)
    }
}
