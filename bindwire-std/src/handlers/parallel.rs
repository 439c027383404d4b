//! The fire-and-forget event handler.

use bindwire_core::{DynAction, Element, EventHandler, TriggerData};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, PoisonError};

/// The default ("fire and forget") event handler.
///
/// `invoke` iterates the action list in registration order and spawns each
/// action's `trigger` as a detached task, returning as soon as every task
/// has been issued — never awaiting any of them. Completions of different
/// actions may interleave arbitrarily once control returns to the
/// scheduler.
///
/// Failures inside spawned actions are unobservable by design: the task
/// drops the action's `Result`. Awaiting here would trade away the low
/// latency this handler exists for.
///
/// Requires a tokio runtime at invocation time.
#[derive(Default)]
pub struct ParallelHandler {
    actions: Mutex<Vec<Arc<dyn DynAction>>>,
}

impl ParallelHandler {
    /// Create a handler with an empty action list.
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Vec<Arc<dyn DynAction>> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventHandler for ParallelHandler {
    fn add_action(&self, action: Arc<dyn DynAction>) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    fn action_count(&self) -> usize {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn invoke<'a>(
        &'a self,
        element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> BoxFuture<'a, ()> {
        let actions = self.snapshot();
        Box::pin(async move {
            if actions.is_empty() {
                tracing::debug!("event invoked with no registered actions");
                return;
            }
            for action in actions {
                let element = element.clone();
                let data = data.clone();
                tokio::spawn(async move {
                    // Unobserved by design.
                    let _ = action.trigger_dyn(element, data).await;
                });
            }
        })
    }
}
