//! The ordered, awaited, error-tolerant event handler.

use bindwire_core::{DynAction, Element, EventHandler, TriggerData};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, PoisonError};

/// The sequential event handler.
///
/// `invoke` awaits each action's `trigger` to settle before starting the
/// next. A failing step is logged and the sequence proceeds to the next
/// action — one failure never aborts the remainder. The invocation is
/// complete once the last action has settled.
///
/// No timeout or cancellation is provided: an action that never settles
/// stalls all subsequent actions in that event indefinitely.
#[derive(Default)]
pub struct SequentialHandler {
    actions: Mutex<Vec<Arc<dyn DynAction>>>,
}

impl SequentialHandler {
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

impl EventHandler for SequentialHandler {
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
                if let Err(error) = action.trigger_dyn(element.clone(), data.clone()).await {
                    tracing::warn!(
                        attribute = action.binding_dyn().attribute_name(),
                        %error,
                        "action failed; continuing with the remaining actions"
                    );
                }
            }
        })
    }
}
