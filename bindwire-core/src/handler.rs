//! Event handler contract and the handler lookup seam.

use crate::{action::DynAction, data::TriggerData, element::Element};
use std::{future::Future, pin::Pin, sync::Arc};

/// The object responsible for fanning an event out to its actions.
///
/// A handler instance *is* the event registry's value for an event name:
/// it owns the ordered action list and the execution strategy. Replacing
/// the handler for a name discards the action list attached to the old
/// instance.
///
/// `invoke` never reports an error to the caller; what happens to a
/// failing action is the strategy's business (swallowed by the parallel
/// strategy, contained and logged by the sequential one).
///
/// Handlers snapshot their action list before fanning out, so registration
/// during an in-flight invocation cannot corrupt the fan-out — it is still
/// forbidden by convention, and added actions are not seen until the next
/// invocation.
pub trait EventHandler: Send + Sync + 'static {
    /// Append an action, preserving insertion order.
    fn add_action(&self, action: Arc<dyn DynAction>);

    /// Number of actions currently registered on this handler.
    fn action_count(&self) -> usize;

    /// Fan the invocation out to the registered actions.
    ///
    /// `element` is the *triggering* element (absent for programmatic
    /// invocations), `data` the freshly composed payload.
    fn invoke<'a>(
        &'a self,
        element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// A source of event handlers by name.
///
/// This seam lets the trigger contract resolve its target event without
/// depending on a concrete registry implementation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve event handlers",
    label = "missing `EventLookup` implementation",
    note = "Implement `EventLookup` to let triggers resolve their target event by name."
)]
pub trait EventLookup: Send + Sync {
    /// Resolve the handler registered under `name`, if any.
    fn handler(&self, name: &str) -> Option<Arc<dyn EventHandler>>;
}
