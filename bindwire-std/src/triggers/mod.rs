//! Standard trigger implementations.

use crate::registry::TriggerCtor;
use bindwire_core::{BindError, Element, EventLookup, OccurrenceHandler, Trigger, TriggerBinding};
use std::sync::Arc;

/// The canonical trigger: its binding type token *is* the occurrence name.
///
/// `trigger:click="go"` subscribes to the owning element's `"click"`
/// occurrence; each time it fires, the trigger composes a fresh data
/// snapshot and invokes the `go` event.
pub struct OccurrenceTrigger {
    binding: TriggerBinding,
}

impl OccurrenceTrigger {
    /// Create a trigger for the given binding.
    pub fn new(binding: TriggerBinding) -> Self {
        Self { binding }
    }

    /// A constructor suitable for type-registry registration.
    pub fn ctor() -> TriggerCtor {
        Arc::new(|binding| Arc::new(OccurrenceTrigger::new(binding)))
    }
}

impl Trigger for OccurrenceTrigger {
    fn binding(&self) -> &TriggerBinding {
        &self.binding
    }

    fn init(self: Arc<Self>, events: Arc<dyn EventLookup>) -> Result<(), BindError> {
        let occurrence = self
            .binding
            .type_token()
            .ok_or_else(|| BindError::NotABinding(self.binding.attribute_name().to_owned()))?
            .to_owned();

        let trigger = Arc::clone(&self);
        let handler: OccurrenceHandler = Arc::new(move || {
            let trigger = Arc::clone(&trigger);
            let events = Arc::clone(&events);
            Box::pin(async move {
                if let Err(error) = trigger.invoke(events.as_ref()).await {
                    tracing::error!(
                        event = trigger.binding.event_name(),
                        %error,
                        "trigger invocation failed"
                    );
                }
            })
        });
        self.binding.element().subscribe(&occurrence, handler);
        Ok(())
    }
}
