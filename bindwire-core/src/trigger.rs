//! Trigger binding contract and the data-composition routine.

use crate::{
    data::TriggerData,
    element::Element,
    error::{BindError, InvokeError},
    handler::{EventHandler, EventLookup},
    syntax,
};
use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

/// Identity and context shared by every trigger implementation.
///
/// A trigger is identified by its full attribute name, its target event
/// name, and its owning element. It is created once during the scan pass
/// and lives for the process lifetime of the page.
pub struct TriggerBinding {
    element: Arc<dyn Element>,
    event: String,
    attribute: String,
}

impl TriggerBinding {
    /// Create a binding for an element's trigger attribute.
    pub fn new(
        element: Arc<dyn Element>,
        event: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            element,
            event: event.into(),
            attribute: attribute.into(),
        }
    }

    /// The owning element.
    pub fn element(&self) -> &Arc<dyn Element> {
        &self.element
    }

    /// The target event name (the binding attribute's value).
    pub fn event_name(&self) -> &str {
        &self.event
    }

    /// The full binding attribute name, e.g. `trigger:click`.
    pub fn attribute_name(&self) -> &str {
        &self.attribute
    }

    /// The binding type token, e.g. `click` for `trigger:click`.
    pub fn type_token(&self) -> Option<&str> {
        syntax::classify(&self.attribute).map(|attr| attr.type_name)
    }

    /// Compose the base data map from the element's `:data:` supplements.
    ///
    /// Enumerates every attribute on the owning element; for each whose
    /// name starts with `<own-attribute-name>:data:`, the stripped suffix
    /// is the key and the attribute's literal text the value. The result
    /// is always a fresh snapshot.
    pub fn compose_data(&self) -> TriggerData {
        let mut data = TriggerData::new();
        let prefix = format!("{}:{}:", self.attribute, syntax::DATA_KIND);
        for attr in self.element.attributes() {
            if let Some(key) = attr.name.strip_prefix(&prefix) {
                if !key.is_empty() {
                    data.insert(key, attr.value);
                }
            }
        }
        data
    }

    /// Collect an extended supplement kind the same way `:data:` entries
    /// are collected, e.g. `compose_supplement("header")` gathers
    /// `trigger:submit:header:<name>` attributes.
    ///
    /// Richer trigger types override [`Trigger::compose`] and merge the
    /// result into the payload's supplement field.
    pub fn compose_supplement(&self, kind: &str) -> HashMap<String, String> {
        let mut entries = HashMap::new();
        let prefix = format!("{}:{}:", self.attribute, kind);
        for attr in self.element.attributes() {
            if let Some(key) = attr.name.strip_prefix(&prefix) {
                if !key.is_empty() {
                    entries.insert(key.to_owned(), attr.value);
                }
            }
        }
        entries
    }
}

/// The behavioral contract for trigger implementations.
///
/// Two states: *uninitialized* → *active*. [`Trigger::init`] transitions
/// to active by attaching to whatever platform occurrence the binding type
/// represents and arranging that occurrence to drive [`Trigger::invoke`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid trigger binding",
    label = "missing `Trigger` implementation",
    note = "Implement `Trigger` with an `init` method attaching to a platform occurrence."
)]
pub trait Trigger: Send + Sync + 'static {
    /// The binding this trigger was constructed from.
    fn binding(&self) -> &TriggerBinding;

    /// Attach to the platform occurrence this binding represents.
    fn init(self: Arc<Self>, events: Arc<dyn EventLookup>) -> Result<(), BindError>;

    /// Compose the per-invocation payload.
    ///
    /// The default is the base `:data:` composition; override to merge
    /// structured extras onto the base result.
    fn compose(&self) -> TriggerData {
        self.binding().compose_data()
    }

    /// Compose fresh data, resolve the target event and invoke its handler.
    ///
    /// The event must already exist — the initializer guarantees this at
    /// setup time, so a miss here is a programming error.
    fn invoke<'a>(
        &'a self,
        events: &'a dyn EventLookup,
    ) -> impl Future<Output = Result<(), InvokeError>> + Send + 'a {
        async move {
            let data = self.compose();
            let binding = self.binding();
            let handler = events
                .handler(binding.event_name())
                .ok_or_else(|| InvokeError::MissingEvent(binding.event_name().to_owned()))?;
            handler.invoke(Some(Arc::clone(binding.element())), data).await;
            Ok(())
        }
    }
}

/// Dynamic object-safe version of [`Trigger`].
pub trait DynTrigger: Send + Sync + 'static {
    /// The binding this trigger was constructed from.
    fn binding_dyn(&self) -> &TriggerBinding;

    /// Attach to the platform occurrence (dynamic dispatch version).
    fn init_dyn(self: Arc<Self>, events: Arc<dyn EventLookup>) -> Result<(), BindError>;

    /// Compose data and invoke the target event (dynamic dispatch version).
    fn invoke_dyn<'a>(
        &'a self,
        events: &'a dyn EventLookup,
    ) -> Pin<Box<dyn Future<Output = Result<(), InvokeError>> + Send + 'a>>;
}

// Blanket implementation: any Trigger is a DynTrigger.
impl<T: Trigger> DynTrigger for T {
    fn binding_dyn(&self) -> &TriggerBinding {
        self.binding()
    }

    fn init_dyn(self: Arc<Self>, events: Arc<dyn EventLookup>) -> Result<(), BindError> {
        Trigger::init(self, events)
    }

    fn invoke_dyn<'a>(
        &'a self,
        events: &'a dyn EventLookup,
    ) -> Pin<Box<dyn Future<Output = Result<(), InvokeError>> + Send + 'a>> {
        Box::pin(self.invoke(events))
    }
}
