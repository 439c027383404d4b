//! Action binding contract.

use crate::{
    data::TriggerData,
    element::Element,
    error::{BindError, BoxError},
};
use std::{future::Future, pin::Pin, sync::Arc};

/// Identity and context shared by every action implementation.
///
/// Unlike a trigger, an action may have no element at all: programmatic
/// registration anchors the binding to an event name only.
pub struct ActionBinding {
    element: Option<Arc<dyn Element>>,
    attribute: String,
}

impl ActionBinding {
    /// An action discovered on an element during the scan pass.
    pub fn new(element: Arc<dyn Element>, attribute: impl Into<String>) -> Self {
        Self {
            element: Some(element),
            attribute: attribute.into(),
        }
    }

    /// An action registered programmatically, with no owning element.
    pub fn programmatic(attribute: impl Into<String>) -> Self {
        Self {
            element: None,
            attribute: attribute.into(),
        }
    }

    /// The owning element, if the action has one.
    pub fn element(&self) -> Option<&Arc<dyn Element>> {
        self.element.as_ref()
    }

    /// The full binding attribute name, e.g. `action:delete`.
    pub fn attribute_name(&self) -> &str {
        &self.attribute
    }
}

/// The behavioral contract for action implementations.
///
/// This trait uses native `async fn` for static dispatch; registries and
/// handlers store the object-safe [`DynAction`] companion, implemented
/// automatically for every `Action`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid action binding",
    label = "missing `Action` implementation",
    note = "Implement `Action` with a `trigger` method performing the effect."
)]
pub trait Action: Send + Sync + 'static {
    /// The binding this action was constructed from.
    fn binding(&self) -> &ActionBinding;

    /// One-time setup. Nothing here runs on the invocation path.
    fn init(&self) -> Result<(), BindError> {
        Ok(())
    }

    /// Perform the effect.
    ///
    /// `element` is the *triggering* element, not necessarily the action's
    /// own — actions observe trigger data but act on their own context.
    fn trigger(
        &self,
        element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Action`].
pub trait DynAction: Send + Sync + 'static {
    /// The binding this action was constructed from.
    fn binding_dyn(&self) -> &ActionBinding;

    /// One-time setup (dynamic dispatch version).
    fn init_dyn(&self) -> Result<(), BindError>;

    /// Perform the effect (dynamic dispatch version).
    fn trigger_dyn<'a>(
        &'a self,
        element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any Action is a DynAction.
impl<T: Action> DynAction for T {
    fn binding_dyn(&self) -> &ActionBinding {
        self.binding()
    }

    fn init_dyn(&self) -> Result<(), BindError> {
        self.init()
    }

    fn trigger_dyn<'a>(
        &'a self,
        element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.trigger(element, data))
    }
}
