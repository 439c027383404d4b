//! The engine façade: one explicit root context per application instance.

use crate::scan::{ScanReport, Scanner};
use bindwire_core::{
    ActionBinding, BindError, DynAction, DynTrigger, Element, EngineError, EventHandler, syntax,
};
use bindwire_std::registry::{ActionCtor, EventRegistry, TriggerCtor, TypeRegistry};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

/// The root context of a bindwire instance.
///
/// Owns the type registry, the event registry, and the trigger instances
/// bound during the scan pass. There is no global state: multiple
/// independent engines can coexist in one process (test harnesses rely on
/// this).
///
/// Typical host sequence: register trigger/action types, optionally
/// install non-default handlers via [`Engine::register_event`], then call
/// [`Engine::initialize`] once the document tree is fully present.
#[derive(Default)]
pub struct Engine {
    types: TypeRegistry,
    events: Arc<EventRegistry>,
    triggers: Mutex<Vec<Arc<dyn DynTrigger>>>,
    scanned: AtomicBool,
}

impl Engine {
    /// Create an engine with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger implementation under a binding type name.
    pub fn register_trigger_type(&self, name: impl Into<String>, ctor: TriggerCtor) {
        self.types.register_trigger_type(name, ctor);
    }

    /// Register an action implementation under a binding type name.
    pub fn register_action_type(&self, name: impl Into<String>, ctor: ActionCtor) {
        self.types.register_action_type(name, ctor);
    }

    /// Install a handler for an event name, replacing any prior handler
    /// (and discarding its action list). Use this before
    /// [`Engine::initialize`] to give an event a non-default strategy such
    /// as [`bindwire_std::handlers::SequentialHandler`].
    pub fn register_event(&self, name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.events.register(name, handler);
    }

    /// Register an action against an event name without any backing
    /// element — for actions whose purpose is a pure side effect.
    ///
    /// The binding attribute is synthesized as `action:<type_name>`; the
    /// event is created with the default handler if absent.
    pub fn register_programmatic_action(
        &self,
        type_name: &str,
        event_name: &str,
        ctor: ActionCtor,
    ) -> Result<(), EngineError> {
        if !syntax::is_valid_event_name(event_name) {
            return Err(BindError::InvalidEventName(event_name.to_owned()).into());
        }
        let binding =
            ActionBinding::programmatic(format!("{}:{}", syntax::ACTION_NAMESPACE, type_name));
        let action = ctor(binding);
        action.init_dyn().map_err(EngineError::Bind)?;
        self.events.ensure(event_name).add_action(action);
        Ok(())
    }

    /// Run the tree scanner over `root`, wiring every recognized binding.
    ///
    /// The host guarantees the tree is fully present before calling this.
    /// There is no re-run guard: a second call re-scans the whole tree and
    /// creates duplicate bindings for already-bound elements.
    pub fn initialize(&self, root: &Arc<dyn Element>) -> ScanReport {
        if self.scanned.swap(true, Ordering::SeqCst) {
            tracing::warn!("tree already scanned; re-running duplicates existing bindings");
        }
        let (report, triggers) = Scanner::new(&self.types, &self.events).scan(root);
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(triggers);
        tracing::debug!(?report, "tree scan complete");
        report
    }

    /// The event registry, for host-side inspection.
    pub fn events(&self) -> &Arc<EventRegistry> {
        &self.events
    }

    /// Names of all registered trigger types.
    pub fn trigger_type_names(&self) -> Vec<String> {
        self.types.trigger_type_names()
    }

    /// Names of all registered action types.
    pub fn action_type_names(&self) -> Vec<String> {
        self.types.action_type_names()
    }

    /// Names of all currently registered events.
    pub fn event_names(&self) -> Vec<String> {
        self.events.names()
    }

    /// Number of live trigger instances bound by the scanner.
    pub fn trigger_count(&self) -> usize {
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of live action instances across all events.
    pub fn action_count(&self) -> usize {
        self.events.action_count()
    }

    /// Clear both registries and drop all live triggers, allowing a host
    /// (or test harness) to re-initialize from scratch.
    pub fn reset(&self) {
        self.types.clear();
        self.events.clear();
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.scanned.store(false, Ordering::SeqCst);
    }
}
