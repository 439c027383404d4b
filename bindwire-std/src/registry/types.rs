//! The type registry: binding-type names to constructors.

use bindwire_core::{ActionBinding, DynAction, DynTrigger, TriggerBinding};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Constructor for a trigger implementation.
pub type TriggerCtor = Arc<dyn Fn(TriggerBinding) -> Arc<dyn DynTrigger> + Send + Sync>;

/// Constructor for an action implementation.
pub type ActionCtor = Arc<dyn Fn(ActionBinding) -> Arc<dyn DynAction> + Send + Sync>;

/// Two independent name→constructor maps, one for trigger implementations
/// and one for action implementations.
///
/// Registering a name that already exists overwrites the prior entry — a
/// sharp edge callers must be aware of, surfaced as a `warn!` diagnostic
/// rather than an error.
#[derive(Default)]
pub struct TypeRegistry {
    triggers: Mutex<HashMap<String, TriggerCtor>>,
    actions: Mutex<HashMap<String, ActionCtor>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger type, overwriting any prior entry under `name`.
    pub fn register_trigger_type(&self, name: impl Into<String>, ctor: TriggerCtor) {
        let name = name.into();
        let replaced = self
            .triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), ctor)
            .is_some();
        if replaced {
            tracing::warn!(type_name = %name, "trigger type overwritten");
        }
    }

    /// Register an action type, overwriting any prior entry under `name`.
    pub fn register_action_type(&self, name: impl Into<String>, ctor: ActionCtor) {
        let name = name.into();
        let replaced = self
            .actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), ctor)
            .is_some();
        if replaced {
            tracing::warn!(type_name = %name, "action type overwritten");
        }
    }

    /// Resolve a trigger type constructor.
    pub fn trigger_type(&self, name: &str) -> Option<TriggerCtor> {
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Resolve an action type constructor.
    pub fn action_type(&self, name: &str) -> Option<ActionCtor> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Names of all registered trigger types.
    pub fn trigger_type_names(&self) -> Vec<String> {
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Names of all registered action types.
    pub fn action_type_names(&self) -> Vec<String> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Remove every registered type.
    pub fn clear(&self) {
        self.triggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::OccurrenceTrigger;

    #[test]
    fn missing_types_resolve_to_none() {
        let types = TypeRegistry::new();
        assert!(types.trigger_type("click").is_none());
        assert!(types.action_type("click").is_none());
    }

    #[test]
    fn registration_and_listing() {
        let types = TypeRegistry::new();
        types.register_trigger_type("click", OccurrenceTrigger::ctor());
        types.register_trigger_type("submit", OccurrenceTrigger::ctor());

        assert!(types.trigger_type("click").is_some());
        let mut names = types.trigger_type_names();
        names.sort();
        assert_eq!(names, vec!["click", "submit"]);

        types.clear();
        assert!(types.trigger_type("click").is_none());
    }

    #[test]
    fn re_registration_overwrites_silently() {
        let types = TypeRegistry::new();
        types.register_trigger_type("click", OccurrenceTrigger::ctor());
        types.register_trigger_type("click", OccurrenceTrigger::ctor());
        assert_eq!(types.trigger_type_names().len(), 1);
    }
}
