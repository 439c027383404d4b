//! The tree scanner / initializer.
//!
//! A single pre-order pass over the element tree: every attribute on every
//! element is classified against the binding micro-syntax; recognized
//! bindings are resolved through the type registry, constructed,
//! initialized, and wired into the event registry. An event's action list
//! order is exactly encounter order during the walk.
//!
//! The pass is not guarded against re-runs: scanning the same tree twice
//! creates duplicate bindings for already-bound elements.

use bindwire_core::{
    ActionBinding, Attribute, DynAction, DynTrigger, Element, EventHandler, EventLookup,
    TriggerBinding,
    syntax::{self, BindingKind},
};
use bindwire_std::registry::{EventRegistry, TypeRegistry};
use std::sync::Arc;

/// Summary of one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Elements visited.
    pub elements: usize,
    /// Trigger bindings instantiated and initialized.
    pub triggers: usize,
    /// Action bindings instantiated, initialized and registered.
    pub actions: usize,
    /// Recognized binding attributes skipped (unknown type, invalid event
    /// name, failed init). Silent syntax non-matches are not counted.
    pub skipped: usize,
}

pub(crate) struct Scanner<'a> {
    types: &'a TypeRegistry,
    events: &'a Arc<EventRegistry>,
    triggers: Vec<Arc<dyn DynTrigger>>,
    report: ScanReport,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(types: &'a TypeRegistry, events: &'a Arc<EventRegistry>) -> Self {
        Self {
            types,
            events,
            triggers: Vec::new(),
            report: ScanReport::default(),
        }
    }

    /// Walk the tree once, returning the report and the live trigger
    /// instances (the caller keeps them alive for the page's lifetime).
    pub(crate) fn scan(
        mut self,
        root: &Arc<dyn Element>,
    ) -> (ScanReport, Vec<Arc<dyn DynTrigger>>) {
        self.visit(root);
        (self.report, self.triggers)
    }

    fn visit(&mut self, element: &Arc<dyn Element>) {
        self.report.elements += 1;
        for attribute in element.attributes() {
            self.bind(element, &attribute);
        }
        for child in element.children() {
            self.visit(&child);
        }
    }

    fn bind(&mut self, element: &Arc<dyn Element>, attribute: &Attribute) {
        // Pattern non-match is silent: supplements and lookalikes produce
        // no diagnostic at all.
        let Some(binding) = syntax::classify(&attribute.name) else {
            return;
        };
        if !syntax::is_valid_event_name(&attribute.value) {
            tracing::warn!(
                attribute = %attribute.name,
                value = %attribute.value,
                "binding skipped: event name is not an identifier-like token"
            );
            self.report.skipped += 1;
            return;
        }
        match binding.kind {
            BindingKind::Trigger => self.bind_trigger(element, attribute, binding.type_name),
            BindingKind::Action => self.bind_action(element, attribute, binding.type_name),
        }
    }

    fn bind_trigger(&mut self, element: &Arc<dyn Element>, attribute: &Attribute, type_name: &str) {
        // Type lookup comes first: an unresolved binding never force-creates
        // its event.
        let Some(ctor) = self.types.trigger_type(type_name) else {
            tracing::warn!(
                attribute = %attribute.name,
                type_name,
                "unknown trigger type; binding ignored"
            );
            self.report.skipped += 1;
            return;
        };
        self.events.ensure(&attribute.value);
        let trigger = ctor(TriggerBinding::new(
            Arc::clone(element),
            attribute.value.clone(),
            attribute.name.clone(),
        ));
        let lookup: Arc<dyn EventLookup> = Arc::clone(self.events) as Arc<dyn EventLookup>;
        match Arc::clone(&trigger).init_dyn(lookup) {
            Ok(()) => {
                self.triggers.push(trigger);
                self.report.triggers += 1;
            }
            Err(error) => {
                tracing::warn!(attribute = %attribute.name, %error, "trigger initialization failed");
                self.report.skipped += 1;
            }
        }
    }

    fn bind_action(&mut self, element: &Arc<dyn Element>, attribute: &Attribute, type_name: &str) {
        let Some(ctor) = self.types.action_type(type_name) else {
            tracing::warn!(
                attribute = %attribute.name,
                type_name,
                "unknown action type; binding ignored"
            );
            self.report.skipped += 1;
            return;
        };
        let handler = self.events.ensure(&attribute.value);
        let action = ctor(ActionBinding::new(
            Arc::clone(element),
            attribute.name.clone(),
        ));
        match action.init_dyn() {
            Ok(()) => {
                handler.add_action(action);
                self.report.actions += 1;
            }
            Err(error) => {
                tracing::warn!(attribute = %attribute.name, %error, "action initialization failed");
                self.report.skipped += 1;
            }
        }
    }
}
