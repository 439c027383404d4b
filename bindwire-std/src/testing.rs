//! Testing utilities for bindwire.
//!
//! This module provides fakes for exercising the engine without a real
//! document tree:
//!
//! - [`SyntheticElement`]: an in-memory [`Element`] with manual occurrence delivery
//! - [`ActionLog`]: a shared, ordered record of action activity
//! - [`RecordingAction`]: an action that records a label (optionally after a delay)
//! - [`FailingAction`]: an action that records, then fails
//! - [`CapturingAction`]: an action that captures the data snapshots it receives

use crate::registry::ActionCtor;
use bindwire_core::{
    Action, ActionBinding, Attribute, BoxError, Element, OccurrenceHandler, TriggerData,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

// ============================================================================
// Synthetic Element
// ============================================================================

/// An in-memory element: ordered attributes, children, and per-occurrence
/// subscriber lists driven manually from tests.
///
/// # Example
///
/// ```rust,ignore
/// let element = SyntheticElement::with_attributes([
///     ("trigger:click", "go"),
///     ("trigger:click:data:id", "42"),
/// ]);
///
/// engine.initialize(&(element.clone() as Arc<dyn Element>));
/// element.emit("click").await;
/// ```
#[derive(Default)]
pub struct SyntheticElement {
    attributes: Mutex<Vec<Attribute>>,
    children: Mutex<Vec<Arc<dyn Element>>>,
    subscribers: Mutex<HashMap<String, Vec<OccurrenceHandler>>>,
}

impl SyntheticElement {
    /// Create an element with no attributes or children.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create an element carrying the given attributes, in order.
    pub fn with_attributes<I, K, V>(attributes: I) -> Arc<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let element = Self::default();
        *element.attributes.lock().unwrap() = attributes
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect();
        Arc::new(element)
    }

    /// Append a child element.
    pub fn append_child(&self, child: Arc<dyn Element>) {
        self.children.lock().unwrap().push(child);
    }

    /// Deliver a named occurrence, driving each subscribed handler to
    /// completion in subscription order.
    pub async fn emit(&self, occurrence: &str) {
        let handlers: Vec<OccurrenceHandler> = self
            .subscribers
            .lock()
            .unwrap()
            .get(occurrence)
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler().await;
        }
    }

    /// Number of handlers subscribed to a named occurrence.
    pub fn subscriber_count(&self, occurrence: &str) -> usize {
        self.subscribers
            .lock()
            .unwrap()
            .get(occurrence)
            .map_or(0, Vec::len)
    }
}

impl Element for SyntheticElement {
    fn attributes(&self) -> Vec<Attribute> {
        self.attributes.lock().unwrap().clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .lock()
            .unwrap()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut attributes = self.attributes.lock().unwrap();
        match attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value.to_owned(),
            None => attributes.push(Attribute::new(name, value)),
        }
    }

    fn children(&self) -> Vec<Arc<dyn Element>> {
        self.children.lock().unwrap().clone()
    }

    fn subscribe(&self, occurrence: &str, handler: OccurrenceHandler) {
        self.subscribers
            .lock()
            .unwrap()
            .entry(occurrence.to_owned())
            .or_default()
            .push(handler);
    }
}

// ============================================================================
// Action Log
// ============================================================================

/// A shared, ordered record of action activity.
#[derive(Clone, Default)]
pub struct ActionLog(Arc<Mutex<Vec<String>>>);

impl ActionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    /// Get a clone of the recorded entries, in order.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

// ============================================================================
// Recording Action
// ============================================================================

/// An action that records its label into a shared log when triggered.
///
/// With a delay set, the label is recorded only after the delay elapses —
/// useful for distinguishing "issued" from "settled" in handler tests.
pub struct RecordingAction {
    binding: ActionBinding,
    label: String,
    log: ActionLog,
    delay: Option<Duration>,
}

impl RecordingAction {
    /// Create an element-less recording action.
    pub fn programmatic(label: impl Into<String>, log: ActionLog) -> Self {
        let label = label.into();
        Self {
            binding: ActionBinding::programmatic(format!("action:{label}")),
            label,
            log,
            delay: None,
        }
    }

    /// Record the label only after the given delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// A constructor suitable for type-registry registration; every
    /// constructed instance records `label` into `log`.
    pub fn ctor(label: &str, log: &ActionLog) -> ActionCtor {
        let label = label.to_owned();
        let log = log.clone();
        Arc::new(move |binding| {
            Arc::new(RecordingAction {
                binding,
                label: label.clone(),
                log: log.clone(),
                delay: None,
            })
        })
    }
}

impl Action for RecordingAction {
    fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    async fn trigger(
        &self,
        _element: Option<Arc<dyn Element>>,
        _data: TriggerData,
    ) -> Result<(), BoxError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.log.push(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Action
// ============================================================================

/// An action that records its label, then fails.
pub struct FailingAction {
    binding: ActionBinding,
    label: String,
    log: ActionLog,
}

impl FailingAction {
    /// Create an element-less failing action.
    pub fn programmatic(label: impl Into<String>, log: ActionLog) -> Self {
        let label = label.into();
        Self {
            binding: ActionBinding::programmatic(format!("action:{label}")),
            label,
            log,
        }
    }
}

impl Action for FailingAction {
    fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    async fn trigger(
        &self,
        _element: Option<Arc<dyn Element>>,
        _data: TriggerData,
    ) -> Result<(), BoxError> {
        self.log.push(self.label.clone());
        Err(format!("action `{}` failed intentionally", self.label).into())
    }
}

// ============================================================================
// Capturing Action
// ============================================================================

/// An action that captures every data snapshot it receives.
pub struct CapturingAction {
    binding: ActionBinding,
    seen: Arc<Mutex<Vec<TriggerData>>>,
}

impl CapturingAction {
    /// Create an element-less capturing action.
    pub fn programmatic() -> Self {
        Self {
            binding: ActionBinding::programmatic("action:capture"),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A constructor suitable for type-registry registration; every
    /// constructed instance shares the returned snapshot store.
    pub fn ctor() -> (ActionCtor, Arc<Mutex<Vec<TriggerData>>>) {
        let seen: Arc<Mutex<Vec<TriggerData>>> = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::clone(&seen);
        let ctor: ActionCtor = Arc::new(move |binding| {
            Arc::new(CapturingAction {
                binding,
                seen: Arc::clone(&shared),
            })
        });
        (ctor, seen)
    }

    /// Get a clone of the captured snapshots, in order.
    pub fn snapshots(&self) -> Vec<TriggerData> {
        self.seen.lock().unwrap().clone()
    }
}

impl Action for CapturingAction {
    fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    async fn trigger(
        &self,
        _element: Option<Arc<dyn Element>>,
        data: TriggerData,
    ) -> Result<(), BoxError> {
        self.seen.lock().unwrap().push(data);
        Ok(())
    }
}
