use bindwire::testing::{CapturingAction, SyntheticElement};
use bindwire::{
    BindError, DynAction, Element, Engine, EventHandler, EventLookup, EventRegistry, InvokeError,
    OccurrenceTrigger, SequentialHandler, Trigger, TriggerBinding, TriggerData,
};
use std::sync::Arc;

mod common;
use common::as_root;

fn binding_for(element: &Arc<SyntheticElement>, event: &str, attribute: &str) -> TriggerBinding {
    TriggerBinding::new(as_root(element), event, attribute)
}

#[test]
fn no_data_attributes_compose_to_an_empty_map() {
    let element = SyntheticElement::with_attributes([("trigger:click", "e1")]);
    let data = binding_for(&element, "e1", "trigger:click").compose_data();
    assert!(data.is_empty());
}

#[test]
fn data_suffixed_attributes_become_entries() {
    let element = SyntheticElement::with_attributes([
        ("trigger:click", "e1"),
        ("trigger:click:data:id", "42"),
        ("trigger:click:data:color", "red"),
        ("unrelated", "x"),
    ]);
    let data = binding_for(&element, "e1", "trigger:click").compose_data();

    assert_eq!(data.len(), 2);
    assert_eq!(data.get("id"), Some("42"));
    assert_eq!(data.get("color"), Some("red"));
    // The binding attribute itself never appears as a key.
    assert_eq!(data.get("trigger:click"), None);
}

#[test]
fn supplements_are_collected_by_kind() {
    let element = SyntheticElement::with_attributes([
        ("trigger:submit", "save"),
        ("trigger:submit:data:id", "7"),
        ("trigger:submit:header:x-token", "abc"),
    ]);
    let binding = binding_for(&element, "save", "trigger:submit");

    let headers = binding.compose_supplement("header");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("x-token").map(String::as_str), Some("abc"));

    // Header entries never leak into the base data map.
    let data = binding.compose_data();
    assert_eq!(data.get("x-token"), None);
    assert_eq!(data.get("id"), Some("7"));
}

#[tokio::test]
async fn each_invocation_observes_a_fresh_snapshot() {
    let element = SyntheticElement::with_attributes([
        ("trigger:click", "go"),
        ("trigger:click:data:id", "1"),
    ]);

    let engine = Engine::new();
    engine.register_trigger_type("click", OccurrenceTrigger::ctor());
    engine.register_event("go", Arc::new(SequentialHandler::new()));
    let (ctor, seen) = CapturingAction::ctor();
    engine
        .register_programmatic_action("capture", "go", ctor)
        .unwrap();
    engine.initialize(&as_root(&element));

    element.emit("click").await;
    element.set_attribute("trigger:click:data:id", "2");
    element.emit("click").await;

    let snapshots = seen.lock().unwrap().clone();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].get("id"), Some("1"));
    assert_eq!(snapshots[1].get("id"), Some("2"));
}

/// A submit-style trigger that merges declared header values onto the base
/// composition.
struct HeaderMergingTrigger {
    binding: TriggerBinding,
}

impl Trigger for HeaderMergingTrigger {
    fn binding(&self) -> &TriggerBinding {
        &self.binding
    }

    fn init(self: Arc<Self>, _events: Arc<dyn EventLookup>) -> Result<(), BindError> {
        Ok(())
    }

    fn compose(&self) -> TriggerData {
        let mut data = self.binding.compose_data();
        data.merge_supplement("header", self.binding.compose_supplement("header"));
        data
    }
}

#[tokio::test]
async fn overridden_composition_merges_extras_onto_the_base_map() {
    let element = SyntheticElement::with_attributes([
        ("trigger:submit", "save"),
        ("trigger:submit:data:id", "7"),
        ("trigger:submit:header:x-token", "abc"),
    ]);

    let events = Arc::new(EventRegistry::new());
    let handler = Arc::new(SequentialHandler::new());
    events.register("save", handler.clone());
    let capture = Arc::new(CapturingAction::programmatic());
    handler.add_action(capture.clone() as Arc<dyn DynAction>);

    let trigger = Arc::new(HeaderMergingTrigger {
        binding: binding_for(&element, "save", "trigger:submit"),
    });
    trigger.invoke(events.as_ref()).await.unwrap();

    let snapshots = capture.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].get("id"), Some("7"));
    assert_eq!(
        snapshots[0].supplement_value("header", "x-token"),
        Some("abc")
    );
}

#[tokio::test]
async fn invoking_against_a_missing_event_is_a_programming_error() {
    let element = SyntheticElement::with_attributes([("trigger:click", "nowhere")]);
    let events = Arc::new(EventRegistry::new());

    let trigger = Arc::new(OccurrenceTrigger::new(binding_for(
        &element,
        "nowhere",
        "trigger:click",
    )));
    let result = trigger.invoke(events.as_ref()).await;

    assert!(matches!(result, Err(InvokeError::MissingEvent(name)) if name == "nowhere"));
}
