use bindwire::testing::{ActionLog, RecordingAction, SyntheticElement};
use bindwire::{
    Engine, EventHandler, OccurrenceTrigger, ScanReport, SequentialHandler, TriggerData,
};
use std::sync::Arc;

mod common;
use common::as_root;

#[tokio::test]
async fn scanning_wires_triggers_and_actions_end_to_end() {
    let root = SyntheticElement::new();
    let source = SyntheticElement::with_attributes([("trigger:click", "go")]);
    let target = SyntheticElement::with_attributes([("action:click", "go")]);
    root.append_child(as_root(&source));
    root.append_child(as_root(&target));

    let log = ActionLog::new();
    let engine = Engine::new();
    engine.register_trigger_type("click", OccurrenceTrigger::ctor());
    engine.register_action_type("click", RecordingAction::ctor("clicked", &log));
    engine.register_event("go", Arc::new(SequentialHandler::new()));

    let report = engine.initialize(&as_root(&root));
    assert_eq!(
        report,
        ScanReport {
            elements: 3,
            triggers: 1,
            actions: 1,
            skipped: 0,
        }
    );
    assert!(engine.events().has_event("go"));
    assert_eq!(engine.events().get("go").unwrap().action_count(), 1);
    assert_eq!(source.subscriber_count("click"), 1);

    source.emit("click").await;
    assert_eq!(log.entries(), vec!["clicked"]);
}

#[test]
fn unknown_action_type_never_creates_the_event() {
    let element = SyntheticElement::with_attributes([("action:click", "go")]);
    let engine = Engine::new();

    let report = engine.initialize(&as_root(&element));

    assert!(!engine.events().has_event("go"));
    assert_eq!(engine.action_count(), 0);
    assert_eq!(report.skipped, 1);
}

#[test]
fn unknown_trigger_type_never_creates_the_event() {
    let element = SyntheticElement::with_attributes([("trigger:hover", "go")]);
    let engine = Engine::new();

    let report = engine.initialize(&as_root(&element));

    assert!(!engine.events().has_event("go"));
    assert_eq!(engine.trigger_count(), 0);
    assert_eq!(report.skipped, 1);
}

#[test]
fn lookalike_attributes_are_silently_ignored() {
    let element = SyntheticElement::with_attributes([
        ("trig:click", "go"),
        ("trigger:", "go"),
        ("trigger:click:data:id", "42"),
        ("id", "row-7"),
    ]);
    let engine = Engine::new();
    engine.register_trigger_type("click", OccurrenceTrigger::ctor());

    let report = engine.initialize(&as_root(&element));

    // Pattern non-matches are not even counted as skipped.
    assert_eq!(report.skipped, 0);
    assert_eq!(report.triggers, 0);
    assert!(engine.event_names().is_empty());
}

#[test]
fn whitespace_event_names_are_rejected_with_a_diagnostic() {
    let element = SyntheticElement::with_attributes([("trigger:click", "go now")]);
    let engine = Engine::new();
    engine.register_trigger_type("click", OccurrenceTrigger::ctor());

    let report = engine.initialize(&as_root(&element));

    assert_eq!(report.skipped, 1);
    assert!(!engine.events().has_event("go now"));
    assert_eq!(engine.trigger_count(), 0);
}

#[tokio::test]
async fn action_order_is_encounter_order_across_elements() {
    let root = SyntheticElement::new();
    root.append_child(as_root(&SyntheticElement::with_attributes([(
        "action:first", "go",
    )])));
    root.append_child(as_root(&SyntheticElement::with_attributes([(
        "action:second", "go",
    )])));
    root.append_child(as_root(&SyntheticElement::with_attributes([(
        "action:third", "go",
    )])));

    let log = ActionLog::new();
    let engine = Engine::new();
    engine.register_action_type("first", RecordingAction::ctor("A", &log));
    engine.register_action_type("second", RecordingAction::ctor("B", &log));
    engine.register_action_type("third", RecordingAction::ctor("C", &log));
    engine.register_event("go", Arc::new(SequentialHandler::new()));
    engine.initialize(&as_root(&root));

    let handler = engine.events().get("go").unwrap();
    handler.invoke(None, TriggerData::new()).await;

    assert_eq!(log.entries(), vec!["A", "B", "C"]);
}

#[test]
fn re_scanning_duplicates_bindings() {
    let element = SyntheticElement::with_attributes([("action:click", "go")]);
    let log = ActionLog::new();
    let engine = Engine::new();
    engine.register_action_type("click", RecordingAction::ctor("clicked", &log));

    engine.initialize(&as_root(&element));
    assert_eq!(engine.action_count(), 1);

    // No re-run guard: a second pass re-binds everything it finds.
    engine.initialize(&as_root(&element));
    assert_eq!(engine.action_count(), 2);
}

#[tokio::test]
async fn overwriting_a_type_registration_wins_at_scan_time() {
    let element = SyntheticElement::with_attributes([("action:click", "go")]);
    let log = ActionLog::new();
    let engine = Engine::new();
    engine.register_action_type("click", RecordingAction::ctor("first", &log));
    engine.register_action_type("click", RecordingAction::ctor("second", &log));
    engine.register_event("go", Arc::new(SequentialHandler::new()));
    engine.initialize(&as_root(&element));

    let handler = engine.events().get("go").unwrap();
    handler.invoke(None, TriggerData::new()).await;

    assert_eq!(log.entries(), vec!["second"]);
}
