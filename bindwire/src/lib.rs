//! # bindwire — declarative Trigger → Event → Action dispatch
//!
//! bindwire lets markup authors wire occurrences to behaviors without
//! imperative glue code. Bindings are expressed as element attributes;
//! a single scan pass builds an in-memory dispatch graph connecting
//! trigger sources to named events and named events to ordered action
//! lists.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use bindwire::{Engine, OccurrenceTrigger};
//!
//! let engine = Engine::new();
//! engine.register_trigger_type("click", OccurrenceTrigger::ctor());
//! engine.register_action_type("delete", DeleteAction::ctor());
//!
//! // <div trigger:click="remove-row" trigger:click:data:id="42">
//! // <div action:delete="remove-row">
//! engine.initialize(&document_root);
//! ```
//!
//! Registration is explicit and ordered: there are no module-load
//! registration side effects, so the registries' contents are fully
//! visible and testable.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod engine;
mod scan;

pub use engine::Engine;
pub use scan::ScanReport;

pub use bindwire_core::{
    // Action contract
    Action,
    ActionBinding,
    Attribute,
    // Errors
    BindError,
    BoxError,
    DynAction,
    DynTrigger,
    // Element capability
    Element,
    EngineError,
    // Event handler contract
    EventHandler,
    EventLookup,
    InvokeError,
    OccurrenceHandler,
    // Trigger contract
    Trigger,
    TriggerBinding,
    // Data
    TriggerData,
    // Micro-syntax
    syntax,
};

pub use bindwire_std::{
    handlers::{ParallelHandler, SequentialHandler},
    registry::{ActionCtor, EventRegistry, TriggerCtor, TypeRegistry},
    triggers::OccurrenceTrigger,
};

/// Testing utilities.
pub mod testing {
    pub use bindwire_std::testing::{
        ActionLog, CapturingAction, FailingAction, RecordingAction, SyntheticElement,
    };
}

/// Prelude module - common imports for bindwire.
///
/// # Usage
///
/// ```rust,ignore
/// use bindwire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action,
        ActionBinding,
        BindError,
        BoxError,
        Element,
        Engine,
        EngineError,
        EventHandler,
        EventLookup,
        InvokeError,
        Trigger,
        TriggerBinding,
        TriggerData,
    };
}
