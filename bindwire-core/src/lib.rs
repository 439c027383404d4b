//! # bindwire-core
//!
//! Core contracts for the bindwire declarative dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! trigger and action implementations that don't need the full
//! `bindwire-std` implementation.
//!
//! # The dispatch graph
//!
//! bindwire wires *triggers* to named *events* and named events to ordered
//! lists of *actions*, all declared as element attributes rather than
//! imperative glue code:
//!
//! - **Trigger** — a binding that, upon a platform occurrence (a click, a
//!   submit), composes a fresh [`TriggerData`] snapshot from its element's
//!   attributes and invokes a named event. A trigger never touches actions;
//!   it only knows its event name.
//! - **Event** — a named dispatch point. Its value in the event registry is
//!   an [`EventHandler`] instance, which owns the ordered action list and
//!   the execution strategy.
//! - **Action** — a binding that performs an effect when its owning event
//!   is invoked. May have no element at all (programmatic registration).
//!
//! # Static vs dynamic dispatch
//!
//! The [`Trigger`] and [`Action`] traits use native `async fn`/RPITIT for
//! static dispatch; [`DynTrigger`] and [`DynAction`] are their object-safe
//! companions, implemented for free via blanket impls. Registries and
//! handlers store the `Dyn*` forms.
//!
//! # Error types
//!
//! - [`EngineError`] - top-level error type
//! - [`BindError`] - discovery/instantiation/initialization errors
//! - [`InvokeError`] - runtime dispatch errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod data;
mod element;
mod error;
mod handler;
pub mod syntax;
mod trigger;

// Re-exports
pub use action::{Action, ActionBinding, DynAction};
pub use data::TriggerData;
pub use element::{Attribute, Element, OccurrenceHandler};
pub use error::{BindError, BoxError, EngineError, InvokeError};
pub use handler::{EventHandler, EventLookup};
pub use trigger::{DynTrigger, Trigger, TriggerBinding};
