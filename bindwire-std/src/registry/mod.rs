//! Name-keyed registries: binding types and events.
//!
//! Both registries are written only during the load/scan phase. They use
//! interior mutability so registration works through shared references,
//! but re-entrant registration during an in-flight invocation is forbidden
//! by convention.

mod events;
mod types;

pub use events::EventRegistry;
pub use types::{ActionCtor, TriggerCtor, TypeRegistry};
