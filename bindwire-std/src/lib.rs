//! # bindwire-std
//!
//! Standard implementations for the bindwire dispatch engine.
//!
//! This crate provides:
//! - **Registries**: [`registry::TypeRegistry`], [`registry::EventRegistry`]
//! - **Event handlers**: [`handlers::ParallelHandler`], [`handlers::SequentialHandler`]
//! - **Triggers**: [`triggers::OccurrenceTrigger`]
//! - **Testing fakes**: [`testing::SyntheticElement`], [`testing::RecordingAction`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use bindwire_core;

// Modules
pub mod handlers;
pub mod registry;
pub mod testing;
pub mod triggers;
