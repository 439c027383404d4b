//! Error types for bindwire.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`EngineError`] - Top-level error type for all bindwire operations
//! - [`BindError`] - Errors while discovering, constructing or initializing bindings
//! - [`InvokeError`] - Errors while invoking an event at runtime

use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// This is the failure type actions report from their `trigger` call; the
/// event handler strategies decide what to do with it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all bindwire operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An error occurred while setting up a binding.
    #[error("bind error: {0}")]
    Bind(#[from] BindError),

    /// An error occurred while invoking an event.
    #[error("invoke error: {0}")]
    Invoke(#[from] InvokeError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while setting up a binding.
#[derive(Error, Debug)]
pub enum BindError {
    /// The attribute does not declare a binding in the expected micro-syntax.
    #[error("attribute `{0}` does not declare a binding")]
    NotABinding(String),

    /// The event name is empty or contains whitespace.
    #[error("event name `{0}` is not an identifier-like token")]
    InvalidEventName(String),

    /// The binding's one-time initialization failed.
    #[error("binding initialization failed")]
    Init(#[source] BoxError),
}

/// Errors that can occur while invoking an event.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The target event was not registered. The initializer guarantees the
    /// event exists before any trigger can fire, so this is a programming
    /// error rather than a user-facing condition.
    #[error("no event named `{0}` is registered")]
    MissingEvent(String),

    /// A custom invocation error.
    #[error(transparent)]
    Custom(BoxError),
}

// Convenience conversions
impl From<BoxError> for EngineError {
    fn from(err: BoxError) -> Self {
        EngineError::Custom(err)
    }
}

impl From<BoxError> for InvokeError {
    fn from(err: BoxError) -> Self {
        InvokeError::Custom(err)
    }
}
