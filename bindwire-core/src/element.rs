//! Platform-neutral element capability.
//!
//! The scanner and the binding contracts depend only on this minimal
//! surface: list attributes, read/write an attribute, enumerate children,
//! subscribe to a named occurrence. The real browser document tree is one
//! implementation; tests use a synthetic one.

use std::{future::Future, pin::Pin, sync::Arc};

/// A name/value pair as it appears on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, e.g. `trigger:click` or `trigger:click:data:id`.
    pub name: String,
    /// The attribute's literal text value.
    pub value: String,
}

impl Attribute {
    /// Create an attribute from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A callback registered against a named platform occurrence.
///
/// Invoked each time the occurrence fires; the returned future is driven by
/// whatever delivers the occurrence (e.g. a synthetic element's `emit`).
pub type OccurrenceHandler =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// The element capability bindings and the scanner operate against.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot host bindings",
    label = "missing `Element` implementation",
    note = "Implement `Element` to expose attributes, children and occurrence subscription."
)]
pub trait Element: Send + Sync + 'static {
    /// Snapshot of all attributes, in document order.
    fn attributes(&self) -> Vec<Attribute>;

    /// Read a single attribute's value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Write an attribute, replacing any prior value.
    fn set_attribute(&self, name: &str, value: &str);

    /// Child elements, in document order.
    fn children(&self) -> Vec<Arc<dyn Element>>;

    /// Subscribe a handler to a named platform occurrence (e.g. `"click"`).
    fn subscribe(&self, occurrence: &str, handler: OccurrenceHandler);
}
