//! The attribute micro-syntax.
//!
//! Bindings are declared as element attributes:
//!
//! - `trigger:<type>="<event-name>"` — trigger declaration
//! - `action:<type>="<event-name>"` — action declaration
//! - `trigger:<type>:data:<key>="<value>"` — data supplement (never a binding)
//! - `trigger:<type>:<kind>:<key>="<value>"` — extended supplement, e.g.
//!   `trigger:submit:header:<name>` (never a binding)
//!
//! `<type>` is a single path segment with no further colons. Anything that
//! merely looks similar but does not match exactly is a *silent* non-match:
//! no classification, no diagnostic.

/// Namespace token for trigger-side binding attributes.
pub const TRIGGER_NAMESPACE: &str = "trigger";

/// Namespace token for action-side binding attributes.
pub const ACTION_NAMESPACE: &str = "action";

/// Supplement kind for per-invocation data entries.
pub const DATA_KIND: &str = "data";

/// Which side of the dispatch graph a binding attribute declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A trigger declaration (`trigger:<type>`).
    Trigger,
    /// An action declaration (`action:<type>`).
    Action,
}

/// A classified binding attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingAttr<'a> {
    /// Trigger or action side.
    pub kind: BindingKind,
    /// The binding type token to resolve through the type registry.
    pub type_name: &'a str,
}

/// Classify an attribute name as a binding declaration.
///
/// Returns `None` for supplements (`:data:` and friends) and for anything
/// outside the two fixed namespaces. Non-matches are silent by contract.
pub fn classify(name: &str) -> Option<BindingAttr<'_>> {
    let (namespace, rest) = name.split_once(':')?;
    let kind = match namespace {
        TRIGGER_NAMESPACE => BindingKind::Trigger,
        ACTION_NAMESPACE => BindingKind::Action,
        _ => return None,
    };
    // A binding type is exactly one non-empty segment; further colons mean
    // a supplement form, which is excluded from classification.
    if rest.is_empty() || rest.contains(':') {
        return None;
    }
    Some(BindingAttr {
        kind,
        type_name: rest,
    })
}

/// Whether a string is usable as an event name (identifier-like, no whitespace).
pub fn is_valid_event_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}
