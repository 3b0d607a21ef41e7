//! Capability traits over the host framework's object graph.
//!
//! The host exposes its UI elements as opaque, name-keyed property bags
//! with no public shape guarantees. Instead of open-ended reflective
//! lookups, adapters wrap each host object behind one of these traits and
//! classify probed values explicitly via [`HostValue`]. Every value is a
//! borrowed view onto host-owned state, valid for a single query only.

use super::errors::ProbeError;

/// One opaque UI-element handle (a tab or a tab group).
///
/// The core never creates, retains, or mutates handles; it only reads
/// named properties through [`UiElement::lookup`].
pub trait UiElement {
    /// Look up a single named property on this handle.
    ///
    /// Returns `Ok(None)` when the property is absent. An `Err` means the
    /// lookup mechanism itself failed; callers treat that the same as
    /// absence (see the probe helper in the resolver).
    fn lookup(&self, key: &str) -> Result<Option<HostValue<'_>>, ProbeError>;

    /// Diagnostic label for this element (e.g. "Tab", "TabGroup").
    fn kind(&self) -> &str;
}

/// Classification of a value found under a probed property name.
///
/// `Opaque` marks a value that is present but matches none of the shapes
/// the resolver knows about; it is a structural miss, not an error.
pub enum HostValue<'a> {
    NavStack(&'a dyn NavStack),
    Controller(&'a dyn Controller),
    TabContainer(&'a dyn TabContainer),
    Element(&'a dyn UiElement),
    Opaque,
}

/// A generic view-controller shape.
pub trait Controller {
    /// The controller itself, viewed as a navigation stack if it is one.
    fn as_nav_stack(&self) -> Option<&dyn NavStack>;

    /// The navigation stack this controller is embedded in, if any.
    fn enclosing_nav_stack(&self) -> Option<&dyn NavStack>;

    fn kind(&self) -> &str;
}

/// A tab-bar-controller shape: a container exposing its currently
/// selected child controller.
pub trait TabContainer {
    fn selected_controller(&self) -> Option<&dyn Controller>;

    fn kind(&self) -> &str;
}

/// A resolved navigation stack: an ordered sequence of screens, root
/// first, with a notion of "currently topmost screen".
pub trait NavStack {
    /// Number of screens currently on the stack.
    fn depth(&self) -> usize;

    /// The topmost screen, absent when the stack is empty.
    fn top_screen(&self) -> Option<&dyn Screen>;

    fn kind(&self) -> &str;

    /// Label of the container owning this stack, used in the digest trace.
    fn container_kind(&self) -> &str;
}

/// One entry in a navigation stack.
pub trait Screen {
    /// Display title, absent when the screen has none.
    fn title(&self) -> Option<&str>;

    fn kind(&self) -> &str;
}
