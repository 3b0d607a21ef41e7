//! tabstack-core: Navigation stack introspection over opaque host UI handles
//!
//! The host mobile UI framework does not publish the wiring between a tab
//! handle and the native controller chain behind it. This library locates
//! the backing navigation stack through an ordered chain of defensive
//! probes and reduces it to a small, always-producible summary.
//!
//! # Main Entry Points
//!
//! - [`query`] - The five read-only queries (info, count, root visibility, top title)
//! - [`resolve`] - Handle-to-navigation-stack resolution
//! - [`digest`] - Reduction of a resolved stack into a [`StackSummary`]
//! - [`host`] - The host object model traits and the scripted fixture implementation

pub mod digest;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod query;
pub mod resolve;

// Re-export commonly used types at crate root for convenience
pub use digest::StackSummary;
pub use host::scripted::{Scene, ScriptedElement, load_scene};
pub use host::{
    Controller, HostValue, NavStack, ProbeError, SceneError, Screen, TabContainer, UiElement,
};

// Re-export handler modules as the primary API
pub use query::handler as query_ops;
pub use resolve::handler as resolve_ops;

// Re-export logging initialization
pub use logging::init_logging;
