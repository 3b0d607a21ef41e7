pub mod errors;
pub mod scripted;
pub mod types;

// Re-export commonly used types
pub use errors::{ProbeError, SceneError};
pub use types::{Controller, HostValue, NavStack, Screen, TabContainer, UiElement};
