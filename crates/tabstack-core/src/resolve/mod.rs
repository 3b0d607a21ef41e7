pub mod handler;

// Re-export commonly used functions
pub use handler::{probe, resolve_from_tab, resolve_from_tab_group};
