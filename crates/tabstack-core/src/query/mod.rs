pub mod handler;

// Re-export commonly used functions
pub use handler::{info_for_selected_tab, info_for_tab, is_root_visible, stack_count, top_title};
