pub mod handler;
pub mod types;

// Re-export commonly used types
pub use handler::digest;
pub use types::StackSummary;
