//! Reduction of a resolved navigation stack into a [`StackSummary`].
//!
//! The digest is total: it never fails, whatever resolution produced.

use tracing::debug;

use super::types::StackSummary;
use crate::host::NavStack;

// Trace label used when an empty stack has no top screen to name.
const EMPTY_TOP_KIND: &str = "Screen";

/// Reduce a possibly absent stack into its summary record.
pub fn digest(stack: Option<&dyn NavStack>) -> StackSummary {
    let Some(stack) = stack else {
        debug!(event = "core.digest.no_stack");
        return StackSummary::unresolved("no backing navigation stack");
    };

    let count = stack.depth();
    let top = stack.top_screen();
    let top_title = top.and_then(|s| s.title()).map(String::from);
    let debug_path = format!(
        "{} > {}(count={}) > {}({})",
        stack.container_kind(),
        stack.kind(),
        count,
        top.map_or(EMPTY_TOP_KIND, |s| s.kind()),
        top_title.as_deref().unwrap_or("nil"),
    );

    debug!(
        event = "core.digest.completed",
        count = count,
        top_title = ?top_title
    );
    StackSummary::resolved(count, top_title, debug_path)
}
