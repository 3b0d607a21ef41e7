//! The public queries: total, read-only, call-scoped.
//!
//! Every entry point accepts `None` for "no usable handle" and returns a
//! well-defined default instead of failing. Nothing observed here is
//! cached: the probed hierarchy belongs to the host's UI thread and can
//! change between calls.

use tracing::info;

use crate::digest::{StackSummary, digest};
use crate::host::UiElement;
use crate::resolve::{resolve_from_tab, resolve_from_tab_group};

fn handle_kind(handle: Option<&dyn UiElement>) -> &str {
    handle.map_or("none", |h| h.kind())
}

/// Full summary for a tab handle.
pub fn info_for_tab(handle: Option<&dyn UiElement>) -> StackSummary {
    info!(
        event = "core.query.info_for_tab_started",
        handle_kind = handle_kind(handle)
    );

    let summary = match handle {
        Some(tab) => digest(resolve_from_tab(tab)),
        None => StackSummary::unresolved("no tab handle"),
    };

    info!(
        event = "core.query.info_for_tab_completed",
        count = summary.count(),
        is_root_visible = summary.is_root_visible()
    );
    summary
}

/// Number of screens stacked on the tab's navigation controller.
/// 0 when the handle is missing or nothing resolves.
pub fn stack_count(handle: Option<&dyn UiElement>) -> usize {
    info!(
        event = "core.query.stack_count_started",
        handle_kind = handle_kind(handle)
    );

    let count = handle
        .and_then(resolve_from_tab)
        .map_or(0, |stack| stack.depth());

    info!(event = "core.query.stack_count_completed", count = count);
    count
}

/// Whether the tab currently shows its root screen. Defaults to `true`
/// when nothing resolves: no evidence of a deeper stack means root.
pub fn is_root_visible(handle: Option<&dyn UiElement>) -> bool {
    info!(
        event = "core.query.is_root_visible_started",
        handle_kind = handle_kind(handle)
    );

    let visible = handle
        .and_then(resolve_from_tab)
        .is_none_or(|stack| stack.depth() <= 1);

    info!(
        event = "core.query.is_root_visible_completed",
        is_root_visible = visible
    );
    visible
}

/// Title of the topmost screen, absent when nothing resolves or the top
/// screen has no title.
pub fn top_title(handle: Option<&dyn UiElement>) -> Option<String> {
    info!(
        event = "core.query.top_title_started",
        handle_kind = handle_kind(handle)
    );

    let title = handle
        .and_then(resolve_from_tab)
        .and_then(|stack| stack.top_screen())
        .and_then(|screen| screen.title())
        .map(String::from);

    info!(event = "core.query.top_title_completed", title = ?title);
    title
}

/// Full summary for the currently selected tab of a tab-group handle.
pub fn info_for_selected_tab(handle: Option<&dyn UiElement>) -> StackSummary {
    info!(
        event = "core.query.info_for_selected_tab_started",
        handle_kind = handle_kind(handle)
    );

    let summary = match handle {
        Some(group) => digest(resolve_from_tab_group(group)),
        None => StackSummary::unresolved("no tab group handle"),
    };

    info!(
        event = "core.query.info_for_selected_tab_completed",
        count = summary.count(),
        is_root_visible = summary.is_root_visible()
    );
    summary
}
