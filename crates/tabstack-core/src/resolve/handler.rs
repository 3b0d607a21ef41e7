//! Handle-to-navigation-stack resolution.
//!
//! The mapping from a public tab handle to its backing native controller
//! chain is not part of the host framework's contract, so resolution works
//! through an ordered chain of probes: the most direct wiring is tried
//! first, then successively less direct paths. A probe that finds nothing,
//! finds a value of the wrong shape, or whose lookup mechanism errors is a
//! miss that drives the next step; it is never escalated as a fault.

use tracing::debug;

use crate::host::{Controller, HostValue, NavStack, UiElement};

// Candidate property names, most specific first. These encode where the
// host's internal wiring has been observed to live; newer host versions
// may need additional entries. The fallback order is the contract, the
// literal names are not.
const NAV_STACK_KEYS: &[&str] = &["navigationController", "navController"];
const CONTROLLER_KEYS: &[&str] = &["controller", "viewController"];
const INNER_TAB_KEYS: &[&str] = &["tab"];
const OWNING_GROUP_KEYS: &[&str] = &["tabGroup", "tabgroup", "group"];
const SELECTED_KEYS: &[&str] = &["selectedViewController", "selected"];

/// Return the first present value among the candidate keys, in order.
///
/// A lookup error is indistinguishable from absence to the caller; it is
/// logged and the next candidate is tried.
pub fn probe<'a>(element: &'a dyn UiElement, candidates: &[&str]) -> Option<HostValue<'a>> {
    for key in candidates {
        match element.lookup(key) {
            Ok(Some(value)) => {
                debug!(
                    event = "core.resolve.probe_hit",
                    key = *key,
                    element_kind = element.kind()
                );
                return Some(value);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(
                    event = "core.resolve.probe_error_ignored",
                    key = *key,
                    element_kind = element.kind(),
                    error = %e
                );
            }
        }
    }
    None
}

/// The "is it a stack, or is it embedded in one" check shared by both
/// entry points.
fn stack_for_controller<'a>(controller: &'a dyn Controller) -> Option<&'a dyn NavStack> {
    if let Some(stack) = controller.as_nav_stack() {
        return Some(stack);
    }
    controller.enclosing_nav_stack()
}

/// Locate the navigation stack backing a tab handle.
///
/// Tries, in order: a directly exposed stack, a generic controller (which
/// may be the stack, be embedded in one, or lead to one through an inner
/// `tab` property), and finally delegation through the owning tab group.
/// Returns `None` when every path misses; that is an expected outcome,
/// not an error.
pub fn resolve_from_tab<'a>(tab: &'a dyn UiElement) -> Option<&'a dyn NavStack> {
    // Step 1: the handle exposes the stack directly.
    if let Some(HostValue::NavStack(stack)) = probe(tab, NAV_STACK_KEYS) {
        debug!(event = "core.resolve.tab_direct_hit", depth = stack.depth());
        return Some(stack);
    }

    // Step 2: a generic controller that is, or is embedded in, a stack.
    match probe(tab, CONTROLLER_KEYS) {
        Some(HostValue::NavStack(stack)) => {
            debug!(
                event = "core.resolve.tab_controller_is_stack",
                depth = stack.depth()
            );
            return Some(stack);
        }
        Some(HostValue::Controller(controller)) => {
            if let Some(stack) = stack_for_controller(controller) {
                debug!(
                    event = "core.resolve.tab_controller_hit",
                    controller_kind = controller.kind(),
                    depth = stack.depth()
                );
                return Some(stack);
            }

            // Step 3: some handles route their controller through an
            // inner `tab` property instead.
            match probe(tab, INNER_TAB_KEYS) {
                Some(HostValue::NavStack(stack)) => {
                    debug!(
                        event = "core.resolve.tab_inner_is_stack",
                        depth = stack.depth()
                    );
                    return Some(stack);
                }
                Some(HostValue::Controller(inner)) => {
                    if let Some(stack) = stack_for_controller(inner) {
                        debug!(
                            event = "core.resolve.tab_inner_controller_hit",
                            depth = stack.depth()
                        );
                        return Some(stack);
                    }
                }
                _ => {}
            }
        }
        _ => {}
    }

    // Step 4: walk up to the owning tab group and resolve its selection.
    if let Some(HostValue::Element(group)) = probe(tab, OWNING_GROUP_KEYS) {
        debug!(
            event = "core.resolve.tab_owning_group",
            group_kind = group.kind()
        );
        return resolve_from_tab_group(group);
    }

    debug!(event = "core.resolve.tab_exhausted", tab_kind = tab.kind());
    None
}

/// Locate the navigation stack backing the currently selected tab of a
/// tab-group handle.
pub fn resolve_from_tab_group<'a>(group: &'a dyn UiElement) -> Option<&'a dyn NavStack> {
    // Step 1: a tab-bar-container shape exposing its selected child.
    if let Some(HostValue::TabContainer(container)) = probe(group, CONTROLLER_KEYS)
        && let Some(selected) = container.selected_controller()
        && let Some(stack) = stack_for_controller(selected)
    {
        debug!(
            event = "core.resolve.group_container_hit",
            container_kind = container.kind(),
            depth = stack.depth()
        );
        return Some(stack);
    }

    // Step 2: the selected controller exposed directly on the handle.
    match probe(group, SELECTED_KEYS) {
        Some(HostValue::NavStack(stack)) => {
            debug!(
                event = "core.resolve.group_selected_is_stack",
                depth = stack.depth()
            );
            Some(stack)
        }
        Some(HostValue::Controller(selected)) => {
            let stack = stack_for_controller(selected);
            match &stack {
                Some(stack) => debug!(
                    event = "core.resolve.group_selected_hit",
                    depth = stack.depth()
                ),
                None => debug!(event = "core.resolve.group_exhausted", group_kind = group.kind()),
            }
            stack
        }
        _ => {
            debug!(event = "core.resolve.group_exhausted", group_kind = group.kind());
            None
        }
    }
}
