use serde::{Deserialize, Serialize};

/// Fixed-shape summary of a (possibly absent) navigation stack.
///
/// Always producible: an unresolved stack yields the vacuous default
/// (`count = 0`, root visible, no title). Serializes with the camelCase
/// field names the host module exported (`count`, `isRootVisible`,
/// `topTitle`, `debugPath`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSummary {
    count: usize,
    is_root_visible: bool,
    top_title: Option<String>,
    debug_path: String,
}

impl StackSummary {
    /// Summary of a resolved stack. Root visibility is derived: a stack
    /// of zero or one screens counts as showing its root.
    pub fn resolved(count: usize, top_title: Option<String>, debug_path: String) -> Self {
        Self {
            count,
            is_root_visible: count <= 1,
            top_title,
            debug_path,
        }
    }

    /// The vacuous default returned when no backing stack was found.
    /// `reason` becomes the diagnostic path.
    pub fn unresolved(reason: &str) -> Self {
        Self {
            count: 0,
            is_root_visible: true,
            top_title: None,
            debug_path: reason.to_string(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_root_visible(&self) -> bool {
        self.is_root_visible
    }

    pub fn top_title(&self) -> Option<&str> {
        self.top_title.as_deref()
    }

    /// Human-readable trace of how resolution went. Diagnostic only; the
    /// format is not stable across versions and must not be parsed.
    pub fn debug_path(&self) -> &str {
        &self.debug_path
    }
}
