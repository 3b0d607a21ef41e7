//! Scripted implementation of the host object model.
//!
//! With no live host framework to probe, scenes stand in for it: a scene
//! is a name-keyed tree of elements, stacks, controllers and containers
//! that deserializes straight from JSON into objects implementing the
//! [`super::types`] traits. Tests and the CLI both resolve against these.
//!
//! A scene can also mark property keys as `failing` so that lookups on
//! them report a [`ProbeError`], exercising the rule that a lookup error
//! is handled exactly like an absent property.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ProbeError, SceneError};
use super::types::{Controller, HostValue, NavStack, Screen, TabContainer, UiElement};

const KIND_TAB: &str = "Tab";
const KIND_TAB_GROUP: &str = "TabGroup";
const KIND_SCREEN: &str = "Screen";
const KIND_NAV_STACK: &str = "NavigationStack";
const KIND_CONTROLLER: &str = "ViewController";
const KIND_TAB_CONTAINER: &str = "TabContainer";

/// One screen entry in a scripted stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedScreen {
    #[serde(default)]
    title: Option<String>,
}

impl ScriptedScreen {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn untitled() -> Self {
        Self { title: None }
    }
}

impl Screen for ScriptedScreen {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn kind(&self) -> &str {
        KIND_SCREEN
    }
}

/// A scripted navigation stack, root first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedStack {
    #[serde(default)]
    screens: Vec<ScriptedScreen>,
}

impl ScriptedStack {
    pub fn new(screens: Vec<ScriptedScreen>) -> Self {
        Self { screens }
    }

    /// Stack of titled screens, root first.
    pub fn of_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            screens: titles.into_iter().map(ScriptedScreen::titled).collect(),
        }
    }

    pub fn with_untitled_top(mut self) -> Self {
        self.screens.push(ScriptedScreen::untitled());
        self
    }
}

impl NavStack for ScriptedStack {
    fn depth(&self) -> usize {
        self.screens.len()
    }

    fn top_screen(&self) -> Option<&dyn Screen> {
        self.screens.last().map(|s| s as &dyn Screen)
    }

    fn kind(&self) -> &str {
        KIND_NAV_STACK
    }

    fn container_kind(&self) -> &str {
        KIND_TAB_CONTAINER
    }
}

/// A scripted view controller: either it is a navigation stack itself,
/// or it is embedded in one, or it is detached from any stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedController {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_stack: Option<ScriptedStack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    embedded_in: Option<ScriptedStack>,
}

impl ScriptedController {
    /// A controller that IS the given stack.
    pub fn of_stack(stack: ScriptedStack) -> Self {
        Self {
            is_stack: Some(stack),
            embedded_in: None,
        }
    }

    /// A plain controller embedded in the given stack.
    pub fn embedded_in(stack: ScriptedStack) -> Self {
        Self {
            is_stack: None,
            embedded_in: Some(stack),
        }
    }

    /// A controller with no reachable stack at all.
    pub fn detached() -> Self {
        Self::default()
    }
}

impl Controller for ScriptedController {
    fn as_nav_stack(&self) -> Option<&dyn NavStack> {
        self.is_stack.as_ref().map(|s| s as &dyn NavStack)
    }

    fn enclosing_nav_stack(&self) -> Option<&dyn NavStack> {
        self.embedded_in.as_ref().map(|s| s as &dyn NavStack)
    }

    fn kind(&self) -> &str {
        KIND_CONTROLLER
    }
}

/// A scripted tab-bar container with an optional selected child.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<Box<ScriptedController>>,
}

impl ScriptedContainer {
    pub fn selecting(controller: ScriptedController) -> Self {
        Self {
            selected: Some(Box::new(controller)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl TabContainer for ScriptedContainer {
    fn selected_controller(&self) -> Option<&dyn Controller> {
        self.selected.as_deref().map(|c| c as &dyn Controller)
    }

    fn kind(&self) -> &str {
        KIND_TAB_CONTAINER
    }
}

/// A value stored under a property key of a [`ScriptedElement`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptedValue {
    Stack(ScriptedStack),
    Controller(ScriptedController),
    Container(ScriptedContainer),
    Element(Box<ScriptedElement>),
    Opaque,
}

impl ScriptedValue {
    fn as_host_value(&self) -> HostValue<'_> {
        match self {
            ScriptedValue::Stack(stack) => HostValue::NavStack(stack),
            ScriptedValue::Controller(controller) => HostValue::Controller(controller),
            ScriptedValue::Container(container) => HostValue::TabContainer(container),
            ScriptedValue::Element(element) => HostValue::Element(element.as_ref()),
            ScriptedValue::Opaque => HostValue::Opaque,
        }
    }
}

/// A scripted UI-element handle: a property bag keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedElement {
    #[serde(default = "default_element_kind")]
    kind: String,
    #[serde(default)]
    properties: BTreeMap<String, ScriptedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    failing: Vec<String>,
}

fn default_element_kind() -> String {
    KIND_TAB.to_string()
}

impl ScriptedElement {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
            failing: Vec::new(),
        }
    }

    pub fn tab() -> Self {
        Self::new(KIND_TAB)
    }

    pub fn tab_group() -> Self {
        Self::new(KIND_TAB_GROUP)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: ScriptedValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Mark a key so that looking it up reports a [`ProbeError`].
    pub fn with_failing_key(mut self, key: impl Into<String>) -> Self {
        self.failing.push(key.into());
        self
    }
}

impl UiElement for ScriptedElement {
    fn lookup(&self, key: &str) -> Result<Option<HostValue<'_>>, ProbeError> {
        if self.failing.iter().any(|k| k == key) {
            return Err(ProbeError::LookupFailed {
                key: key.to_string(),
                reason: "scripted lookup failure".to_string(),
            });
        }
        Ok(self.properties.get(key).map(ScriptedValue::as_host_value))
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

/// A named collection of scripted elements, loadable from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default)]
    elements: BTreeMap<String, ScriptedElement>,
}

impl Scene {
    pub fn new(elements: BTreeMap<String, ScriptedElement>) -> Self {
        Self { elements }
    }

    pub fn element(&self, id: &str) -> Option<&ScriptedElement> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> &BTreeMap<String, ScriptedElement> {
        &self.elements
    }

    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        serde_json::from_str(raw).map_err(|e| SceneError::SceneParseError {
            message: e.to_string(),
        })
    }
}

/// Load a scene from a JSON file.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SceneError::SceneNotFound {
                path: path.display().to_string(),
            }
        } else {
            SceneError::IoError { source }
        }
    })?;
    Scene::from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_screen_titles() {
        let titled = ScriptedScreen::titled("Home");
        assert_eq!(Screen::title(&titled), Some("Home"));
        assert_eq!(Screen::kind(&titled), "Screen");

        let untitled = ScriptedScreen::untitled();
        assert!(Screen::title(&untitled).is_none());
    }

    #[test]
    fn test_scripted_stack_depth_and_top() {
        let stack = ScriptedStack::of_titles(["Root", "Details"]);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top_screen().unwrap().title(), Some("Details"));
    }

    #[test]
    fn test_scripted_stack_untitled_top() {
        let stack = ScriptedStack::of_titles(["Root"]).with_untitled_top();
        assert_eq!(stack.depth(), 2);
        assert!(stack.top_screen().unwrap().title().is_none());
    }

    #[test]
    fn test_empty_scripted_stack() {
        let stack = ScriptedStack::default();
        assert_eq!(stack.depth(), 0);
        assert!(stack.top_screen().is_none());
    }

    #[test]
    fn test_controller_of_stack() {
        let controller = ScriptedController::of_stack(ScriptedStack::of_titles(["Home"]));
        assert!(controller.as_nav_stack().is_some());
        assert!(controller.enclosing_nav_stack().is_none());
    }

    #[test]
    fn test_controller_embedded_in_stack() {
        let controller = ScriptedController::embedded_in(ScriptedStack::of_titles(["A", "B"]));
        assert!(controller.as_nav_stack().is_none());
        assert_eq!(controller.enclosing_nav_stack().unwrap().depth(), 2);
    }

    #[test]
    fn test_detached_controller() {
        let controller = ScriptedController::detached();
        assert!(controller.as_nav_stack().is_none());
        assert!(controller.enclosing_nav_stack().is_none());
    }

    #[test]
    fn test_container_selected_controller() {
        let container = ScriptedContainer::selecting(ScriptedController::of_stack(
            ScriptedStack::of_titles(["Home"]),
        ));
        assert!(container.selected_controller().is_some());
        assert!(ScriptedContainer::empty().selected_controller().is_none());
    }

    #[test]
    fn test_element_lookup_hit_and_miss() {
        let element = ScriptedElement::tab().with_property(
            "navigationController",
            ScriptedValue::Stack(ScriptedStack::of_titles(["Home"])),
        );

        match element.lookup("navigationController") {
            Ok(Some(HostValue::NavStack(stack))) => assert_eq!(stack.depth(), 1),
            _ => panic!("Expected a NavStack hit"),
        }
        assert!(matches!(element.lookup("controller"), Ok(None)));
    }

    #[test]
    fn test_element_failing_key_reports_probe_error() {
        let element = ScriptedElement::tab().with_failing_key("navigationController");
        let result = element.lookup("navigationController");
        assert!(matches!(
            result,
            Err(ProbeError::LookupFailed { .. })
        ));
    }

    #[test]
    fn test_element_kind_default_and_custom() {
        assert_eq!(UiElement::kind(&ScriptedElement::tab()), "Tab");
        assert_eq!(UiElement::kind(&ScriptedElement::tab_group()), "TabGroup");
        assert_eq!(
            UiElement::kind(&ScriptedElement::new("Widget")),
            "Widget"
        );
    }

    #[test]
    fn test_opaque_value_classification() {
        let element = ScriptedElement::tab().with_property("controller", ScriptedValue::Opaque);
        assert!(matches!(
            element.lookup("controller"),
            Ok(Some(HostValue::Opaque))
        ));
    }

    #[test]
    fn test_nested_element_value() {
        let group = ScriptedElement::tab_group().with_property(
            "selectedViewController",
            ScriptedValue::Controller(ScriptedController::of_stack(ScriptedStack::of_titles([
                "Feed",
            ]))),
        );
        let tab = ScriptedElement::tab()
            .with_property("tabGroup", ScriptedValue::Element(Box::new(group)));

        match tab.lookup("tabGroup") {
            Ok(Some(HostValue::Element(inner))) => assert_eq!(inner.kind(), "TabGroup"),
            _ => panic!("Expected a nested element"),
        }
    }

    #[test]
    fn test_scene_parse_minimal() {
        let scene = Scene::from_json(r#"{"elements": {}}"#).unwrap();
        assert!(scene.elements().is_empty());
        assert!(scene.element("home").is_none());
    }

    #[test]
    fn test_scene_parse_full_document() {
        let raw = r#"
        {
            "elements": {
                "home": {
                    "kind": "Tab",
                    "properties": {
                        "navigationController": {
                            "type": "stack",
                            "screens": [{"title": "Home"}, {"title": "Details"}]
                        }
                    }
                },
                "main": {
                    "kind": "TabGroup",
                    "properties": {
                        "controller": {
                            "type": "container",
                            "selected": {"isStack": {"screens": [{"title": "Feed"}]}}
                        }
                    },
                    "failing": ["selectedViewController"]
                }
            }
        }"#;
        let scene = Scene::from_json(raw).unwrap();

        let home = scene.element("home").unwrap();
        match home.lookup("navigationController") {
            Ok(Some(HostValue::NavStack(stack))) => {
                assert_eq!(stack.depth(), 2);
                assert_eq!(stack.top_screen().unwrap().title(), Some("Details"));
            }
            _ => panic!("Expected a stack under navigationController"),
        }

        let main = scene.element("main").unwrap();
        assert_eq!(UiElement::kind(main), "TabGroup");
        assert!(main.lookup("selectedViewController").is_err());
        match main.lookup("controller") {
            Ok(Some(HostValue::TabContainer(container))) => {
                let selected = container.selected_controller().unwrap();
                assert_eq!(selected.as_nav_stack().unwrap().depth(), 1);
            }
            _ => panic!("Expected a container under controller"),
        }
    }

    #[test]
    fn test_scene_parse_defaults_element_kind() {
        let scene = Scene::from_json(r#"{"elements": {"t": {}}}"#).unwrap();
        assert_eq!(UiElement::kind(scene.element("t").unwrap()), "Tab");
    }

    #[test]
    fn test_scene_parse_rejects_malformed_json() {
        let result = Scene::from_json("{not json");
        assert!(matches!(result, Err(SceneError::SceneParseError { .. })));
    }

    #[test]
    fn test_scripted_value_round_trip() {
        let value = ScriptedValue::Stack(ScriptedStack::of_titles(["Home"]));
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains(r#""type":"stack""#));

        let parsed: ScriptedValue = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, ScriptedValue::Stack(_)));
    }

    #[test]
    fn test_load_scene_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(
            &path,
            r#"{"elements": {"home": {"properties": {"navigationController": {"type": "stack", "screens": [{"title": "Home"}]}}}}}"#,
        )
        .unwrap();

        let scene = load_scene(&path).unwrap();
        assert!(scene.element("home").is_some());
    }

    #[test]
    fn test_load_scene_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scene(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SceneError::SceneNotFound { .. })));
    }
}
