//! Element tree produced by the renderers.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use prism_pigment::ClassList;

/// A node in the rendered tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    #[inline]
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Ordered attribute map. `None` values are boolean attributes.
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(name.into(), Some(value.into()));
        self
    }

    pub fn flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.insert(name.into(), None);
        self
    }

    fn insert(&mut self, name: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of an attribute; `Some(None)` for a boolean attribute.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Merge `other` into `self`, `other` winning on conflicting keys.
    pub fn extend(&mut self, other: &Attributes) {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(key, _)| *key == property) {
            Some(entry) => entry.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Parse inline CSS text (`prop: value; prop: value`). Declarations
    /// without a colon are skipped.
    pub fn parse(css: &str) -> Self {
        let mut style = Self::new();
        for declaration in css.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                if !property.is_empty() {
                    style.set(property, value.trim());
                }
            }
        }
        style
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Merge `overrides` into `self`, overrides winning on conflicting properties.
    pub fn extend(&mut self, overrides: &Style) {
        for (property, value) in &overrides.declarations {
            self.set(property.clone(), value.clone());
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// CSS text, `prop: value; prop: value`.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Opaque interaction callback supplied by the host.
pub type Handler = Rc<dyn Fn()>;

/// Event handlers keyed by event name, passed through untouched.
#[derive(Clone, Default)]
pub struct Handlers {
    entries: Vec<(String, Handler)>,
}

impl Handlers {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: impl Into<String>, handler: impl Fn() + 'static) -> &mut Self {
        self.entries.push((event.into(), Rc::new(handler)));
        self
    }

    pub fn extend(&mut self, other: &Handlers) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn has(&self, event: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == event)
    }

    fn call(&self, event: &str) -> usize {
        let mut called = 0;
        for (name, handler) in &self.entries {
            if name == event {
                handler();
                called += 1;
            }
        }
        called
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

/// Shared slot through which the host attaches to the mounted primitive.
///
/// The renderers only carry it; the host fills it with its own node id.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<u64>>>);

impl NodeRef {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn attach(&self, host_id: u64) {
        self.0.set(Some(host_id));
    }

    #[inline]
    pub fn get(&self) -> Option<u64> {
        self.0.get()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Hover/press feedback the host animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    None,
    Scale { hover: f32, press: f32 },
}

/// Caller-supplied extras merged onto a rendered element.
#[derive(Debug, Clone, Default)]
pub struct HostProps {
    pub class: Option<String>,
    pub style: Style,
    pub attributes: Attributes,
    pub handlers: Handlers,
    pub node_ref: Option<NodeRef>,
}

/// A rendered element.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: &'static str,
    pub classes: ClassList,
    pub attributes: Attributes,
    pub style: Style,
    pub children: Vec<Node>,
    pub disabled: bool,
    pub feedback: Feedback,
    pub handlers: Handlers,
    pub node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            attributes: Attributes::new(),
            style: Style::new(),
            children: Vec::new(),
            disabled: false,
            feedback: Feedback::None,
            handlers: Handlers::new(),
            node_ref: None,
        }
    }

    #[inline]
    pub fn class(mut self, fragment: &str) -> Self {
        self.classes.push(fragment);
        self
    }

    #[inline]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    #[inline]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.flag(name);
        self
    }

    #[inline]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Merge host extras. Host values win on conflicting keys; nothing the
    /// host supplies is dropped.
    ///
    /// `class` and `style` given as raw attributes are folded into the
    /// class list and inline style, so each is emitted once. A `disabled`
    /// attribute disables the element.
    pub fn with_host_props(mut self, props: &HostProps) -> Self {
        let mut attributes = props.attributes.clone();
        if let Some(Some(class)) = attributes.remove("class") {
            self.classes.push(&class);
        }
        if let Some(class) = &props.class {
            self.classes.push(class);
        }
        if let Some(Some(css)) = attributes.remove("style") {
            self.style.extend(&Style::parse(&css));
        }
        self.style.extend(&props.style);
        if attributes.contains("disabled") {
            self.disabled = true;
        }
        self.attributes.extend(&attributes);
        self.handlers.extend(&props.handlers);
        if props.node_ref.is_some() {
            self.node_ref = props.node_ref.clone();
        }
        self
    }

    #[inline]
    pub fn class_name(&self) -> String {
        self.classes.to_string()
    }

    /// Deliver an event to the element's handlers.
    ///
    /// Disabled elements are inert. Returns how many handlers ran.
    pub fn dispatch(&self, event: &str) -> usize {
        if self.disabled {
            return 0;
        }
        self.handlers.call(event)
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// First descendant element (depth first) matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find(predicate),
            Node::Text(_) => None,
        })
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attributes = Attributes::new();
        attributes.set("type", "button").set("aria-label", "Save");
        attributes.set("type", "submit");

        let entries: Vec<_> = attributes.iter().collect();
        assert_eq!(
            entries,
            vec![("type", Some("submit")), ("aria-label", Some("Save"))]
        );
    }

    #[test]
    fn test_style_overrides_win() {
        let mut style = Style::new();
        style.set("margin", "0").set("color", "red");
        let mut overrides = Style::new();
        overrides.set("color", "blue").set("width", "10rem");

        style.extend(&overrides);
        assert_eq!(style.to_css(), "margin: 0; color: blue; width: 10rem");
    }

    #[test]
    fn test_dispatch_runs_matching_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut element = Element::new("button");
        let click_log = log.clone();
        element.handlers.on("click", move || click_log.borrow_mut().push("click"));
        let focus_log = log.clone();
        element.handlers.on("focus", move || focus_log.borrow_mut().push("focus"));

        assert_eq!(element.dispatch("click"), 1);
        assert_eq!(element.dispatch("keydown"), 0);
        assert_eq!(*log.borrow(), vec!["click"]);

        element.disabled = true;
        assert_eq!(element.dispatch("focus"), 0);
        assert_eq!(*log.borrow(), vec!["click"]);
    }

    #[test]
    fn test_style_parse() {
        let style = Style::parse(" color: red;margin:0 ; ;bogus; background: url(a:b) ");
        assert_eq!(style.to_css(), "color: red; margin: 0; background: url(a:b)");
    }

    #[test]
    fn test_host_class_and_style_attributes_are_folded() {
        let mut host = HostProps {
            class: Some("ml-2".to_string()),
            ..HostProps::default()
        };
        host.style.set("color", "blue");
        host.attributes
            .set("class", "mt-1 px-4")
            .set("style", "color: red; width: 4rem")
            .set("id", "save");

        let element = Element::new("div")
            .class("px-4 py-2")
            .with_host_props(&host);
        assert_eq!(element.class_name(), "py-2 mt-1 px-4 ml-2");
        assert_eq!(element.style.to_css(), "color: blue; width: 4rem");
        assert!(!element.attributes.contains("class"));
        assert!(!element.attributes.contains("style"));
        assert_eq!(element.attributes.get("id"), Some(Some("save")));
    }

    #[test]
    fn test_host_disabled_attribute_disables() {
        let mut host = HostProps::default();
        host.attributes.flag("disabled");
        host.handlers.on("click", || {});

        let element = Element::new("button").with_host_props(&host);
        assert!(element.disabled);
        assert_eq!(element.attributes.get("disabled"), Some(None));
        assert_eq!(element.dispatch("click"), 0);
    }

    #[test]
    fn test_node_ref_is_shared() {
        let node_ref = NodeRef::new();
        let forwarded = node_ref.clone();
        forwarded.attach(7);
        assert_eq!(node_ref.get(), Some(7));
        assert!(node_ref.ptr_eq(&forwarded));
        assert!(!node_ref.ptr_eq(&NodeRef::new()));
    }

    #[test]
    fn test_text_content_and_find() {
        let tree = Element::new("div")
            .child(Element::new("span").class("label").child("Hello"))
            .child(", world");
        assert_eq!(tree.text_content(), "Hello, world");
        let span = tree.find(&|e| e.classes.contains("label")).unwrap();
        assert_eq!(span.tag, "span");
    }
}
