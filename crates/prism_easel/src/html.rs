//! HTML serialization of the element tree.

use htmlize::{escape_attribute, escape_text};

use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta"];

impl Element {
    /// Serialize the subtree as compact HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        write_element(self, &mut out);
        out
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        match self {
            Node::Element(element) => element.to_html(),
            Node::Text(text) => escape_text(text.as_str()).into_owned(),
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);

    if !element.classes.is_empty() {
        write_attribute(out, "class", Some(&element.class_name()));
    }
    if !element.style.is_empty() {
        write_attribute(out, "style", Some(&element.style.to_css()));
    }
    for (name, value) in element.attributes.iter() {
        write_attribute(out, name, value);
    }
    if element.disabled && !element.attributes.contains("disabled") {
        write_attribute(out, "disabled", None);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Element(child) => write_element(child, out),
            Node::Text(text) => out.push_str(&escape_text(text.as_str())),
        }
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: Option<&str>) {
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}
