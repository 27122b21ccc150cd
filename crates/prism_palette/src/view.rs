//! Playground page rendering.

use prism_easel::{Element, Node};

use crate::controls::{ControlKind, PropControl};
use crate::types::PlaygroundConfig;

pub const TITLE: &str = "Button Playground";
pub const SUBTITLE: &str = "Customize the button appearance";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

const FIELD_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-md bg-white dark:bg-gray-800";

/// Snapshot of everything the playground displays.
#[derive(Debug, Clone)]
pub struct PlaygroundView {
    pub config: PlaygroundConfig,
    pub preview: Element,
    pub code: String,
    pub controls: Vec<PropControl>,
    pub copied: bool,
}

impl PlaygroundView {
    #[inline]
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

/// Render the whole playground page: header, preview, form and code.
pub fn render_playground(view: &PlaygroundView) -> Element {
    Element::new("div")
        .class("space-y-6")
        .child(header())
        .child(
            Element::new("div")
                .class("flex justify-center items-center min-h-[200px] p-8 bg-gray-50 dark:bg-gray-900 rounded-lg")
                .attr("data-role", "preview")
                .child(view.preview.clone()),
        )
        .child(
            Element::new("div")
                .class("grid grid-cols-1 md:grid-cols-2 gap-6")
                .children(view.controls.iter().map(|control| Node::from(render_control(control)))),
        )
        .child(code_block(view))
}

fn header() -> Element {
    Element::new("div")
        .class("text-center space-y-2")
        .child(Element::new("h2").class("text-2xl font-bold").child(TITLE))
        .child(
            Element::new("p")
                .class("text-gray-600 dark:text-gray-400")
                .child(SUBTITLE),
        )
}

fn render_control(control: &PropControl) -> Element {
    let name = control.field.as_str();
    let label = Element::new("label")
        .class("block text-sm font-medium mb-2")
        .attr("for", name)
        .child(control.label.as_str());

    let input = match control.control {
        ControlKind::Select => Element::new("select")
            .class(FIELD_CLASSES)
            .attr("id", name)
            .attr("name", name)
            .children(control.options.iter().map(|option| {
                let mut element = Element::new("option")
                    .attr("value", option.value.as_str())
                    .child(option.label.as_str());
                if option.value == control.value {
                    element = element.flag("selected");
                }
                Node::from(element)
            })),
        ControlKind::Text => Element::new("input")
            .class(FIELD_CLASSES)
            .attr("type", "text")
            .attr("id", name)
            .attr("name", name)
            .attr("value", control.value.as_str()),
    };

    Element::new("div").child(label).child(input)
}

fn code_block(view: &PlaygroundView) -> Element {
    let copy_button = Element::new("button")
        .class("flex items-center gap-2 px-3 py-1 text-sm bg-gray-100 dark:bg-gray-800 rounded-md hover:bg-gray-200 dark:hover:bg-gray-700 transition")
        .attr("type", "button")
        .attr("data-action", "copy")
        .child(view.copy_label());

    Element::new("div")
        .class("space-y-2")
        .child(
            Element::new("div")
                .class("flex justify-between items-center")
                .child(
                    Element::new("h3")
                        .class("text-lg font-semibold")
                        .child("Generated Code"),
                )
                .child(copy_button),
        )
        .child(
            Element::new("pre")
                .class("p-4 bg-gray-900 text-gray-100 rounded-lg overflow-x-auto")
                .child(Element::new("code").child(view.code.as_str())),
        )
}
