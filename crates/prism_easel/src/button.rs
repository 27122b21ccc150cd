//! Button rendering.

use prism_pigment::{ColorOption, ResolvedAppearance, SizeOption, StyleParameters, VariantOption};

use crate::node::{Attributes, Element, Feedback, Handlers, HostProps, Node, NodeRef, Style};

pub const HOVER_SCALE: f32 = 1.02;
pub const PRESS_SCALE: f32 = 0.98;

/// Render a resolved appearance as an interactive `<button>`.
///
/// Enablement follows a single disabled flag, set by `appearance.disabled`
/// or a host `disabled` attribute. A disabled button is inert to dispatched
/// events and carries no hover/press feedback.
pub fn render_button(appearance: &ResolvedAppearance, content: impl Into<Node>, host: &HostProps) -> Element {
    let mut element = Element::new("button")
        .attr("type", "button")
        .child(content)
        .with_host_props(host);

    let appearance = ResolvedAppearance {
        disabled: appearance.disabled || element.disabled,
        ..*appearance
    };

    // Resolved classes come first so host classes stay last.
    let mut classes = appearance.classes();
    for token in element.classes.iter() {
        classes.push(token);
    }
    element.classes = classes;

    element.disabled = appearance.disabled;
    element.feedback = if appearance.is_interactive() {
        Feedback::Scale {
            hover: HOVER_SCALE,
            press: PRESS_SCALE,
        }
    } else {
        Feedback::None
    };
    element
}

/// Button props with the control's defaults.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub params: StyleParameters,
    pub disabled: bool,
    pub full_width: bool,
    pub host: HostProps,
}

/// Former name of [`Button`].
#[deprecated(note = "use `Button`")]
pub type NeonButton = Button;

impl Button {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_params(params: StyleParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[inline]
    pub fn color(mut self, color: ColorOption) -> Self {
        self.params.color = color;
        self
    }

    #[inline]
    pub fn size(mut self, size: SizeOption) -> Self {
        self.params.size = size;
        self
    }

    #[inline]
    pub fn variant(mut self, variant: VariantOption) -> Self {
        self.params.variant = variant;
        self
    }

    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[inline]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[inline]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.host.class = Some(class.into());
        self
    }

    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.host.style = style;
        self
    }

    #[inline]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.host.attributes = attributes;
        self
    }

    #[inline]
    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.host.handlers = handlers;
        self
    }

    #[inline]
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.host.node_ref = Some(node_ref);
        self
    }

    #[inline]
    pub fn appearance(&self) -> ResolvedAppearance {
        self.params.resolve(self.disabled, self.full_width)
    }

    pub fn render(&self, content: impl Into<Node>) -> Element {
        render_button(&self.appearance(), content, &self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let button = Button::new();
        assert_eq!(button.params.color, ColorOption::Default);
        assert_eq!(button.params.size, SizeOption::Md);
        assert_eq!(button.params.variant, VariantOption::Solid);
        assert!(!button.disabled);
        assert!(!button.full_width);
    }

    #[test]
    fn test_enabled_button_has_feedback() {
        let element = Button::new().color(ColorOption::Primary).render("Save");
        assert!(!element.disabled);
        assert_eq!(
            element.feedback,
            Feedback::Scale {
                hover: HOVER_SCALE,
                press: PRESS_SCALE
            }
        );
        assert_eq!(element.text_content(), "Save");
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut handlers = Handlers::new();
        handlers.on("click", move || counter.set(counter.get() + 1));

        let element = Button::new()
            .disabled(true)
            .handlers(handlers)
            .render("Save");

        assert!(element.disabled);
        assert_eq!(element.feedback, Feedback::None);
        assert_eq!(element.dispatch("click"), 0);
        assert_eq!(clicks.get(), 0);
        assert!(element.handlers.has("click"));
        assert!(element.to_html().ends_with(" disabled>Save</button>"));
    }

    #[test]
    fn test_host_props_pass_through() {
        let mut attributes = Attributes::new();
        attributes.set("aria-label", "Remove item").set("type", "submit");
        let mut style = Style::new();
        style.set("margin-top", "4px");
        let node_ref = NodeRef::new();

        let element = Button::new()
            .class("ml-2")
            .attributes(attributes)
            .style(style)
            .node_ref(node_ref.clone())
            .render("Remove");

        assert_eq!(element.attributes.get("type"), Some(Some("submit")));
        assert_eq!(element.attributes.get("aria-label"), Some(Some("Remove item")));
        assert_eq!(element.style.get("margin-top"), Some("4px"));
        assert_eq!(element.class_name().rsplit(' ').next(), Some("ml-2"));
        assert!(element.node_ref.as_ref().unwrap().ptr_eq(&node_ref));
    }

    #[test]
    fn test_raw_class_and_style_attributes_emit_once() {
        let mut attributes = Attributes::new();
        attributes.set("class", "ml-2").set("style", "color: red");
        let mut style = Style::new();
        style.set("margin-top", "4px");

        let html = Button::new()
            .attributes(attributes)
            .style(style)
            .render("X")
            .to_html();

        assert_eq!(html.matches(" class=").count(), 1);
        assert_eq!(html.matches(" style=").count(), 1);
        assert!(html.contains(" border-gray-600 ml-2\""));
        assert!(html.contains(" style=\"color: red; margin-top: 4px\""));
    }

    #[test]
    fn test_host_disabled_attribute_makes_button_inert() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut handlers = Handlers::new();
        handlers.on("click", move || counter.set(counter.get() + 1));
        let mut attributes = Attributes::new();
        attributes.flag("disabled");

        let element = Button::new()
            .attributes(attributes)
            .handlers(handlers)
            .render("X");

        assert!(element.disabled);
        assert_eq!(element.feedback, Feedback::None);
        assert_eq!(element.dispatch("click"), 0);
        assert_eq!(clicks.get(), 0);
        assert!(element.class_name().ends_with("opacity-50 cursor-not-allowed"));
        let html = element.to_html();
        assert_eq!(html.matches(" disabled").count(), 1);
        assert!(html.ends_with(" type=\"button\" disabled>X</button>"));
    }

    #[test]
    fn test_ghost_button_html() {
        let element = Button::new()
            .variant(VariantOption::Ghost)
            .size(SizeOption::Lg)
            .render("Cancel");
        insta::assert_snapshot!(
            element.to_html(),
            @r#"<button class="relative inline-flex items-center justify-center rounded-md font-medium transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500 dark:focus:ring-gray-400 px-6 py-3 text-lg bg-transparent hover:bg-gray-100 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300" type="button">Cancel</button>"#
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_alias() {
        let element = NeonButton::new().color(ColorOption::Success).render("Go");
        let current = Button::new().color(ColorOption::Success).render("Go");
        assert_eq!(element.to_html(), current.to_html());
    }
}
