//! Card rendering.

use prism_pigment::{resolve_accent, AccentColor, CardAppearance, CardVariant};

use crate::node::{Element, HostProps, Node};

/// Render a card container. Children sit in an inner layer above the
/// accent line.
pub fn render_card(
    appearance: &CardAppearance,
    children: impl IntoIterator<Item = Node>,
    host: &HostProps,
) -> Element {
    let mut element = Element::new("div")
        .child(Element::new("div").class("relative z-10").children(children))
        .with_host_props(host);

    let mut classes = appearance.classes();
    for token in element.classes.iter() {
        classes.push(token);
    }
    element.classes = classes;
    element
}

/// Card props with the control's defaults.
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub accent: AccentColor,
    pub variant: CardVariant,
    pub host: HostProps,
}

impl Card {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn accent(mut self, accent: AccentColor) -> Self {
        self.accent = accent;
        self
    }

    #[inline]
    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    #[inline]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.host.class = Some(class.into());
        self
    }

    #[inline]
    pub fn host(mut self, host: HostProps) -> Self {
        self.host = host;
        self
    }

    #[inline]
    pub fn appearance(&self) -> CardAppearance {
        resolve_accent(self.accent, self.variant)
    }

    pub fn render(&self, children: impl IntoIterator<Item = Node>) -> Element {
        render_card(&self.appearance(), children, &self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attributes;

    #[test]
    fn test_children_are_wrapped() {
        let element = Card::new().render([Node::from("Body")]);
        assert_eq!(element.tag, "div");
        assert_eq!(element.children.len(), 1);
        let inner = match &element.children[0] {
            Node::Element(inner) => inner,
            Node::Text(_) => panic!("expected inner layer"),
        };
        assert_eq!(inner.class_name(), "relative z-10");
        assert_eq!(element.text_content(), "Body");
    }

    #[test]
    fn test_host_class_and_attributes() {
        let mut attributes = Attributes::new();
        attributes.set("data-testid", "settings-card");
        let host = HostProps {
            class: Some("mt-4".to_string()),
            attributes,
            ..HostProps::default()
        };
        let element = Card::new().accent(AccentColor::Green).host(host).render(Vec::<Node>::new());
        assert!(element.class_name().ends_with("before:bg-green-600 mt-4"));
        assert_eq!(element.attributes.get("data-testid"), Some(Some("settings-card")));
    }

    #[test]
    fn test_card_html() {
        let element = Card::new()
            .variant(CardVariant::Bordered)
            .render([Node::from(Element::new("p").child("Hello"))]);
        insta::assert_snapshot!(
            element.to_html(),
            @r#"<div class="relative p-4 rounded-md backdrop-blur-sm bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-700 shadow-sm hover:shadow-md transition-shadow duration-200"><div class="relative z-10"><p>Hello</p></div></div>"#
        );
    }
}
